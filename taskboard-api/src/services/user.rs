/// User service
///
/// Creates users, enforcing email uniqueness. The pre-insert check is an
/// advisory fast path; the store's unique constraint is what actually
/// guarantees uniqueness under concurrent requests (see the repository).

use crate::error::{ApiError, ApiResult};
use crate::services::internal_error;
use serde::Serialize;
use sqlx::PgPool;
use taskboard_shared::models::user::{NewUser, UserEntry};
use taskboard_shared::repo::user::UserRepo;
use taskboard_shared::repo::RepoError;

/// User shape crossing the HTTP boundary
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    /// User id
    pub id: i32,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

impl From<UserEntry> for UserDto {
    fn from(user: UserEntry) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Service for user operations
#[derive(Clone)]
pub struct UserService {
    db: PgPool,
    users: UserRepo,
}

impl UserService {
    /// Creates a user service with its collaborators
    pub fn new(db: PgPool, users: UserRepo) -> Self {
        Self { db, users }
    }

    /// Creates a user
    ///
    /// # Errors
    ///
    /// - `Conflict` if a user with this email already exists; no duplicate
    ///   row is created
    /// - `Internal` on any unexpected failure
    pub async fn create_user(&self, data: NewUser) -> ApiResult<UserDto> {
        match self.check_and_insert(data).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, email = %user.email, "user created");
                Ok(UserDto::from(user))
            }
            Err(RepoError::EmailTaken { email }) => {
                tracing::warn!(%email, "user creation with taken email");
                Err(ApiError::Conflict(format!(
                    "User with email {} already exists",
                    email
                )))
            }
            Err(error) => Err(internal_error(error)),
        }
    }

    async fn check_and_insert(&self, data: NewUser) -> Result<UserEntry, RepoError> {
        self.users
            .ensure_email_not_taken(&self.db, &data.email)
            .await?;

        self.users.insert(&self.db, data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_mapping_preserves_fields() {
        let entry = UserEntry {
            id: 3,
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
        };

        let dto = UserDto::from(entry);
        assert_eq!(dto.id, 3);
        assert_eq!(dto.name, "Jane");
        assert_eq!(dto.email, "jane@example.com");
    }

    // Database-backed service flows are covered in tests/integration_test.rs
}
