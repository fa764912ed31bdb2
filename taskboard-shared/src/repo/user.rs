/// User repository
///
/// Lookup and insert operations for users, plus the advisory email
/// uniqueness check. The store's UNIQUE constraint on `users.email` is the
/// authoritative guarantee; a unique violation at insert time is reported
/// as the same [`RepoError::EmailTaken`] the pre-check raises.

use crate::models::user::{NewUser, UserEntry};
use crate::repo::crud::{CrudExecutor, Record};
use crate::repo::error::{EntityKind, RepoError};
use sqlx::PgExecutor;

impl Record for UserEntry {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str = "id, name, email";
    const KIND: EntityKind = EntityKind::User;
}

/// Repository for user entries
#[derive(Debug, Clone)]
pub struct UserRepo {
    crud: CrudExecutor<UserEntry>,
}

impl UserRepo {
    /// Creates a user repository
    pub fn new() -> Self {
        Self {
            crud: CrudExecutor::new(),
        }
    }

    /// Fetches one user by id
    ///
    /// # Errors
    ///
    /// Fails with [`RepoError::NotFound`] if no user matches.
    pub async fn find_by_id<'c>(
        &self,
        executor: impl PgExecutor<'c>,
        id: i32,
    ) -> Result<UserEntry, RepoError> {
        self.crud.find_by_id(executor, id).await
    }

    /// Fetches one user by email, if any
    pub async fn find_by_email<'c>(
        &self,
        executor: impl PgExecutor<'c>,
        email: &str,
    ) -> Result<Option<UserEntry>, RepoError> {
        let user = sqlx::query_as::<_, UserEntry>(
            "SELECT id, name, email FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(executor)
        .await?;

        Ok(user)
    }

    /// Fails if a user with this email already exists
    ///
    /// This is a check-then-act fast path with no isolation guarantee
    /// against concurrent inserts; the UNIQUE constraint is what actually
    /// prevents duplicates.
    ///
    /// # Errors
    ///
    /// Fails with [`RepoError::EmailTaken`] if a match exists.
    pub async fn ensure_email_not_taken<'c>(
        &self,
        executor: impl PgExecutor<'c>,
        email: &str,
    ) -> Result<(), RepoError> {
        let existing = self.find_by_email(executor, email).await?;

        if existing.is_some() {
            return Err(RepoError::EmailTaken {
                email: email.to_string(),
            });
        }

        Ok(())
    }

    /// Inserts a new user
    ///
    /// # Errors
    ///
    /// Fails with [`RepoError::EmailTaken`] if the email's unique
    /// constraint is violated.
    pub async fn insert<'c>(
        &self,
        executor: impl PgExecutor<'c>,
        data: NewUser,
    ) -> Result<UserEntry, RepoError> {
        let result = sqlx::query_as::<_, UserEntry>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(data.name)
        .bind(data.email.clone())
        .fetch_one(executor)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(RepoError::EmailTaken { email: data.email })
            }
            Err(error) => Err(error.into()),
        }
    }
}

impl Default for UserRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_repo_is_cloneable() {
        let repo = UserRepo::new();
        let _clone = repo.clone();
    }

    // Database-backed tests are in tests/repo_tests.rs
}
