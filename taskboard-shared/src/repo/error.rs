/// Repository error type
///
/// Repository operations fail with a tagged error rather than a
/// store-specific one: "no row" conditions are translated to
/// [`RepoError::NotFound`] at this boundary, carrying a structured subject
/// (which entity, which id) so callers can tell failures apart without
/// inspecting message text.

use thiserror::Error;

/// The kind of entity a repository operation was acting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Task,
    User,
}

impl EntityKind {
    /// Lowercase name used in messages and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Task => "task",
            EntityKind::User => "user",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by repository operations
#[derive(Debug, Error)]
pub enum RepoError {
    /// The referenced entity does not exist
    #[error("no {entity} found with id {id}")]
    NotFound {
        /// Which entity kind was missing
        entity: EntityKind,
        /// The id that did not match any row
        id: i32,
    },

    /// A user with this email already exists
    #[error("email {email} is already taken")]
    EmailTaken {
        /// The conflicting email address
        email: String,
    },

    /// Any other database failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_display() {
        assert_eq!(EntityKind::Task.to_string(), "task");
        assert_eq!(EntityKind::User.to_string(), "user");
    }

    #[test]
    fn test_not_found_message_carries_subject() {
        let error = RepoError::NotFound {
            entity: EntityKind::User,
            id: 42,
        };
        assert_eq!(error.to_string(), "no user found with id 42");
    }

    #[test]
    fn test_email_taken_message() {
        let error = RepoError::EmailTaken {
            email: "a@b.com".to_string(),
        };
        assert_eq!(error.to_string(), "email a@b.com is already taken");
    }
}
