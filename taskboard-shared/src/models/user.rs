/// User entity model
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id SERIAL PRIMARY KEY,
///     name VARCHAR(255) NOT NULL,
///     email VARCHAR(255) NOT NULL UNIQUE
/// );
/// ```
///
/// Email must be unique across all users; the constraint is enforced by
/// the store, with an advisory pre-insert check in the repository.

use serde::{Deserialize, Serialize};

/// User entity as stored
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserEntry {
    /// Unique user id (store-assigned)
    pub id: i32,

    /// Display name
    pub name: String,

    /// Email address, unique across all users
    pub email: String,
}

/// Input for inserting a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_struct() {
        let input = NewUser {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        };

        assert_eq!(input.name, "Test User");
        assert_eq!(input.email, "test@example.com");
    }
}
