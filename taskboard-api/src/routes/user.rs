/// User endpoints
///
/// # Endpoints
///
/// - `POST /user` - Create a user
///
/// Users expose no update or delete routes.

use crate::app::AppState;
use crate::error::ApiResult;
use crate::extract::ValidatedJson;
use crate::services::user::UserDto;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use taskboard_shared::models::user::NewUser;
use validator::Validate;

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Email address
    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    pub email: String,
}

/// Creates a user
///
/// # Errors
///
/// - 400 Bad Request: Invalid body
/// - 409 Conflict: Email already taken
/// - 500 Internal Server Error: Database error
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Json<UserDto>> {
    let user = state
        .users
        .create_user(NewUser {
            name: request.name,
            email: request.email,
        })
        .await?;

    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_request_validation() {
        let valid = CreateUserRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = CreateUserRequest {
            name: "Jane Doe".to_string(),
            email: "not-an-email".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let empty_name = CreateUserRequest {
            name: "".to_string(),
            email: "jane@example.com".to_string(),
        };
        assert!(empty_name.validate().is_err());

        let long_email = CreateUserRequest {
            name: "Jane Doe".to_string(),
            email: format!("{}@example.com", "a".repeat(250)),
        };
        assert!(long_email.validate().is_err());
    }
}
