/// Task endpoints
///
/// # Endpoints
///
/// - `GET /task` - List all tasks
/// - `POST /task` - Create a task
/// - `PATCH /task/:id` - Partially update a task
/// - `DELETE /task/:id` - Delete a task
/// - `PATCH /task/:id/assign` - Assign a user to a task
///
/// Request bodies are validated by [`ValidatedJson`] before the service is
/// invoked. The update endpoint additionally rejects an empty field set:
/// an empty-but-well-typed object passes schema validation yet carries
/// nothing to apply.

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use crate::extract::ValidatedJson;
use crate::services::task::{DeleteTaskResponse, TaskDto};
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use taskboard_shared::models::task::{NewTask, TaskPatch, TaskStatus};
use validator::Validate;

/// Create task request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task title
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// Optional description
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    /// Optional owning user
    #[validate(range(min = 1, message = "user_id must be a positive integer"))]
    pub user_id: Option<i32>,
}

/// Update task request
///
/// A subset of `{title, description, status}`; must not be empty.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    /// New title
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    /// New description
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    /// New status
    pub status: Option<TaskStatus>,
}

impl UpdateTaskRequest {
    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

/// Assign user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssignUserRequest {
    /// User to assign
    #[validate(range(min = 1, message = "user_id must be a positive integer"))]
    pub user_id: i32,
}

/// Lists all tasks
///
/// # Errors
///
/// - 500 Internal Server Error: Database error
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<TaskDto>>> {
    let tasks = state.tasks.list_tasks().await?;

    Ok(Json(tasks))
}

/// Creates a task
///
/// # Errors
///
/// - 400 Bad Request: Invalid body
/// - 404 Not Found: `user_id` references no user
/// - 500 Internal Server Error: Database error
pub async fn create_task(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTaskRequest>,
) -> ApiResult<Json<TaskDto>> {
    let task = state
        .tasks
        .create_task(NewTask {
            title: request.title,
            description: request.description,
            user_id: request.user_id,
        })
        .await?;

    Ok(Json(task))
}

/// Partially updates a task
///
/// # Errors
///
/// - 400 Bad Request: Invalid body
/// - 422 Unprocessable Entity: Empty update body
/// - 404 Not Found: No task with this id
/// - 500 Internal Server Error: Database error
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateTaskRequest>,
) -> ApiResult<Json<TaskDto>> {
    if request.is_empty() {
        tracing::warn!(task_id = id, "empty update body rejected");
        return Err(ApiError::Unprocessable("No data provided for update".to_string()));
    }

    let task = state
        .tasks
        .update_task(
            id,
            TaskPatch {
                title: request.title,
                description: request.description,
                status: request.status,
                user_id: None,
            },
        )
        .await?;

    Ok(Json(task))
}

/// Deletes a task
///
/// # Errors
///
/// - 404 Not Found: No task with this id
/// - 500 Internal Server Error: Database error
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<DeleteTaskResponse>> {
    let confirmation = state.tasks.delete_task(id).await?;

    Ok(Json(confirmation))
}

/// Assigns a user to a task
///
/// # Errors
///
/// - 400 Bad Request: Invalid body
/// - 404 Not Found: No task or no user with the given ids
/// - 500 Internal Server Error: Database error
pub async fn assign_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<AssignUserRequest>,
) -> ApiResult<Json<TaskDto>> {
    let task = state.tasks.assign_user_to_task(id, request.user_id).await?;

    Ok(Json(task))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_request_validation() {
        let valid = CreateTaskRequest {
            title: "Write the report".to_string(),
            description: Some("Quarterly numbers".to_string()),
            user_id: Some(1),
        };
        assert!(valid.validate().is_ok());

        let empty_title = CreateTaskRequest {
            title: "".to_string(),
            description: None,
            user_id: None,
        };
        assert!(empty_title.validate().is_err());

        let long_description = CreateTaskRequest {
            title: "T".to_string(),
            description: Some("d".repeat(501)),
            user_id: None,
        };
        assert!(long_description.validate().is_err());

        let bad_user_id = CreateTaskRequest {
            title: "T".to_string(),
            description: None,
            user_id: Some(0),
        };
        assert!(bad_user_id.validate().is_err());
    }

    #[test]
    fn test_update_task_request_empty_detection() {
        let empty = UpdateTaskRequest::default();
        assert!(empty.is_empty());

        let with_status = UpdateTaskRequest {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        };
        assert!(!with_status.is_empty());
    }

    #[test]
    fn test_update_task_request_ignores_unknown_fields() {
        // Unknown fields are stripped by deserialization, so a body with
        // only unknown fields parses to an empty field set.
        let parsed: UpdateTaskRequest =
            serde_json::from_str(r#"{"priority": "high"}"#).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_update_task_request_rejects_unknown_status() {
        let parsed: Result<UpdateTaskRequest, _> =
            serde_json::from_str(r#"{"status": "archived"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_assign_user_request_validation() {
        let valid = AssignUserRequest { user_id: 1 };
        assert!(valid.validate().is_ok());

        let invalid = AssignUserRequest { user_id: 0 };
        assert!(invalid.validate().is_err());
    }
}
