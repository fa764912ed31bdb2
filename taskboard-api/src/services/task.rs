/// Task service
///
/// Orchestrates the task and user repositories, maps task entries to
/// response DTOs, and enforces the cross-entity rule that a task's user
/// must exist before it can be associated.

use crate::error::{ApiError, ApiResult};
use crate::services::internal_error;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use taskboard_shared::models::task::{NewTask, TaskEntry, TaskPatch, TaskStatus};
use taskboard_shared::repo::task::TaskRepo;
use taskboard_shared::repo::user::UserRepo;
use taskboard_shared::repo::{with_transaction, EntityKind, RepoError};

/// Task shape crossing the HTTP boundary
#[derive(Debug, Clone, Serialize)]
pub struct TaskDto {
    /// Task id
    pub id: i32,

    /// Title
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Current status
    pub status: TaskStatus,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Owning user, if any
    pub user_id: Option<i32>,
}

impl From<TaskEntry> for TaskDto {
    fn from(task: TaskEntry) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            created_at: task.created_at,
            updated_at: task.updated_at,
            user_id: task.user_id,
        }
    }
}

/// Confirmation returned after deleting a task
#[derive(Debug, Clone, Serialize)]
pub struct DeleteTaskResponse {
    /// Human-readable confirmation keyed by the deleted id
    pub message: String,
}

/// Service for task operations
#[derive(Clone)]
pub struct TaskService {
    db: PgPool,
    tasks: TaskRepo,
    users: UserRepo,
}

impl TaskService {
    /// Creates a task service with its collaborators
    pub fn new(db: PgPool, tasks: TaskRepo, users: UserRepo) -> Self {
        Self { db, tasks, users }
    }

    /// Lists all tasks
    pub async fn list_tasks(&self) -> ApiResult<Vec<TaskDto>> {
        let tasks = self
            .tasks
            .find_all(&self.db)
            .await
            .map_err(internal_error)?;

        Ok(tasks.into_iter().map(TaskDto::from).collect())
    }

    /// Creates a task, optionally owned by an existing user
    ///
    /// # Errors
    ///
    /// - `NotFound` if `user_id` is given and no such user exists; no task
    ///   row is created in that case
    /// - `Internal` on any unexpected failure
    pub async fn create_task(&self, data: NewTask) -> ApiResult<TaskDto> {
        // Check that the owning user exists before inserting
        if let Some(user_id) = data.user_id {
            match self.users.find_by_id(&self.db, user_id).await {
                Ok(_) => {}
                Err(RepoError::NotFound { id, .. }) => {
                    tracing::warn!(user_id = id, "task creation referenced a missing user");
                    return Err(ApiError::NotFound(format!(
                        "Task cannot be associated with a user because no user was found with ID: {}.",
                        id
                    )));
                }
                Err(error) => return Err(internal_error(error)),
            }
        }

        let task = self
            .tasks
            .insert(&self.db, data)
            .await
            .map_err(internal_error)?;

        tracing::info!(task_id = task.id, "task created");

        Ok(TaskDto::from(task))
    }

    /// Applies a partial update to a task
    ///
    /// Empty field sets are rejected at the HTTP boundary before this
    /// layer is reached.
    pub async fn update_task(&self, id: i32, patch: TaskPatch) -> ApiResult<TaskDto> {
        match self.tasks.update_by_id(&self.db, id, patch).await {
            Ok(task) => {
                tracing::info!(task_id = task.id, "task updated");
                Ok(TaskDto::from(task))
            }
            Err(RepoError::NotFound { .. }) => {
                tracing::warn!(task_id = id, "update referenced a missing task");
                Err(ApiError::NotFound(format!("No task was found with ID: {}.", id)))
            }
            Err(error) => Err(internal_error(error)),
        }
    }

    /// Deletes a task, returning a confirmation message
    pub async fn delete_task(&self, id: i32) -> ApiResult<DeleteTaskResponse> {
        match self.tasks.delete_by_id(&self.db, id).await {
            Ok(task) => {
                tracing::info!(task_id = task.id, "task deleted");
                Ok(DeleteTaskResponse {
                    message: format!("Task with ID: {} deleted successfully.", task.id),
                })
            }
            Err(RepoError::NotFound { .. }) => {
                tracing::warn!(task_id = id, "deletion referenced a missing task");
                Err(ApiError::NotFound(format!("No task was found with ID: {}.", id)))
            }
            Err(error) => Err(internal_error(error)),
        }
    }

    /// Assigns a user to a task
    ///
    /// The existence check and the update run inside one transaction, so
    /// the association is atomic with respect to other transactions. The
    /// two possible NotFound causes are told apart by the structured
    /// failure subject, never by message text.
    pub async fn assign_user_to_task(&self, task_id: i32, user_id: i32) -> ApiResult<TaskDto> {
        let tasks = self.tasks.clone();
        let users = self.users.clone();

        let result = with_transaction(&self.db, move |tx| {
            Box::pin(async move {
                users.find_by_id(&mut **tx, user_id).await?;

                tasks
                    .update_by_id(
                        &mut **tx,
                        task_id,
                        TaskPatch {
                            user_id: Some(user_id),
                            ..Default::default()
                        },
                    )
                    .await
            })
        })
        .await;

        match result {
            Ok(task) => {
                tracing::info!(task_id, user_id, "user assigned to task");
                Ok(TaskDto::from(task))
            }
            Err(RepoError::NotFound {
                entity: EntityKind::User,
                id,
            }) => {
                tracing::warn!(task_id, user_id = id, "assignment referenced a missing user");
                Err(ApiError::NotFound(format!(
                    "Task cannot be associated with a user because no user was found with ID: {}.",
                    id
                )))
            }
            Err(RepoError::NotFound {
                entity: EntityKind::Task,
                id,
            }) => {
                tracing::warn!(task_id = id, "assignment referenced a missing task");
                Err(ApiError::NotFound(format!("No task was found with ID: {}.", id)))
            }
            Err(error) => Err(internal_error(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> TaskEntry {
        TaskEntry {
            id: 7,
            title: "T".to_string(),
            description: Some("D".to_string()),
            status: TaskStatus::Todo,
            user_id: Some(1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_dto_mapping_preserves_fields() {
        let entry = sample_entry();
        let dto = TaskDto::from(entry.clone());

        assert_eq!(dto.id, entry.id);
        assert_eq!(dto.title, entry.title);
        assert_eq!(dto.description, entry.description);
        assert_eq!(dto.status, entry.status);
        assert_eq!(dto.user_id, entry.user_id);
        assert_eq!(dto.created_at, entry.created_at);
        assert_eq!(dto.updated_at, entry.updated_at);
    }

    #[test]
    fn test_dto_serializes_snake_case_fields() {
        let json = serde_json::to_value(TaskDto::from(sample_entry())).unwrap();

        assert_eq!(json["status"], "todo");
        assert_eq!(json["user_id"], 1);
        assert!(json.get("created_at").is_some());
        assert!(json.get("updated_at").is_some());
    }

    #[test]
    fn test_delete_response_message_is_keyed_by_id() {
        let response = DeleteTaskResponse {
            message: format!("Task with ID: {} deleted successfully.", 7),
        };
        assert_eq!(response.message, "Task with ID: 7 deleted successfully.");
    }

    // Database-backed service flows are covered in tests/integration_test.rs
}
