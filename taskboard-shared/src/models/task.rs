/// Task entity model
///
/// A task has a title, an optional description, a status, and an optional
/// owning user. Ids and timestamps are assigned by the store.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE task_status AS ENUM ('todo', 'in_progress', 'completed');
///
/// CREATE TABLE tasks (
///     id SERIAL PRIMARY KEY,
///     title VARCHAR(255) NOT NULL,
///     description VARCHAR(500),
///     status task_status NOT NULL DEFAULT 'todo',
///     user_id INTEGER REFERENCES users(id),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// Status is a plain enumeration with no transition graph: any value may
/// be updated to any other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started yet (the store default for new tasks)
    #[default]
    Todo,

    /// Currently being worked on
    InProgress,

    /// Done
    Completed,
}

impl TaskStatus {
    /// Converts the status to its database/wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }
}

/// Task entity as stored
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TaskEntry {
    /// Unique task id (store-assigned)
    pub id: i32,

    /// Task title
    pub title: String,

    /// Optional free-form description (at most 500 characters)
    pub description: Option<String>,

    /// Current status
    pub status: TaskStatus,

    /// Owning user, if any
    ///
    /// When present, must reference an existing user.
    pub user_id: Option<i32>,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for inserting a new task
///
/// Status is not part of the input; the store defaults it to `todo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    /// Task title
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Optional owning user
    pub user_id: Option<i32>,
}

/// Input for patching an existing task
///
/// All fields are optional. Only `Some` fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New title
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New status
    pub status: Option<TaskStatus>,

    /// New owning user
    pub user_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_as_str() {
        assert_eq!(TaskStatus::Todo.as_str(), "todo");
        assert_eq!(TaskStatus::InProgress.as_str(), "in_progress");
        assert_eq!(TaskStatus::Completed.as_str(), "completed");
    }

    #[test]
    fn test_task_status_default_is_todo() {
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);
    }

    #[test]
    fn test_task_status_serde_uses_snake_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let parsed: TaskStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, TaskStatus::Completed);
    }

    #[test]
    fn test_task_status_rejects_unknown_values() {
        let parsed: Result<TaskStatus, _> = serde_json::from_str("\"archived\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_task_patch_default_is_all_none() {
        let patch = TaskPatch::default();
        assert!(patch.title.is_none());
        assert!(patch.description.is_none());
        assert!(patch.status.is_none());
        assert!(patch.user_id.is_none());
    }
}
