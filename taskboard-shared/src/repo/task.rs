/// Task repository
///
/// CRUD operations for tasks: the generic surface comes from a configured
/// [`CrudExecutor`], inserts and partial updates are task-specific.
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::task::{NewTask, TaskPatch};
/// use taskboard_shared::repo::task::TaskRepo;
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), taskboard_shared::repo::RepoError> {
/// let tasks = TaskRepo::new();
///
/// let task = tasks
///     .insert(&pool, NewTask {
///         title: "Write the report".to_string(),
///         description: Some("Quarterly numbers".to_string()),
///         user_id: None,
///     })
///     .await?;
///
/// let patch = TaskPatch {
///     title: Some("Write the Q3 report".to_string()),
///     ..Default::default()
/// };
/// tasks.update_by_id(&pool, task.id, patch).await?;
/// # Ok(())
/// # }
/// ```

use crate::models::task::{NewTask, TaskEntry, TaskPatch};
use crate::repo::crud::{CrudExecutor, Record};
use crate::repo::error::{EntityKind, RepoError};
use sqlx::PgExecutor;

impl Record for TaskEntry {
    const TABLE: &'static str = "tasks";
    const COLUMNS: &'static str = "id, title, description, status, user_id, created_at, updated_at";
    const KIND: EntityKind = EntityKind::Task;
}

/// Repository for task entries
#[derive(Debug, Clone)]
pub struct TaskRepo {
    crud: CrudExecutor<TaskEntry>,
}

impl TaskRepo {
    /// Creates a task repository
    pub fn new() -> Self {
        Self {
            crud: CrudExecutor::new(),
        }
    }

    /// Fetches all tasks, ordered by id
    pub async fn find_all<'c>(
        &self,
        executor: impl PgExecutor<'c>,
    ) -> Result<Vec<TaskEntry>, RepoError> {
        self.crud.find_all(executor).await
    }

    /// Fetches one task by id
    ///
    /// # Errors
    ///
    /// Fails with [`RepoError::NotFound`] if no task matches.
    pub async fn find_by_id<'c>(
        &self,
        executor: impl PgExecutor<'c>,
        id: i32,
    ) -> Result<TaskEntry, RepoError> {
        self.crud.find_by_id(executor, id).await
    }

    /// Inserts a new task
    ///
    /// Status is left to the store default (`todo`).
    pub async fn insert<'c>(
        &self,
        executor: impl PgExecutor<'c>,
        data: NewTask,
    ) -> Result<TaskEntry, RepoError> {
        let task = sqlx::query_as::<_, TaskEntry>(
            r#"
            INSERT INTO tasks (title, description, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, status, user_id, created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.user_id)
        .fetch_one(executor)
        .await?;

        Ok(task)
    }

    /// Applies a partial update to one task by id
    ///
    /// Only `Some` fields in `patch` are written; `updated_at` is always
    /// refreshed.
    ///
    /// # Errors
    ///
    /// Fails with [`RepoError::NotFound`] if no task matches.
    pub async fn update_by_id<'c>(
        &self,
        executor: impl PgExecutor<'c>,
        id: i32,
        patch: TaskPatch,
    ) -> Result<TaskEntry, RepoError> {
        // Build the SET clause from whichever fields are present
        let mut query = String::from("UPDATE tasks SET updated_at = NOW()");
        let mut bind_count = 1;

        if patch.title.is_some() {
            bind_count += 1;
            query.push_str(&format!(", title = ${}", bind_count));
        }
        if patch.description.is_some() {
            bind_count += 1;
            query.push_str(&format!(", description = ${}", bind_count));
        }
        if patch.status.is_some() {
            bind_count += 1;
            query.push_str(&format!(", status = ${}", bind_count));
        }
        if patch.user_id.is_some() {
            bind_count += 1;
            query.push_str(&format!(", user_id = ${}", bind_count));
        }

        query.push_str(" WHERE id = $1 RETURNING ");
        query.push_str(TaskEntry::COLUMNS);

        let mut q = sqlx::query_as::<_, TaskEntry>(&query).bind(id);

        if let Some(title) = patch.title {
            q = q.bind(title);
        }
        if let Some(description) = patch.description {
            q = q.bind(description);
        }
        if let Some(status) = patch.status {
            q = q.bind(status);
        }
        if let Some(user_id) = patch.user_id {
            q = q.bind(user_id);
        }

        q.fetch_optional(executor)
            .await?
            .ok_or(RepoError::NotFound {
                entity: EntityKind::Task,
                id,
            })
    }

    /// Deletes one task by id, returning the deleted entry
    ///
    /// # Errors
    ///
    /// Fails with [`RepoError::NotFound`] if no task matches.
    pub async fn delete_by_id<'c>(
        &self,
        executor: impl PgExecutor<'c>,
        id: i32,
    ) -> Result<TaskEntry, RepoError> {
        self.crud.delete_by_id(executor, id).await
    }
}

impl Default for TaskRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_repo_is_cloneable() {
        let repo = TaskRepo::new();
        let _clone = repo.clone();
    }

    // Database-backed tests are in tests/repo_tests.rs
}
