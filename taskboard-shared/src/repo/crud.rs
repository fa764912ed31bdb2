/// Generic CRUD executor
///
/// The fixed operation set shared by every entity repository, parameterized
/// over the entity type. Each repository instantiates one executor
/// configured for its table; entity-specific operations (inserts, dynamic
/// updates) stay on the repository itself.
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::task::TaskEntry;
/// use taskboard_shared::repo::crud::CrudExecutor;
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), taskboard_shared::repo::RepoError> {
/// let crud: CrudExecutor<TaskEntry> = CrudExecutor::new();
/// let task = crud.find_by_id(&pool, 1).await?;
/// println!("{}", task.title);
/// # Ok(())
/// # }
/// ```

use crate::repo::error::{EntityKind, RepoError};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgExecutor};
use std::marker::PhantomData;

/// A persisted entity a [`CrudExecutor`] can operate on
pub trait Record: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    /// Table name
    const TABLE: &'static str;

    /// Comma-separated select list covering every struct field, in order
    const COLUMNS: &'static str;

    /// Failure subject reported when a row is missing
    const KIND: EntityKind;
}

/// Generic CRUD operations for one entity type
///
/// SQL text is derived from the entity's [`Record`] metadata once, at
/// construction. All operations take an executor so they run standalone
/// (`&pool`) or inside a transaction (`&mut **tx`).
#[derive(Debug, Clone)]
pub struct CrudExecutor<R: Record> {
    select_all: String,
    select_one: String,
    delete_one: String,
    record: PhantomData<R>,
}

impl<R: Record> CrudExecutor<R> {
    /// Creates an executor configured for `R`'s table
    pub fn new() -> Self {
        Self {
            select_all: format!("SELECT {} FROM {} ORDER BY id", R::COLUMNS, R::TABLE),
            select_one: format!("SELECT {} FROM {} WHERE id = $1", R::COLUMNS, R::TABLE),
            delete_one: format!(
                "DELETE FROM {} WHERE id = $1 RETURNING {}",
                R::TABLE,
                R::COLUMNS
            ),
            record: PhantomData,
        }
    }

    /// Fetches all rows, ordered by id
    pub async fn find_all<'c>(
        &self,
        executor: impl PgExecutor<'c>,
    ) -> Result<Vec<R>, RepoError> {
        let rows = sqlx::query_as::<_, R>(&self.select_all)
            .fetch_all(executor)
            .await?;

        Ok(rows)
    }

    /// Fetches one row by id
    ///
    /// # Errors
    ///
    /// Fails with [`RepoError::NotFound`] if no row matches.
    pub async fn find_by_id<'c>(
        &self,
        executor: impl PgExecutor<'c>,
        id: i32,
    ) -> Result<R, RepoError> {
        sqlx::query_as::<_, R>(&self.select_one)
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(RepoError::NotFound {
                entity: R::KIND,
                id,
            })
    }

    /// Deletes one row by id, returning the deleted row
    ///
    /// # Errors
    ///
    /// Fails with [`RepoError::NotFound`] if no row matches.
    pub async fn delete_by_id<'c>(
        &self,
        executor: impl PgExecutor<'c>,
        id: i32,
    ) -> Result<R, RepoError> {
        sqlx::query_as::<_, R>(&self.delete_one)
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(RepoError::NotFound {
                entity: R::KIND,
                id,
            })
    }
}

impl<R: Record> Default for CrudExecutor<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::TaskEntry;
    use crate::models::user::UserEntry;

    #[test]
    fn test_sql_is_derived_from_record_metadata() {
        let crud: CrudExecutor<UserEntry> = CrudExecutor::new();

        assert_eq!(crud.select_all, "SELECT id, name, email FROM users ORDER BY id");
        assert_eq!(crud.select_one, "SELECT id, name, email FROM users WHERE id = $1");
        assert_eq!(
            crud.delete_one,
            "DELETE FROM users WHERE id = $1 RETURNING id, name, email"
        );
    }

    #[test]
    fn test_task_record_metadata() {
        assert_eq!(TaskEntry::TABLE, "tasks");
        assert_eq!(TaskEntry::KIND, EntityKind::Task);
        assert!(TaskEntry::COLUMNS.starts_with("id, title"));
    }

    #[test]
    fn test_user_record_metadata() {
        assert_eq!(UserEntry::TABLE, "users");
        assert_eq!(UserEntry::KIND, EntityKind::User);
        assert_eq!(UserEntry::COLUMNS, "id, name, email");
    }
}
