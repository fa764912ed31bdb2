/// Repositories for Taskboard entities
///
/// Each entity repository holds a configured [`crud::CrudExecutor`] for the
/// fixed CRUD surface and adds its entity-specific operations on top. Every
/// operation is generic over [`sqlx::PgExecutor`], so the same call runs
/// against the pool or against a transaction handle.
///
/// # Modules
///
/// - `crud`: `Record` trait and the generic CRUD executor
/// - `error`: `RepoError` and the `EntityKind` failure subject
/// - `task`: Task repository
/// - `user`: User repository
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::repo::task::TaskRepo;
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), taskboard_shared::repo::RepoError> {
/// let tasks = TaskRepo::new();
/// let all = tasks.find_all(&pool).await?;
/// println!("{} tasks", all.len());
/// # Ok(())
/// # }
/// ```

pub mod crud;
pub mod error;
pub mod task;
pub mod user;

pub use error::{EntityKind, RepoError};

use futures::future::BoxFuture;
use sqlx::{PgPool, Postgres, Transaction};

/// Runs a callback inside a database transaction
///
/// Opens a transaction, invokes the callback with the transaction handle,
/// commits on success, and rolls back and propagates on failure. Pass the
/// handle to repository operations as `&mut **tx`.
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::repo::{with_transaction, RepoError};
/// use taskboard_shared::repo::user::UserRepo;
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), RepoError> {
/// let users = UserRepo::new();
/// let user = with_transaction(&pool, |tx| {
///     Box::pin(async move { users.find_by_id(&mut **tx, 1).await })
/// })
/// .await?;
/// println!("found {}", user.email);
/// # Ok(())
/// # }
/// ```
pub async fn with_transaction<T, F>(pool: &PgPool, operation: F) -> Result<T, RepoError>
where
    F: for<'t> FnOnce(&'t mut Transaction<'static, Postgres>) -> BoxFuture<'t, Result<T, RepoError>>,
{
    let mut tx = pool.begin().await?;

    match operation(&mut tx).await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(error) => {
            tx.rollback().await?;
            Err(error)
        }
    }
}
