/// Business logic per resource
///
/// Services orchestrate repository calls, map stored entities to response
/// DTOs, enforce cross-entity rules, and translate repository failures
/// into the user-visible error categories. Each service receives its
/// collaborators at construction.
///
/// - `task`: Task listing, creation, update, deletion, user assignment
/// - `user`: User creation with email uniqueness

pub mod task;
pub mod user;

pub use task::TaskService;
pub use user::UserService;

use crate::error::ApiError;
use taskboard_shared::repo::RepoError;

/// Collapses an unanticipated repository failure into the generic
/// internal error, logging the cause server-side only
pub(crate) fn internal_error(error: RepoError) -> ApiError {
    tracing::error!(%error, "unexpected data access failure");
    ApiError::Internal
}
