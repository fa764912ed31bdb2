/// Entity models for Taskboard
///
/// This module contains the persisted entity shapes and the inputs used to
/// insert or patch them. Database operations live in the `repo` module;
/// models here are plain data.
///
/// # Models
///
/// - `task`: Task entries with an optional owning user
/// - `user`: User accounts with unique email addresses
///
/// # Example
///
/// ```
/// use taskboard_shared::models::task::{NewTask, TaskStatus};
///
/// let input = NewTask {
///     title: "Write the report".to_string(),
///     description: None,
///     user_id: None,
/// };
///
/// assert_eq!(TaskStatus::default(), TaskStatus::Todo);
/// assert_eq!(input.title, "Write the report");
/// ```

pub mod task;
pub mod user;
