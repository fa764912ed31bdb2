/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `task`: Task CRUD and user assignment
/// - `user`: User creation

pub mod health;
pub mod task;
pub mod user;
