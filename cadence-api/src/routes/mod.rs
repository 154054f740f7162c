/// API route handlers
///
/// Organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Login
/// - `tracks`, `goals`, `tasks`: Scoped hierarchy CRUD

pub mod auth;
pub mod goals;
pub mod health;
pub mod tasks;
pub mod tracks;
