/// Database models for Cadence
///
/// This module contains all database models and their scoped CRUD operations.
///
/// # Models
///
/// - `user`: User accounts
/// - `track`: Top-level user-owned categories
/// - `goal`: Measurable targets within a track
/// - `task`: Checklist items under a goal
///
/// Every track/goal/task operation is gated by the ownership resolver in
/// [`crate::ownership`]: reads and mutations only ever touch rows that are
/// transitively owned by the calling user.

pub mod goal;
pub mod task;
pub mod track;
pub mod user;
