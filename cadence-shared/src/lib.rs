//! # Cadence Shared Library
//!
//! This crate contains the core domain logic shared by the Cadence API
//! server: database models for the Track → Goal → Task hierarchy, the
//! ownership resolver that scopes every operation to its owning user,
//! authentication primitives, and the database layer.
//!
//! ## Module Organization
//!
//! - `models`: Database models and scoped CRUD for users, tracks, goals, tasks
//! - `ownership`: Transitive ownership predicates (Task → Goal → Track → User)
//! - `auth`: Password hashing, credential verification, JWT tokens
//! - `db`: Connection pool, migrations, fixture seeding
//! - `error`: Store error taxonomy

pub mod auth;
pub mod db;
pub mod error;
pub mod models;
pub mod ownership;

/// Current version of the Cadence shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
