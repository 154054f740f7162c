//! # Cadence API Server Library
//!
//! HTTP surface for the Cadence habit-tracking backend. The layer is thin:
//! extract and validate requests, authenticate, delegate to
//! `cadence-shared`, and map errors to status codes.
//!
//! ## Modules
//!
//! - `app`: Application state, router builder, bearer-token middleware
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
