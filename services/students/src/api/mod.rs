//! Student records HTTP API module.
//!
//! # Purpose
//! Exposes route handler modules, shared payload types, and error helpers.
pub mod error;
pub mod openapi;
pub mod students;
pub mod system;
pub mod types;
