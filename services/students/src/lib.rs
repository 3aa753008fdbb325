//! Student records service library crate.
//!
//! # Purpose
//! Exposes the student CRUD controller, HTTP API surface, configuration, and
//! storage implementations for use by the binary and tests.
pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod model;
pub mod observability;
pub mod store;
