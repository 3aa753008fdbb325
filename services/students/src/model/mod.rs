//! Student records data model.
//!
//! # Purpose
//! Re-exports the student entity and the write payloads used by the store,
//! controller, and HTTP API layers.
mod student;

pub use student::{Student, StudentFields, StudentWrite};
