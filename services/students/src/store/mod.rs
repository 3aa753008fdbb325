//! Student storage abstraction.
//!
//! # Purpose
//! Defines the storage contract the controller depends on. Every mutating call
//! commits before it returns, so callers never issue a separate flush.
use crate::model::{Student, StudentFields};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait StudentStore: Send + Sync {
    /// All committed records in backend-defined order.
    async fn list_students(&self) -> StoreResult<Vec<Student>>;
    async fn find_student(&self, id: i64) -> StoreResult<Option<Student>>;
    /// Persist a new record under a freshly assigned id.
    async fn add_student(&self, fields: StudentFields) -> StoreResult<Student>;
    /// Replace every mutable field of record `id`, keeping the id.
    async fn replace_student(&self, id: i64, fields: StudentFields) -> StoreResult<Student>;
    async fn remove_student(&self, id: i64) -> StoreResult<()>;

    async fn health_check(&self) -> StoreResult<()>;
    fn is_durable(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}
