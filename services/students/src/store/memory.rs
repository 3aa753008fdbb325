//! In-memory implementation of the student store.
//!
//! # Purpose
//! Implements `StudentStore` with a `BTreeMap` guarded by `tokio::sync::RwLock`.
//! It backs tests and local development, and stands in wherever a durable
//! backend is not configured.
//!
//! # Durability and consistency
//! - **Not durable**: all records are lost on process restart.
//! - **Single-process consistency**: writes take the table write lock, so id
//!   allocation and insertion are one atomic step. Every write is visible to
//!   the next read as soon as the call returns.
//!
//! # Identifiers
//! Ids start at 1 and only move forward. A deleted id is never handed out
//! again, so a stale client reference can never alias a newer record.
use super::{StoreError, StoreResult, StudentStore};
use crate::model::{Student, StudentFields};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Backing table plus its id sequence.
#[derive(Debug)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Student>,
}

impl Table {
    fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }

    fn allocate_id(&mut self) -> StoreResult<i64> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| StoreError::Unexpected(anyhow!("student id sequence exhausted")))?;
        Ok(id)
    }
}

/// In-memory student store.
///
/// Cloning shares the same table, so one store can be handed to the router and
/// kept by a test for direct inspection.
#[derive(Clone)]
pub struct InMemoryStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table::new())),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentStore for InMemoryStore {
    async fn list_students(&self) -> StoreResult<Vec<Student>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_student(&self, id: i64) -> StoreResult<Option<Student>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn add_student(&self, fields: StudentFields) -> StoreResult<Student> {
        let mut table = self.table.write().await;
        let id = table.allocate_id()?;
        let student = fields.with_id(id);
        table.rows.insert(id, student.clone());
        metrics::counter!("student_changes_total", "op" => "created").increment(1);
        metrics::gauge!("students_total").set(table.rows.len() as f64);
        Ok(student)
    }

    async fn replace_student(&self, id: i64, fields: StudentFields) -> StoreResult<Student> {
        let mut table = self.table.write().await;
        let student = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound("student".into()))?;
        student.first_name = fields.first_name;
        student.last_name = fields.last_name;
        student.age = fields.age;
        let updated = student.clone();
        metrics::counter!("student_changes_total", "op" => "updated").increment(1);
        Ok(updated)
    }

    async fn remove_student(&self, id: i64) -> StoreResult<()> {
        let mut table = self.table.write().await;
        if table.rows.remove(&id).is_none() {
            return Err(StoreError::NotFound("student".into()));
        }
        metrics::counter!("student_changes_total", "op" => "deleted").increment(1);
        metrics::gauge!("students_total").set(table.rows.len() as f64);
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
