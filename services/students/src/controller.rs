//! Student CRUD controller.
//!
//! # Purpose
//! Implements list/get/create/update/delete over the injected `StudentStore`
//! and reports each outcome as an [`ActionResult`]. HTTP handlers are thin
//! adapters over this type, and tests can drive it without a router.
//!
//! # Key invariants
//! - Ids always come from the store; a caller-supplied id is never persisted.
//! - `NotFound` and `BadRequest` are outcomes, not errors. Only storage
//!   faults surface as `Err`.
use crate::model::{Student, StudentWrite};
use crate::store::{StoreError, StoreResult, StudentStore};
use std::sync::Arc;

/// Path prefix of the student resource.
pub const STUDENTS_PATH: &str = "/students";

/// Outcome of a controller operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult<T> {
    /// Success with a body.
    Ok(T),
    /// A new resource now lives at `location`.
    Created { location: String, value: T },
    /// Success without a body.
    NoContent,
    NotFound,
    BadRequest(String),
}

impl<T> ActionResult<T> {
    /// Body carried by `Ok` or `Created`.
    pub fn into_value(self) -> Option<T> {
        match self {
            ActionResult::Ok(value) | ActionResult::Created { value, .. } => Some(value),
            _ => None,
        }
    }
}

pub fn student_location(id: i64) -> String {
    format!("{STUDENTS_PATH}/{id}")
}

#[derive(Clone)]
pub struct StudentsController {
    store: Arc<dyn StudentStore>,
}

impl StudentsController {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn StudentStore> {
        &self.store
    }

    pub async fn list(&self) -> StoreResult<ActionResult<Vec<Student>>> {
        let students = self.store.list_students().await?;
        tracing::debug!(count = students.len(), "listed students");
        Ok(ActionResult::Ok(students))
    }

    pub async fn get_by_id(&self, id: i64) -> StoreResult<ActionResult<Student>> {
        match self.store.find_student(id).await? {
            Some(student) => Ok(ActionResult::Ok(student)),
            None => {
                tracing::debug!(id, "student not found");
                Ok(ActionResult::NotFound)
            }
        }
    }

    pub async fn create(&self, body: StudentWrite) -> StoreResult<ActionResult<Student>> {
        if let Some(ignored) = body.id {
            tracing::debug!(ignored, "ignoring caller-supplied student id");
        }
        let created = self.store.add_student(body.into_fields()).await?;
        tracing::info!(id = created.id, "student created");
        Ok(ActionResult::Created {
            location: student_location(created.id),
            value: created,
        })
    }

    pub async fn update(&self, id: i64, body: StudentWrite) -> StoreResult<ActionResult<()>> {
        if let Some(body_id) = body.id {
            if body_id != id {
                tracing::debug!(id, body_id, "student id mismatch");
                return Ok(ActionResult::BadRequest(format!(
                    "body id {body_id} does not match path id {id}"
                )));
            }
        }
        match self.store.replace_student(id, body.into_fields()).await {
            Ok(_) => {
                tracing::info!(id, "student updated");
                Ok(ActionResult::NoContent)
            }
            Err(StoreError::NotFound(_)) => {
                tracing::debug!(id, "student not found");
                Ok(ActionResult::NotFound)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn delete(&self, id: i64) -> StoreResult<ActionResult<()>> {
        match self.store.remove_student(id).await {
            Ok(()) => {
                tracing::info!(id, "student deleted");
                Ok(ActionResult::NoContent)
            }
            Err(StoreError::NotFound(_)) => {
                tracing::debug!(id, "student not found");
                Ok(ActionResult::NotFound)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn controller() -> StudentsController {
        StudentsController::new(Arc::new(InMemoryStore::new()))
    }

    fn write(id: Option<i64>, first: &str, last: &str, age: i32) -> StudentWrite {
        StudentWrite {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            age,
        }
    }

    #[tokio::test]
    async fn create_reports_location_of_new_record() {
        let controller = controller();
        let result = controller
            .create(write(None, "John", "Doe", 22))
            .await
            .expect("create");
        match result {
            ActionResult::Created { location, value } => {
                assert_eq!(location, "/students/1");
                assert_eq!(value.id, 1);
            }
            other => panic!("expected Created, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_ignores_colliding_caller_id() {
        let controller = controller();
        let first = controller
            .create(write(None, "John", "Doe", 22))
            .await
            .expect("first")
            .into_value()
            .expect("value");

        let second = controller
            .create(write(Some(first.id), "Jane", "Roe", 30))
            .await
            .expect("second")
            .into_value()
            .expect("value");
        assert_ne!(second.id, first.id);

        let listed = controller.list().await.expect("list").into_value();
        assert_eq!(listed.map(|items| items.len()), Some(2));
    }

    #[tokio::test]
    async fn update_rejects_mismatched_body_id() {
        let controller = controller();
        let created = controller
            .create(write(None, "John", "Doe", 22))
            .await
            .expect("create")
            .into_value()
            .expect("value");

        let result = controller
            .update(created.id, write(Some(created.id + 1), "Other", "Name", 40))
            .await
            .expect("update");
        assert!(matches!(result, ActionResult::BadRequest(_)));

        let unchanged = controller
            .get_by_id(created.id)
            .await
            .expect("get")
            .into_value();
        assert_eq!(unchanged, Some(created));
    }

    #[tokio::test]
    async fn update_without_body_id_is_accepted() {
        let controller = controller();
        controller
            .create(write(None, "John", "Doe", 22))
            .await
            .expect("create");

        let result = controller
            .update(1, write(None, "Johnny", "Doe", 23))
            .await
            .expect("update");
        assert_eq!(result, ActionResult::NoContent);
    }

    #[tokio::test]
    async fn update_and_delete_missing_report_not_found() {
        let controller = controller();
        let result = controller
            .update(9, write(Some(9), "John", "Doe", 22))
            .await
            .expect("update");
        assert_eq!(result, ActionResult::NotFound);

        let result = controller.delete(9).await.expect("delete");
        assert_eq!(result, ActionResult::NotFound);
    }

    #[test]
    fn into_value_only_for_bodies() {
        assert_eq!(ActionResult::Ok(3).into_value(), Some(3));
        assert_eq!(
            ActionResult::Created {
                location: student_location(3),
                value: 3
            }
            .into_value(),
            Some(3)
        );
        assert_eq!(ActionResult::<i32>::NoContent.into_value(), None);
        assert_eq!(ActionResult::<i32>::NotFound.into_value(), None);
        assert_eq!(
            ActionResult::<i32>::BadRequest("bad".into()).into_value(),
            None
        );
    }
}
