//! Student model definitions.
//!
//! # Purpose
//! Defines the persisted student record and the payloads used to create or
//! replace one.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted student record.
///
/// `id` is assigned by the store when the record is created and never changes
/// afterwards.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl Student {
    pub fn fields(&self) -> StudentFields {
        StudentFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
        }
    }
}

/// The mutable part of a student record.
///
/// Stores accept only these fields on writes so identifiers always come from
/// the store itself.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentFields {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl StudentFields {
    pub fn with_id(self, id: i64) -> Student {
        Student {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
        }
    }
}

/// Request body for `POST /students` and `PUT /students/{id}`.
///
/// `id` is ignored on create. On update it must either be absent or equal the
/// id in the path; an absent id is accepted on purpose, so clients may send
/// just the mutable fields and let the path name the record.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentWrite {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl StudentWrite {
    pub fn into_fields(self) -> StudentFields {
        StudentFields {
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
        }
    }
}

impl From<StudentFields> for StudentWrite {
    fn from(fields: StudentFields) -> Self {
        Self {
            id: None,
            first_name: fields.first_name,
            last_name: fields.last_name,
            age: fields.age,
        }
    }
}

impl From<Student> for StudentWrite {
    fn from(student: Student) -> Self {
        Self {
            id: Some(student.id),
            first_name: student.first_name,
            last_name: student.last_name,
            age: student.age,
        }
    }
}
