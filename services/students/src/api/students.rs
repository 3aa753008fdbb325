//! Student API handlers.
//!
//! # Purpose
//! Adapts the five student endpoints onto [`StudentsController`] and renders
//! each [`ActionResult`] as an HTTP response.
use crate::api::error::{ApiError, api_internal, api_not_found, api_validation_error};
use crate::app::AppState;
use crate::controller::ActionResult;
use crate::model::{Student, StudentWrite};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

impl<T: Serialize> IntoResponse for ActionResult<T> {
    fn into_response(self) -> Response {
        match self {
            ActionResult::Ok(value) => (StatusCode::OK, Json(value)).into_response(),
            ActionResult::Created { location, value } => (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(value),
            )
                .into_response(),
            ActionResult::NoContent => StatusCode::NO_CONTENT.into_response(),
            ActionResult::NotFound => api_not_found("student not found").into_response(),
            ActionResult::BadRequest(message) => api_validation_error(&message).into_response(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    responses(
        (status = 200, description = "List students", body = [Student])
    )
)]
pub(crate) async fn list_students(
    State(state): State<AppState>,
) -> Result<ActionResult<Vec<Student>>, ApiError> {
    state
        .controller
        .list()
        .await
        .map_err(|err| api_internal("failed to list students", &err))
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "students",
    params(
        ("id" = i64, Path, description = "Student identifier")
    ),
    responses(
        (status = 200, description = "Fetch student", body = Student),
        (status = 404, description = "Student not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_student(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<ActionResult<Student>, ApiError> {
    let Path(id) = path?;
    state
        .controller
        .get_by_id(id)
        .await
        .map_err(|err| api_internal("failed to fetch student", &err))
}

#[utoipa::path(
    post,
    path = "/students",
    tag = "students",
    request_body = StudentWrite,
    responses(
        (status = 201, description = "Student created", body = Student,
            headers(("location" = String, description = "URI of the new student"))),
        (status = 422, description = "Malformed student body", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn create_student(
    State(state): State<AppState>,
    body: Result<Json<StudentWrite>, JsonRejection>,
) -> Result<ActionResult<Student>, ApiError> {
    let Json(body) = body?;
    state
        .controller
        .create(body)
        .await
        .map_err(|err| api_internal("failed to create student", &err))
}

#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = "students",
    params(
        ("id" = i64, Path, description = "Student identifier")
    ),
    request_body = StudentWrite,
    responses(
        (status = 204, description = "Student updated"),
        (status = 400, description = "Body id does not match path id", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Student not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn update_student(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    body: Result<Json<StudentWrite>, JsonRejection>,
) -> Result<ActionResult<()>, ApiError> {
    let Path(id) = path?;
    let Json(body) = body?;
    state
        .controller
        .update(id, body)
        .await
        .map_err(|err| api_internal("failed to update student", &err))
}

#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "students",
    params(
        ("id" = i64, Path, description = "Student identifier")
    ),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn delete_student(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<ActionResult<()>, ApiError> {
    let Path(id) = path?;
    state
        .controller
        .delete(id)
        .await
        .map_err(|err| api_internal("failed to delete student", &err))
}
