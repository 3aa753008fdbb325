//! OpenAPI schema aggregation for the student records API.
use crate::api::{
    students, system,
    types::{ErrorResponse, HealthStatus, SystemInfo},
};
use crate::model::{Student, StudentWrite};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "students-api",
        version = "v1",
        description = "Student records HTTP API"
    ),
    paths(
        system::system_info,
        system::system_health,
        students::list_students,
        students::get_student,
        students::create_student,
        students::update_student,
        students::delete_student
    ),
    components(schemas(SystemInfo, HealthStatus, ErrorResponse, Student, StudentWrite)),
    tags(
        (name = "system", description = "System and discovery endpoints"),
        (name = "students", description = "Student records")
    )
)]
pub struct ApiDoc;

pub(crate) async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
