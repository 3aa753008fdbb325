//! Student records HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
//!
//! # Notes
//! Route composition lives here to keep `main` small and testable.
use crate::api;
use crate::controller::StudentsController;
use crate::store::StudentStore;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub service_name: String,
    pub api_version: String,
    pub controller: StudentsController,
}

impl AppState {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self {
            service_name: "students-api".to_string(),
            api_version: "v1".to_string(),
            controller: StudentsController::new(store),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            )
        });

    Router::new()
        .route(
            "/v1/system/info",
            axum::routing::get(api::system::system_info),
        )
        .route(
            "/v1/system/health",
            axum::routing::get(api::system::system_health),
        )
        .route(
            "/v1/openapi.json",
            axum::routing::get(api::openapi::openapi_json),
        )
        .route(
            "/students",
            axum::routing::get(api::students::list_students).post(api::students::create_student),
        )
        .route(
            "/students/:id",
            axum::routing::get(api::students::get_student)
                .put(api::students::update_student)
                .delete(api::students::delete_student),
        )
        .layer(trace_layer)
        .with_state(state)
}
