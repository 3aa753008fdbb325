use std::sync::Arc;
use students::app::{AppState, build_router};
use students::store::StudentStore;
use students::store::memory::InMemoryStore;

pub type TestApp = axum::routing::RouterIntoService<axum::body::Body, ()>;

pub fn app_with_store(store: Arc<dyn StudentStore>) -> TestApp {
    build_router(AppState::new(store)).into_service()
}

pub fn app_with_memory_store() -> (TestApp, InMemoryStore) {
    let store = InMemoryStore::new();
    let app = app_with_store(Arc::new(store.clone()));
    (app, store)
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}
