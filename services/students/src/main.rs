//! Student records HTTP service entry point.
//!
//! # Purpose
//! Wires configuration, storage, and the HTTP router, then serves the API and
//! the metrics endpoint until Ctrl-C.
//!
//! # Notes
//! The `build_state` helper keeps wiring testable and minimizes main setup logic.
use anyhow::Context;
use std::future::Future;
use std::sync::Arc;
use students::app::{AppState, build_router};
use students::config::StudentsConfig;
use students::observability;
use students::store::StudentStore;
use students::store::memory::InMemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = StudentsConfig::from_env_or_yaml()?;
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: StudentsConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability("students-api");
    let state = build_state();
    let metrics_listener = observability::bind_metrics(config.metrics_bind).await?;
    let metrics_task = tokio::spawn(async move {
        if let Err(err) = observability::serve_metrics(
            metrics_handle,
            metrics_listener,
            std::future::pending(),
        )
        .await
        {
            tracing::error!(error = %err, "metrics listener failed");
        }
    });

    let app = build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("bind api listener {}", config.bind_addr))?;
    let addr = listener.local_addr()?;
    tracing::info!(
        %addr,
        backend = state.controller.store().backend_name(),
        "students api listening"
    );
    tokio::pin!(shutdown);
    tokio::select! {
        result = axum::serve(listener, app.into_make_service()) => {
            result?;
        }
        _ = &mut shutdown => {
            tracing::info!("shutdown requested");
        }
    }

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

fn build_state() -> AppState {
    let store: Arc<dyn StudentStore> = Arc::new(InMemoryStore::new());
    AppState::new(store)
}
