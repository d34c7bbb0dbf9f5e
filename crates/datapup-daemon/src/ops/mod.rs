//! Operational HTTP endpoints.
//!
//! - `/healthz`  : liveness
//! - `/readyz`   : readiness (503 when draining)
//! - `/metrics`  : Prometheus text format (daemon self-metrics)
//! - `/counters` : JSON object of every running total
//!
//! After `stopped` resolves the server keeps answering for the drain grace
//! period, so `/readyz` reports 503 before the process exits.

use std::future::Future;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use tokio::net::TcpListener;

use crate::app_state::AppState;
use crate::router::build_router;

/// Serve the ops endpoints until `stopped` resolves plus `grace`.
pub async fn serve<F>(listener: TcpListener, state: AppState, stopped: F, grace: Duration)
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);
    let shutdown = async move {
        stopped.await;
        tokio::time::sleep(grace).await;
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
    {
        tracing::error!(error = %e, "ops server failed");
    }
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    if state.is_draining() {
        (StatusCode::SERVICE_UNAVAILABLE, "draining")
    } else {
        (StatusCode::OK, "ready")
    }
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render();

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}

pub async fn counters(State(state): State<AppState>) -> Response {
    Json(state.counters()).into_response()
}
