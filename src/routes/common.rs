//! Operational routes: liveness, database readiness and build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    backend: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
    backend: &'static str,
}

async fn liveness() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "ok",
        backend: None,
        database: None,
    })
}

/// One round trip to the store; 503 while it is unreachable.
async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<ServiceStatus>) {
    let reachable = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(backend = state.backend.name(), error = %e, "store unreachable");
            false
        }
    };
    let (code, status, database) = if reachable {
        (StatusCode::OK, "ok", "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
    };
    let body = ServiceStatus {
        status,
        backend: Some(state.backend.name()),
        database: Some(database),
    };
    (code, Json(body))
}

async fn build_info(State(state): State<AppState>) -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        backend: state.backend.name(),
    })
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(liveness))
        .route("/ready", get(readiness))
        .route("/version", get(build_info))
        .with_state(state)
}
