//! Readiness endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use axum_helpers::{run_health_checks, HealthCheckFuture};

use crate::state::AppState;

async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.products.clone();
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "store",
        Box::pin(async move {
            store
                .list_products()
                .await
                .map(|_| ())
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks)
        .await
        .unwrap_or_else(|failed: (StatusCode, Json<serde_json::Value>)| failed)
}

/// `/ready`; liveness lives in `axum_helpers::health_router`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
}
