use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use super::AppState;
use crate::domain::error::DomainError;
use app_error::AppResult;

pub(crate) mod app_error;
pub(crate) mod extract;
pub(crate) mod handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;


pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .merge(routes::router())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
}

async fn health_handler(State(state): State<AppState>) -> AppResult<Json<HealthzResponse>> {
    sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .map_err(|err| DomainError::Unexpected(err.to_string()))?;
    Ok(Json(HealthzResponse { status: "ok" }))
}
