use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use webrevamp_core_health_contracts::HealthFeatureService;

pub const PATH: &str = "/api/health";

pub fn router<S: HealthFeatureService>(service: Arc<S>) -> Router<()> {
    Router::new()
        .route(PATH, routing::get(health::<S>))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
    database: bool,
    email: bool,
}

async fn health<S: HealthFeatureService>(service: State<Arc<S>>) -> Response {
    let status = service.get_status().await;

    let (code, label) = if status.is_ok() {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    let response = HealthResponse {
        status: label,
        timestamp: status.timestamp,
        database: status.database,
        email: status.email,
    };

    (code, Json(response)).into_response()
}
