use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{ApiFailure, ApiViolation};

pub mod contact;
pub mod health;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

fn error(code: StatusCode, message: &'static str) -> Response {
    (
        code,
        Json(ApiFailure {
            success: false,
            message,
            errors: None,
        }),
    )
        .into_response()
}

fn validation_error(errors: Vec<ApiViolation>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiFailure {
            success: false,
            message: "Validation error",
            errors: Some(errors),
        }),
    )
        .into_response()
}
