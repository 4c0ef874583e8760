use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use tracing::debug;
use webrevamp_core_contact_contracts::{ContactFeatureService, ContactSubmitError};

use super::{error, internal_server_error, validation_error};
use crate::models::{
    contact::{
        ApiContactSubmission, ApiContactSubmissionList, ApiContactSubmitRequest,
        ApiContactSubmitResponse,
    },
    ApiViolation,
};

pub const SUBMIT_PATH: &str = "/api/contact";
pub const LIST_PATH: &str = "/api/contact-submissions";

pub fn router<S: ContactFeatureService>(service: Arc<S>) -> Router<()> {
    Router::new()
        .route(SUBMIT_PATH, routing::post(submit::<S>))
        .route(LIST_PATH, routing::get(list_submissions::<S>))
        .with_state(service)
}

async fn submit<S: ContactFeatureService>(
    service: State<Arc<S>>,
    request: Result<Json<ApiContactSubmitRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => {
            debug!("Rejected malformed contact request body: {rejection}");
            return validation_error(vec![ApiViolation {
                field: "body",
                message: rejection.body_text(),
            }]);
        }
    };

    match service.submit(request.into()).await {
        Ok(id) => Json(ApiContactSubmitResponse {
            success: true,
            message: "Contact form submitted successfully",
            id,
        })
        .into_response(),
        Err(ContactSubmitError::Spam) => error(StatusCode::BAD_REQUEST, "Spam submission detected"),
        Err(ContactSubmitError::Validation(violations)) => {
            validation_error(violations.into_iter().map(Into::into).collect())
        }
        Err(err @ ContactSubmitError::Storage(_)) => internal_server_error(err),
    }
}

async fn list_submissions<S: ContactFeatureService>(service: State<Arc<S>>) -> Response {
    match service.list_submissions().await {
        Ok(submissions) => Json(ApiContactSubmissionList {
            success: true,
            data: submissions
                .into_iter()
                .map(ApiContactSubmission::from)
                .collect(),
        })
        .into_response(),
        Err(err) => internal_server_error(err),
    }
}
