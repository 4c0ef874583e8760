use serde::Serialize;

pub mod contact;

/// Body of every unsuccessful response.
#[derive(Debug, Serialize)]
pub struct ApiFailure {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ApiViolation>>,
}

#[derive(Debug, Serialize)]
pub struct ApiViolation {
    pub field: &'static str,
    pub message: String,
}
