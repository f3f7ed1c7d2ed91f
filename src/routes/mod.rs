// Route exports
pub mod recommendations;
pub mod status;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use std::sync::Arc;
use crate::core::Matcher;
use crate::models::ErrorResponse;
use crate::services::Dataset;

/// Paths served by the application, reported by the status endpoints
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("health", "/health"),
    ("test", "/test"),
    ("recommend", "/recommend"),
    ("api_recommendations", "/api/recommendations"),
];

/// Application state shared across all handlers
///
/// The dataset is loaded once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub matcher: Matcher,
}

impl AppState {
    pub fn new(dataset: Dataset, matcher: Matcher) -> Self {
        Self {
            dataset: Arc::new(dataset),
            matcher,
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(status::configure)
        .configure(recommendations::configure);
}

/// JSON error response for payload errors
#[derive(Debug)]
pub struct JsonError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.body.message)
    }
}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(&self.body)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        status: StatusCode::BAD_REQUEST,
        body: ErrorResponse::new(format!("Invalid JSON: {}", err)),
    }
    .into()
}

/// JSON extractor configuration that reports payload errors in the service's
/// error envelope
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

/// Handle form payload errors on endpoints that accept urlencoded bodies
pub fn handle_form_payload_error(err: error::UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Form payload error on {}: {}", req.path(), err);
    JsonError {
        status: StatusCode::BAD_REQUEST,
        body: ErrorResponse::new(format!("Invalid form data: {}", err)),
    }
    .into()
}

pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(handle_form_payload_error)
}

pub(crate) fn endpoint_paths() -> Vec<String> {
    std::iter::once("/".to_string())
        .chain(ENDPOINTS.iter().map(|(_, path)| path.to_string()))
        .collect()
}
