use actix_web::{web, HttpResponse, Responder};
use crate::models::{current_timestamp, DiagnosticsResponse, HealthResponse, IndexResponse};
use crate::routes::{endpoint_paths, AppState, ENDPOINTS};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .route("/test", web::get().to(diagnostics));
}

/// Service banner
///
/// GET /
async fn index(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(IndexResponse {
        message: "Internship Recommendation Engine API".to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: current_timestamp(),
        max_results: state.matcher.max_results(),
        endpoints: ENDPOINTS
            .iter()
            .map(|(name, path)| (name.to_string(), path.to_string()))
            .collect(),
    })
}

/// Health check endpoint
///
/// GET /health
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let data_count = state.dataset.len();
    let status = if data_count > 0 { "healthy" } else { "unhealthy - no data" };

    tracing::info!("Health check requested - status: {}, data count: {}", status, data_count);

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        data_loaded: data_count,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: current_timestamp(),
        endpoints_available: endpoint_paths(),
    })
}

/// Diagnostics endpoint
///
/// GET /test
async fn diagnostics(state: web::Data<AppState>) -> impl Responder {
    let data_loaded = state.dataset.len();
    let dataset_status = if data_loaded > 0 { "OK" } else { "ERROR" };

    tracing::info!("Test endpoint accessed - dataset: {}, records: {}", dataset_status, data_loaded);

    HttpResponse::Ok().json(DiagnosticsResponse {
        message: "Test endpoint working successfully!".to_string(),
        dataset_status: dataset_status.to_string(),
        matcher_status: "OK".to_string(),
        data_loaded,
        dataset_path: state
            .dataset
            .source()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        working_directory: std::env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        available_endpoints: endpoint_paths(),
        timestamp: current_timestamp(),
    })
}
