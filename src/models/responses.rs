use serde::{Deserialize, Serialize};
use crate::models::domain::{CandidateProfile, ScoredInternship};

/// Response for `POST /api/recommendations`
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    pub recommendations: Vec<ScoredInternship>,
    pub count: usize,
    pub user_profile: CandidateProfile,
    pub max_results: usize,
    pub timestamp: String,
    pub message: String,
}

/// Response for the legacy `POST /recommend` endpoint
#[derive(Debug, Clone, Serialize)]
pub struct LegacyRecommendResponse {
    pub success: bool,
    pub candidate: LegacyCandidate,
    pub recommendations: Vec<ScoredInternship>,
    pub total_recommendations: usize,
    pub max_results: usize,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyCandidate {
    pub name: String,
    #[serde(flatten)]
    pub profile: CandidateProfile,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub data_loaded: usize,
    pub version: String,
    pub timestamp: String,
    pub endpoints_available: Vec<String>,
}

/// Service banner returned from `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    pub message: String,
    pub status: String,
    pub version: String,
    pub timestamp: String,
    pub max_results: usize,
    pub endpoints: std::collections::BTreeMap<String, String>,
}

/// Diagnostic payload returned from `GET /test`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    pub message: String,
    pub dataset_status: String,
    pub matcher_status: String,
    pub data_loaded: usize,
    pub dataset_path: String,
    pub working_directory: String,
    pub available_endpoints: Vec<String>,
    pub timestamp: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            timestamp: current_timestamp(),
        }
    }
}

/// UTC timestamp in the `YYYY-MM-DD HH:MM:SS` form used across responses
pub fn current_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
