use actix_web::{web, Either, HttpResponse, Responder};
use validator::Validate;
use crate::core::{MatchError, RecommendationResult};
use crate::models::{
    current_timestamp, CandidateProfile, ErrorResponse, LegacyCandidate, LegacyRecommendRequest,
    LegacyRecommendResponse, RecommendationRequest, RecommendationsResponse,
};
use crate::routes::AppState;

/// Configure recommendation routes
///
/// CORS preflight (`OPTIONS`) is answered by the CORS middleware.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/api/recommendations", web::post().to(get_recommendations))
        .route("/recommend", web::post().to(legacy_recommend));
}

/// Recommendations endpoint
///
/// POST /api/recommendations
///
/// Request body:
/// ```json
/// {
///   "education": "string",
///   "skills": ["string"],
///   "location_preference": "string",
///   "min_stipend": 0
/// }
/// ```
async fn get_recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> impl Responder {
    let req = req.into_inner();
    tracing::info!("API recommendation request received: {:?}", req);

    let missing = req.missing_fields();
    if !missing.is_empty() {
        tracing::info!("Missing fields: {:?}", missing);
        return HttpResponse::BadRequest().json(ErrorResponse::new(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    if !req.has_skill_list() {
        tracing::info!("Skills not provided as a list");
        return HttpResponse::BadRequest().json(ErrorResponse::new("At least one skill must be selected"));
    }

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendation request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(format!(
            "Validation failed: {}",
            errors
        )));
    }

    let profile = req.into_profile();
    let result = match run_matcher(&state, &profile) {
        Ok(result) => result,
        Err(response) => return response,
    };

    let count = result.recommendations.len();
    tracing::info!(
        "Generated {} recommendations ({} qualifying of {} rows)",
        count,
        result.total_matches,
        result.total_rows
    );
    for (i, rec) in result.recommendations.iter().take(3).enumerate() {
        tracing::info!("  {}. {} at {} ({:.2})", i + 1, rec.record.title, rec.record.company, rec.relevance_score);
    }

    HttpResponse::Ok().json(RecommendationsResponse {
        success: true,
        recommendations: result.recommendations,
        count,
        user_profile: profile,
        max_results: state.matcher.max_results(),
        timestamp: current_timestamp(),
        message: format!("Found {} matching internships", count),
    })
}

/// Legacy recommendation endpoint
///
/// POST /recommend
///
/// Requires `name` and `min_stipend` in addition to the profile fields.
/// Accepts a JSON or a form-encoded body. `skills` may be a single string.
async fn legacy_recommend(
    state: web::Data<AppState>,
    req: Either<web::Json<LegacyRecommendRequest>, web::Form<LegacyRecommendRequest>>,
) -> impl Responder {
    let req = match req {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };
    tracing::info!("Received recommendation request: {:?}", req);

    if let Some(field) = req.first_missing_field() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(format!(
            "Missing required field: {}",
            field
        )));
    }

    let name = req.name.clone().unwrap_or_default();
    let profile = req.into_profile();
    let result = match run_matcher(&state, &profile) {
        Ok(result) => result,
        Err(response) => return response,
    };

    let total = result.recommendations.len();
    tracing::info!("Generated {} recommendations", total);

    HttpResponse::Ok().json(LegacyRecommendResponse {
        success: true,
        candidate: LegacyCandidate { name, profile },
        recommendations: result.recommendations,
        total_recommendations: total,
        max_results: state.matcher.max_results(),
        timestamp: current_timestamp(),
    })
}

fn run_matcher(
    state: &AppState,
    profile: &CandidateProfile,
) -> Result<RecommendationResult, HttpResponse> {
    state
        .matcher
        .recommend(profile, state.dataset.records())
        .map_err(|e| match_error_response(&e))
}

/// Map a matcher error to its HTTP response
///
/// - `InvalidProfile` -> 400
/// - `NoDataAvailable` -> 503
/// - `InternalFailure` -> 500
///
/// Correctable conditions are logged as warnings, internal failures as errors.
pub fn match_error_response(err: &MatchError) -> HttpResponse {
    if err.is_client_correctable() {
        tracing::warn!("Recommendation request rejected: {}", err);
    } else {
        tracing::error!("Error getting recommendations: {}", err);
    }

    match err {
        MatchError::InvalidProfile(_) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()))
        }
        MatchError::NoDataAvailable => {
            HttpResponse::ServiceUnavailable().json(ErrorResponse::new(err.to_string()))
        }
        MatchError::InternalFailure(_) => {
            HttpResponse::InternalServerError().json(ErrorResponse::new(format!(
                "Error getting recommendations: {}",
                err
            )))
        }
    }
}
