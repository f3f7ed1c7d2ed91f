// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, InternshipRecord, MatchOptions, ProfileQuery, ScoredInternship, ScoringWeights, Stipend,
    StipendAmount, StipendPeriod, DEFAULT_MAX_RESULTS,
};
pub use requests::{LegacyRecommendRequest, RecommendationRequest, SkillsInput};
pub use responses::{
    current_timestamp, DiagnosticsResponse, ErrorResponse, HealthResponse, IndexResponse,
    LegacyCandidate, LegacyRecommendResponse, RecommendationsResponse,
};
