// Core algorithm exports
pub mod error;
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod stipend;

pub use error::MatchError;
pub use filters::{location_matches, matched_skills, normalize_skills, stipend_acceptable};
pub use matcher::{build_query, Matcher, RecommendationResult};
pub use scoring::{calculate_relevance_score, Relevance};
pub use stipend::parse_stipend;
