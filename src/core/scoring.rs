use crate::models::{InternshipRecord, ProfileQuery, ScoringWeights};
use crate::core::filters::{education_overlap, location_matches, matched_skills};

/// Per-row relevance signals
#[derive(Debug, Clone, PartialEq)]
pub struct Relevance {
    /// Weighted score in the 0-100 range
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub location_match: bool,
}

/// Calculate a relevance score (0-100) for a listing against a profile query
///
/// Scoring formula:
/// score = (
///     skill_overlap * 0.60 +       # matched skills / candidate skills
///     location_match * 0.30 +      # fixed bonus when the location fits
///     education_overlap * 0.10     # education terms found in title/company
/// ) * 100
///
/// Stipend is a filter, not a signal, and is applied by the matcher.
pub fn calculate_relevance_score(
    record: &InternshipRecord,
    query: &ProfileQuery,
    weights: &ScoringWeights,
) -> Relevance {
    let matched_skills = matched_skills(&query.skills, &record.title);
    let skill_score = if query.skills.is_empty() {
        0.0
    } else {
        matched_skills.len() as f64 / query.skills.len() as f64
    };

    let location_match = location_matches(&query.location_preference, &record.location);
    let location_score = if location_match { 1.0 } else { 0.0 };

    let education_score = education_overlap(&query.education_terms, &record.title, &record.company);

    let total_score = (skill_score * weights.skills
        + location_score * weights.location
        + education_score * weights.education)
        * 100.0;

    // Non-finite scores are left as-is for the matcher to reject
    let score = if total_score.is_finite() {
        round_score(total_score.clamp(0.0, 100.0))
    } else {
        total_score
    };

    Relevance {
        score,
        matched_skills,
        location_match,
    }
}

/// Round to two decimals so equal-looking scores compare equal
#[inline]
fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
