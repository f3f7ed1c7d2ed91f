use crate::models::{
    CandidateProfile, InternshipRecord, MatchOptions, ProfileQuery, ScoredInternship, ScoringWeights,
};
use crate::core::{
    error::MatchError,
    filters::{education_terms, normalize_skills, stipend_acceptable},
    scoring::calculate_relevance_score,
};

/// Result of the matching process
#[derive(Debug, Clone)]
pub struct RecommendationResult {
    pub recommendations: Vec<ScoredInternship>,
    /// Rows scanned
    pub total_rows: usize,
    /// Rows that qualified before the result cap was applied
    pub total_matches: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Profile validation and normalization
/// 2. Stipend filter
/// 3. Relevance scoring
/// 4. Relevance filter (location gate, zero-signal rows)
/// 5. Stable ranking and result cap
///
/// Holds no mutable state, so a single instance can be shared by every worker.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    options: MatchOptions,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, options: MatchOptions) -> Self {
        Self { weights, options }
    }

    pub fn with_defaults() -> Self {
        Self {
            weights: ScoringWeights::default(),
            options: MatchOptions::default(),
        }
    }

    pub fn max_results(&self) -> usize {
        self.options.max_results
    }

    /// Recommend internships for a candidate
    ///
    /// # Arguments
    /// * `profile` - The candidate's education, skills and preferences
    /// * `rows` - The loaded dataset, in file order
    ///
    /// # Returns
    /// Matching rows ordered by descending relevance, ties in row order,
    /// capped at `max_results`.
    ///
    /// # Errors
    /// * `NoDataAvailable` when `rows` is empty, regardless of the profile
    /// * `InvalidProfile` when skills or location preference are blank, or the
    ///   minimum stipend is negative or not a number
    /// * `InternalFailure` when a row produces a non-finite score
    pub fn recommend(
        &self,
        profile: &CandidateProfile,
        rows: &[InternshipRecord],
    ) -> Result<RecommendationResult, MatchError> {
        if rows.is_empty() {
            return Err(MatchError::NoDataAvailable);
        }

        let query = build_query(profile)?;

        let mut scored: Vec<ScoredInternship> = Vec::new();
        for (row_index, record) in rows.iter().enumerate() {
            // Stage 2: stipend filter
            if !stipend_acceptable(&record.stipend, query.min_stipend) {
                continue;
            }

            // Stage 3: scoring
            let relevance = calculate_relevance_score(record, &query, &self.weights);
            if !relevance.score.is_finite() {
                tracing::error!(
                    "Non-finite relevance score for row {} ({}), weights: {:?}",
                    row_index,
                    record.title,
                    self.weights
                );
                return Err(MatchError::InternalFailure(format!(
                    "relevance score for row {} is not a finite number",
                    row_index
                )));
            }

            // Stage 4: relevance filter
            if self.options.require_location_match && !relevance.location_match {
                continue;
            }
            if relevance.matched_skills.is_empty() && !relevance.location_match {
                continue;
            }

            scored.push(ScoredInternship {
                record: record.clone(),
                relevance_score: relevance.score,
                matched_skills: relevance.matched_skills,
                row_index,
            });
        }

        let total_matches = scored.len();

        // Stage 5: stable sort keeps row order among equal scores
        scored.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
        scored.truncate(self.options.max_results);

        Ok(RecommendationResult {
            recommendations: scored,
            total_rows: rows.len(),
            total_matches,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Validate a candidate profile and normalize it for matching
pub fn build_query(profile: &CandidateProfile) -> Result<ProfileQuery, MatchError> {
    let skills = normalize_skills(&profile.skills);
    if skills.is_empty() {
        return Err(MatchError::InvalidProfile(
            "at least one skill must be provided".to_string(),
        ));
    }

    let location_preference = profile.location_preference.trim();
    if location_preference.is_empty() {
        return Err(MatchError::InvalidProfile(
            "location_preference must not be blank".to_string(),
        ));
    }

    if !profile.min_stipend.is_finite() || profile.min_stipend < 0.0 {
        return Err(MatchError::InvalidProfile(format!(
            "min_stipend must be a non-negative number, got {}",
            profile.min_stipend
        )));
    }

    Ok(ProfileQuery {
        skills,
        location_preference: location_preference.to_string(),
        education_terms: education_terms(&profile.education),
        min_stipend: profile.min_stipend,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stipend;

    fn create_record(title: &str, location: &str, stipend: &str) -> InternshipRecord {
        InternshipRecord {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: location.to_string(),
            start_date: "Immediately".to_string(),
            duration: "6 Months".to_string(),
            stipend: Stipend::from(stipend),
        }
    }

    fn create_profile(skills: &[&str], location: &str, min_stipend: f64) -> CandidateProfile {
        CandidateProfile {
            education: "B.Sc".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            location_preference: location.to_string(),
            min_stipend,
        }
    }

    #[test]
    fn test_recommend_basic() {
        let matcher = Matcher::with_defaults();
        let rows = vec![
            create_record("Python Development", "Work From Home", "₹ 35,000 /month"),
            create_record("Accounting and Finance", "Noida", "₹ 5,000-10,000 /month"),
        ];

        let result = matcher
            .recommend(&create_profile(&["python"], "Work From Home", 0.0), &rows)
            .unwrap();

        assert_eq!(result.total_rows, 2);
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].record.title, "Python Development");
    }

    #[test]
    fn test_ties_keep_row_order() {
        let matcher = Matcher::with_defaults();
        let rows = vec![
            create_record("Java Development", "Pune", "₹ 10,000 /month"),
            create_record("Sales", "Pune", "₹ 10,000 /month"),
            create_record("Java Backend", "Pune", "₹ 10,000 /month"),
        ];

        let result = matcher
            .recommend(&create_profile(&["java"], "Pune", 0.0), &rows)
            .unwrap();

        let order: Vec<usize> = result.recommendations.iter().map(|r| r.row_index).collect();
        assert_eq!(order, vec![0, 2, 1]);
    }

    #[test]
    fn test_respects_max_results() {
        let options = MatchOptions { max_results: 3, ..MatchOptions::default() };
        let matcher = Matcher::new(ScoringWeights::default(), options);
        let rows: Vec<InternshipRecord> = (0..20)
            .map(|i| create_record(&format!("Python Role {}", i), "Remote", "₹ 5,000 /month"))
            .collect();

        let result = matcher
            .recommend(&create_profile(&["python"], "Remote", 0.0), &rows)
            .unwrap();

        assert_eq!(result.recommendations.len(), 3);
        assert_eq!(result.total_matches, 20);
    }

    #[test]
    fn test_location_gate_can_be_relaxed() {
        let options = MatchOptions { require_location_match: false, ..MatchOptions::default() };
        let matcher = Matcher::new(ScoringWeights::default(), options);
        let rows = vec![
            create_record("UI/UX Design", "Pune", "₹ 20,000 /month"),
            create_record("Accounting", "Noida", "₹ 20,000 /month"),
        ];

        let result = matcher
            .recommend(&create_profile(&["design"], "Bangalore", 0.0), &rows)
            .unwrap();

        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].record.title, "UI/UX Design");
    }

    #[test]
    fn test_invalid_profiles() {
        let matcher = Matcher::with_defaults();
        let rows = vec![create_record("Python", "Remote", "Unpaid")];

        let blank_skills = create_profile(&["  "], "Remote", 0.0);
        assert!(matches!(
            matcher.recommend(&blank_skills, &rows),
            Err(MatchError::InvalidProfile(_))
        ));

        let blank_location = create_profile(&["python"], " ", 0.0);
        assert!(matches!(
            matcher.recommend(&blank_location, &rows),
            Err(MatchError::InvalidProfile(_))
        ));

        let negative_stipend = create_profile(&["python"], "Remote", -1.0);
        assert!(matches!(
            matcher.recommend(&negative_stipend, &rows),
            Err(MatchError::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_empty_rows_checked_before_profile() {
        let matcher = Matcher::with_defaults();
        let profile = create_profile(&[], "", 0.0);

        assert_eq!(matcher.recommend(&profile, &[]).unwrap_err(), MatchError::NoDataAvailable);
    }

    #[test]
    fn test_non_finite_weights_are_internal_failure() {
        let weights = ScoringWeights { skills: f64::NAN, ..ScoringWeights::default() };
        let matcher = Matcher::new(weights, MatchOptions::default());
        let rows = vec![create_record("Python", "Remote", "Unpaid")];

        let err = matcher
            .recommend(&create_profile(&["python"], "Remote", 0.0), &rows)
            .unwrap_err();

        assert!(matches!(err, MatchError::InternalFailure(_)));
        assert!(!err.is_client_correctable());
    }
}
