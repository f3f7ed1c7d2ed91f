//! Property-based tests using proptest.
//!
//! These tests verify that the ranking invariants hold for randomly generated
//! listing tables and candidate profiles.

use internship_match::core::{MatchError, Matcher};
use internship_match::models::{CandidateProfile, InternshipRecord, Stipend};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

const TITLE_WORDS: &[&str] = &[
    "Python", "Java", "Design", "Marketing", "Sales", "Writing", "Finance", "Web", "Data",
];
const LOCATIONS: &[&str] = &["Work From Home", "Bangalore", "Pune", "Noida", "Mumbai", "Remote"];
const STIPENDS: &[&str] = &[
    "Unpaid",
    "",
    "Not specified",
    "₹ 2000",
    "₹ 5,000 /month",
    "₹ 5,000-10,000 /month",
    "₹ 10,000-15,000 /month",
    "₹ 20,000 /month",
    "₹ 1,500 /week",
    "₹ 35,000 /month",
];

fn record_strategy() -> impl Strategy<Value = InternshipRecord> {
    (
        prop::collection::vec(prop::sample::select(TITLE_WORDS), 1..3),
        prop::sample::select(LOCATIONS),
        prop::sample::select(STIPENDS),
    )
        .prop_map(|(words, location, stipend)| InternshipRecord {
            title: words.join(" "),
            company: "Acme".to_string(),
            location: location.to_string(),
            start_date: "Immediately".to_string(),
            duration: "6 Months".to_string(),
            stipend: Stipend::from(stipend),
        })
}

fn rows_strategy() -> impl Strategy<Value = Vec<InternshipRecord>> {
    prop::collection::vec(record_strategy(), 1..40)
}

fn profile_strategy(min_stipend: impl Strategy<Value = f64>) -> impl Strategy<Value = CandidateProfile> {
    (
        prop::collection::vec(prop::sample::select(TITLE_WORDS), 1..4),
        prop::sample::select(LOCATIONS),
        min_stipend,
    )
        .prop_map(|(skills, location, min_stipend)| CandidateProfile {
            education: "B.Tech".to_string(),
            skills: skills.iter().map(|s| s.to_lowercase()).collect(),
            location_preference: location.to_string(),
            min_stipend,
        })
}

// ============================================================================
// RANKING PROPERTIES
// ============================================================================

proptest! {
    /// Property: scores never increase along the result.
    #[test]
    fn prop_scores_non_increasing(
        rows in rows_strategy(),
        profile in profile_strategy(0.0..40000.0f64),
    ) {
        let result = Matcher::with_defaults().recommend(&profile, &rows).unwrap();

        for pair in result.recommendations.windows(2) {
            prop_assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
    }

    /// Property: equal scores keep their original row order.
    #[test]
    fn prop_ties_keep_row_order(
        rows in rows_strategy(),
        profile in profile_strategy(Just(0.0)),
    ) {
        let result = Matcher::with_defaults().recommend(&profile, &rows).unwrap();

        for pair in result.recommendations.windows(2) {
            if pair[0].relevance_score == pair[1].relevance_score {
                prop_assert!(pair[0].row_index < pair[1].row_index);
            }
        }
    }

    /// Property: rows below an active minimum stipend never appear.
    #[test]
    fn prop_minimum_stipend_respected(
        rows in rows_strategy(),
        profile in profile_strategy(1.0..40000.0f64),
    ) {
        let result = Matcher::with_defaults().recommend(&profile, &rows).unwrap();

        for rec in &result.recommendations {
            prop_assert!(rec.record.stipend.monthly_minimum() >= profile.min_stipend);
        }
    }

    /// Property: with no minimum, stipend alone never removes a row.
    #[test]
    fn prop_zero_minimum_never_filters_on_stipend(
        rows in rows_strategy(),
        profile in profile_strategy(Just(0.0)),
    ) {
        let matcher = Matcher::with_defaults();
        let result = matcher.recommend(&profile, &rows).unwrap();

        // Same table with every stipend replaced by a generous one
        let paid_rows: Vec<InternshipRecord> = rows
            .iter()
            .cloned()
            .map(|mut r| { r.stipend = Stipend::from("₹ 99,000 /month"); r })
            .collect();
        let paid_result = matcher.recommend(&profile, &paid_rows).unwrap();

        let indices: Vec<usize> = result.recommendations.iter().map(|r| r.row_index).collect();
        let paid_indices: Vec<usize> = paid_result.recommendations.iter().map(|r| r.row_index).collect();
        prop_assert_eq!(indices, paid_indices);
    }

    /// Property: identical inputs give identical output.
    #[test]
    fn prop_recommend_idempotent(
        rows in rows_strategy(),
        profile in profile_strategy(0.0..40000.0f64),
    ) {
        let matcher = Matcher::with_defaults();
        let first = matcher.recommend(&profile, &rows).unwrap();
        let second = matcher.recommend(&profile, &rows).unwrap();

        let first: Vec<(usize, f64)> = first.recommendations.iter().map(|r| (r.row_index, r.relevance_score)).collect();
        let second: Vec<(usize, f64)> = second.recommendations.iter().map(|r| (r.row_index, r.relevance_score)).collect();
        prop_assert_eq!(first, second);
    }

    /// Property: results are capped and every score is in range.
    #[test]
    fn prop_result_bounded(
        rows in rows_strategy(),
        profile in profile_strategy(0.0..40000.0f64),
    ) {
        let matcher = Matcher::with_defaults();
        let result = matcher.recommend(&profile, &rows).unwrap();

        prop_assert!(result.recommendations.len() <= matcher.max_results());
        prop_assert!(result.total_matches <= rows.len());
        for rec in &result.recommendations {
            prop_assert!(rec.relevance_score > 0.0 && rec.relevance_score <= 100.0);
        }
    }

    /// Property: empty skills are always rejected.
    #[test]
    fn prop_empty_skills_invalid(
        rows in rows_strategy(),
        mut profile in profile_strategy(0.0..40000.0f64),
    ) {
        profile.skills.clear();
        let err = Matcher::with_defaults().recommend(&profile, &rows).unwrap_err();

        prop_assert!(matches!(err, MatchError::InvalidProfile(_)));
    }

    /// Property: stipend parsing never panics on arbitrary text.
    #[test]
    fn prop_stipend_parse_total(text in ".{0,40}") {
        let stipend = Stipend::from(text.as_str());
        prop_assert!(stipend.monthly_minimum() >= 0.0);
        prop_assert_eq!(stipend.raw, text);
    }
}
