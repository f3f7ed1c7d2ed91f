//! Internship Match - recommendation service for internship listings
//!
//! This library provides the matching and ranking procedure that scores an
//! in-memory table of internship listings against a candidate's education,
//! skills and location/stipend preferences, plus the dataset loader and HTTP
//! routes that serve it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchError, RecommendationResult, parse_stipend};
pub use models::{CandidateProfile, InternshipRecord, MatchOptions, ScoredInternship, ScoringWeights, Stipend};
pub use services::{Dataset, DatasetError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let stipend = Stipend::from("₹ 5,000-10,000 /month");
        assert_eq!(stipend.monthly_minimum(), 5000.0);
        assert_eq!(Matcher::default().max_results(), 10);
    }
}
