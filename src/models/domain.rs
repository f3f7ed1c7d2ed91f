use serde::{Deserialize, Serialize};
use crate::core::stipend::parse_stipend;

/// A single internship listing as loaded from the dataset
///
/// Records are immutable after loading; a record's identity is its row
/// position in the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternshipRecord {
    #[serde(alias = "internship_title")]
    pub title: String,
    #[serde(alias = "company_name")]
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub stipend: Stipend,
}

/// Stipend text normalized at load time
///
/// Serializes back to the raw text so API responses carry the listing as it
/// appeared in the dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Stipend {
    pub raw: String,
    pub amount: StipendAmount,
}

impl Stipend {
    /// Lower bound of the stipend expressed per month.
    /// Unpaid and unspecified stipends count as zero.
    pub fn monthly_minimum(&self) -> f64 {
        match self.amount {
            StipendAmount::Paid { min, period, .. } => period.to_monthly(min),
            StipendAmount::Unpaid | StipendAmount::Unspecified => 0.0,
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self.amount, StipendAmount::Paid { .. })
    }
}

impl From<String> for Stipend {
    fn from(raw: String) -> Self {
        let amount = parse_stipend(&raw);
        Self { raw, amount }
    }
}

impl From<&str> for Stipend {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<Stipend> for String {
    fn from(stipend: Stipend) -> Self {
        stipend.raw
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StipendAmount {
    Paid {
        min: f64,
        max: f64,
        period: StipendPeriod,
    },
    Unpaid,
    #[default]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StipendPeriod {
    Month,
    Week,
    Year,
    LumpSum,
}

impl StipendPeriod {
    /// Convert an amount paid per this period into a monthly figure.
    /// Lump sums are taken at face value.
    pub fn to_monthly(self, amount: f64) -> f64 {
        match self {
            StipendPeriod::Month | StipendPeriod::LumpSum => amount,
            StipendPeriod::Week => amount * 52.0 / 12.0,
            StipendPeriod::Year => amount / 12.0,
        }
    }
}

/// Candidate profile built per request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub education: String,
    pub skills: Vec<String>,
    pub location_preference: String,
    #[serde(default)]
    pub min_stipend: f64,
}

/// Normalized query derived from a validated candidate profile
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileQuery {
    pub skills: Vec<String>,
    pub location_preference: String,
    pub education_terms: Vec<String>,
    pub min_stipend: f64,
}

/// Scored recommendation result
#[derive(Debug, Clone, Serialize)]
pub struct ScoredInternship {
    #[serde(flatten)]
    pub record: InternshipRecord,
    pub relevance_score: f64,
    pub matched_skills: Vec<String>,
    #[serde(skip)]
    pub row_index: usize,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub location: f64,
    pub education: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.60,
            location: 0.30,
            education: 0.10,
        }
    }
}

/// Tunable limits applied by the matcher
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    /// Maximum number of recommendations returned per request
    pub max_results: usize,
    /// Drop rows whose location does not satisfy the candidate's preference
    pub require_location_match: bool,
}

pub const DEFAULT_MAX_RESULTS: usize = 10;

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            require_location_match: true,
        }
    }
}
