use thiserror::Error;

/// Errors that can occur while producing recommendations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("No internship data available")]
    NoDataAvailable,

    #[error("Internal failure: {0}")]
    InternalFailure(String),
}

impl MatchError {
    /// Whether the caller can correct the condition by changing the request
    /// or the dataset
    pub fn is_client_correctable(&self) -> bool {
        !matches!(self, MatchError::InternalFailure(_))
    }
}
