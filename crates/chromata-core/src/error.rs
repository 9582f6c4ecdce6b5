//! Error taxonomy for the color-analysis engine.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChromataError>;

#[derive(Debug, thiserror::Error)]
pub enum ChromataError {
    /// Malformed or out-of-range caller input: empty buffers, a color count
    /// outside `[2, 10]`, too few colors for a pairwise check, bad color strings.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Unexpected numeric failure inside the engine (non-finite values,
    /// a clustering run with no populated cluster).
    #[error("computation failure: {0}")]
    ComputationFailure(String),
}

impl ChromataError {
    /// Build a [`ChromataError::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Build a [`ChromataError::ComputationFailure`].
    pub fn computation(message: impl Into<String>) -> Self {
        Self::ComputationFailure(message.into())
    }

    /// `true` for "bad request" errors, `false` for engine bugs.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<serde_json::Error> for ChromataError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput(format!("malformed configuration: {err}"))
    }
}
