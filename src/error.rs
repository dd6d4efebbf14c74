use thiserror::Error;

/// Failure kinds surfaced by the analysis pipeline.
///
/// Collaborators (tree listing, content fetching) report failures through this
/// type so the caller can distinguish retryable conditions from hard errors.
/// The ranker itself only ever produces `InvalidInput`.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A malformed repository entry (e.g. an empty path)
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The repository, branch, or blob does not exist
    #[error("not found: {what}")]
    NotFound { what: String },

    /// The source-control host rejected the request due to rate limiting
    #[error("rate limited by upstream host")]
    RateLimited,

    /// Any other failure in an upstream collaborator
    #[error(transparent)]
    UpstreamFailure(#[from] anyhow::Error),
}

impl AnalysisError {
    /// Create an invalid-input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Whether the caller may reasonably retry the overall operation
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::UpstreamFailure(_))
    }
}
