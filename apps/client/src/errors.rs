use thiserror::Error;

/// Everything that can go wrong between issuing a request and holding a
/// decoded payload. Loaders collapse all variants into `FetchStatus::Failed`;
/// callers branch on the status, not on the variant.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}")]
    Status { status: u16 },

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// True when the response arrived but carried a non-success status code.
    pub fn is_status(&self) -> bool {
        matches!(self, FetchError::Status { .. })
    }

    /// True when the body arrived but did not match the expected shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode(_))
    }
}
