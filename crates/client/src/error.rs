use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("{operation} failed: {message}")]
    Backend {
        operation: &'static str,
        message: String,
    },
}

impl ApiError {
    /// Backend-reported failures are surfaced to the user as a blocking
    /// alert naming the operation; transport failures are only logged.
    pub fn is_backend(&self) -> bool {
        matches!(self, ApiError::Backend { .. })
    }
}
