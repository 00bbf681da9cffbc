//! Error Types

use thiserror::Error;

/// Result type alias for storefront operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Storefront error types
#[derive(Error, Debug)]
pub enum StoreError {
    /// Any failed request: transport failure or non-success status
    #[error("Network error: {0}")]
    Network(String),

    /// Resource path is not a path under the configured base
    #[error("Invalid resource path: {0}")]
    InvalidPath(String),

    /// Payload is not a list of well-typed product records
    #[error("Invalid product data: {0}")]
    Schema(String),
}

impl StoreError {
    /// Whether the request itself failed, as opposed to returning data the
    /// catalog could not read
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
