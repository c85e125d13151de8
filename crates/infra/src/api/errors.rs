//! API-specific error types
//!
//! Provides error classification for API operations with retry metadata.

use std::time::Duration;

use meetnotify_domain::MeetNotifyError;
use thiserror::Error;

/// Categories of API errors for retry logic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403) - retry after token refresh
    Authentication,
    /// Rate limiting errors (429) - retry with backoff
    RateLimit,
    /// Server errors (5xx) - retryable
    Server,
    /// Client errors (4xx except auth) - non-retryable
    Client,
    /// Network/connection errors - retryable
    Network,
    /// Configuration errors - non-retryable
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::RateLimit(_) => ApiErrorCategory::RateLimit,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Client(_) | Self::NotFound(_) | Self::Conflict(_) | Self::Decode(_) => {
                ApiErrorCategory::Client
            }
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Check if this error should be retried
    pub fn should_retry(&self) -> bool {
        matches!(
            self.category(),
            ApiErrorCategory::RateLimit | ApiErrorCategory::Server | ApiErrorCategory::Network
        )
    }

    /// Get suggested retry delay in seconds
    pub fn retry_delay_secs(&self) -> u64 {
        match self.category() {
            ApiErrorCategory::RateLimit => 60, // Wait for rate limit window
            ApiErrorCategory::Server => 10,
            ApiErrorCategory::Network => 5,
            ApiErrorCategory::Authentication
            | ApiErrorCategory::Client
            | ApiErrorCategory::Config => 0,
        }
    }
}

impl From<ApiError> for MeetNotifyError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth(message) => MeetNotifyError::Auth(message),
            ApiError::NotFound(message) => MeetNotifyError::NotFound(message),
            ApiError::Conflict(message) => MeetNotifyError::Conflict(message),
            ApiError::Client(message) => MeetNotifyError::InvalidInput(message),
            ApiError::Server(message) => MeetNotifyError::Server(message),
            ApiError::RateLimit(message) | ApiError::Network(message) => {
                MeetNotifyError::Network(message)
            }
            ApiError::Timeout(after) => {
                MeetNotifyError::Network(format!("request timed out after {after:?}"))
            }
            ApiError::Config(message) => MeetNotifyError::Config(message),
            ApiError::Decode(message) => MeetNotifyError::Internal(message),
        }
    }
}
