//! Session error taxonomy
//!
//! Every variant ends the same way for the user: the guard sends them back to
//! the login page. The distinctions exist for logging and for tests.

use crate::token_store::TokenKey;
use thiserror::Error;

/// Standard result type for session operations
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Failure to read claims out of an access token
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Expected 3 dot-separated segments, found {0}")]
    Segments(usize),

    #[error("Payload segment is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Payload segment is not a JSON claims object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons a session cannot be treated as authenticated
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No {0} token in storage")]
    TokenAbsent(TokenKey),

    #[error("Access token could not be decoded: {0}")]
    Decode(#[from] DecodeError),

    #[error("Access token carries no expiry claim")]
    MissingExpiry,

    #[error("Refresh rejected by server ({status}): {message}")]
    RefreshRejected { status: u16, message: String },

    #[error("Refresh request failed: {0}")]
    Network(String),
}

impl AuthError {
    /// Create a refresh rejection error
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::RefreshRejected {
            status,
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Whether the failure came from the refresh exchange rather than local state
    pub fn is_refresh_failure(&self) -> bool {
        matches!(self, Self::RefreshRejected { .. } | Self::Network(_))
    }
}
