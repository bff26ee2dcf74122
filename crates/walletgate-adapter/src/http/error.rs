/*
[INPUT]:  Error sources (HTTP status, transport, serialization, wallet bridge)
[OUTPUT]: Structured error types for the sign-in flow
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::auth::{BridgeAvailability, BridgeError};

/// Main error type for the walletgate adapter
#[derive(Error, Debug)]
pub enum WalletgateError {
    /// Auth server answered with a non-success status
    #[error("request failed: {status_text}")]
    Request { status: u16, status_text: String },

    /// Wallet bridge refused or failed the call
    #[error(transparent)]
    Wallet(#[from] BridgeError),

    /// HTTP transport failed before a status was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No usable wallet bridge in this environment
    #[error("wallet bridge unavailable: {0}")]
    BridgeUnavailable(BridgeAvailability),

    /// A login is already in flight
    #[error("a login is already in progress")]
    LoginInProgress,

    /// Logout happened while the login was in flight
    #[error("login cancelled by logout")]
    LoginCancelled,

    /// Wallet bridge did not answer in time
    #[error("wallet bridge timeout after {duration:?}")]
    Timeout { duration: Duration },
}

impl WalletgateError {
    /// Create a request error from a response status
    pub fn request_failed(status: StatusCode) -> Self {
        WalletgateError::Request {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// Check if the auth server rejected the request
    pub fn is_request_error(&self) -> bool {
        matches!(self, WalletgateError::Request { .. })
    }

    /// Check if the user declined a wallet prompt
    pub fn is_wallet_rejection(&self) -> bool {
        matches!(self, WalletgateError::Wallet(BridgeError::Rejected { .. }))
    }

    /// HTTP status carried by a request error
    pub fn status(&self) -> Option<u16> {
        match self {
            WalletgateError::Request { status, .. } => Some(*status),
            WalletgateError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for walletgate operations
pub type Result<T> = std::result::Result<T, WalletgateError>;
