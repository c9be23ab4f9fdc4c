//! Shared Error Types
//!
//! This module defines the transport error type returned by the todo API
//! client. A transport error covers everything that can go wrong between
//! issuing a request and obtaining a decoded response.
//!
//! # Error Categories
//!
//! - `Network` - connection-level failures (DNS, refused, timeout)
//! - `Http` - non-success HTTP status, with the server's message when present
//! - `Decode` - a response body that could not be parsed
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread
//! boundaries.
use thiserror::Error;

/// Transport-level errors from the remote todo API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Network-level failure before any HTTP response arrived
    #[error("Network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// The server answered with a non-success HTTP status
    #[error("Request failed: {status} - {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Optional machine-readable error code from the response body
        code: Option<String>,
    },

    /// The response body could not be decoded
    #[error("Failed to parse response: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },
}

impl TransportError {
    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new HTTP error without a machine-readable code
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
            code: None,
        }
    }

    /// Create a new decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status code, when the error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Machine-readable error code, when the server provided one
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Http { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}
