//! Error types and JSON error responses for the HTTP host.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::net::SocketAddr;
use thiserror::Error;

/// Errors that can occur while serving the counter.
#[derive(Debug, Error)]
pub enum ServerError {
    /// No control is registered under this element id
    #[error("Unknown control '{id}'")]
    UnknownControl { id: String },

    /// Configured bind address is not a socket address
    #[error("Invalid bind address '{addr}'")]
    InvalidAddress { addr: String },

    /// Every port in the fallback range was busy
    #[error("Could not find available port in range {start}-{end}")]
    NoAvailablePort { start: u16, end: u16 },

    /// `run()` was called before a successful `try_bind()`
    #[error("Server is not bound")]
    NotBound,

    #[error("I/O error on {addr}: {source}")]
    Io {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

impl ServerError {
    /// Map error variant to an HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::UnknownControl { .. } => StatusCode::NOT_FOUND,
            ServerError::InvalidAddress { .. }
            | ServerError::NoAvailablePort { .. }
            | ServerError::NotBound
            | ServerError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error type string for JSON responses
    pub fn error_type(&self) -> &'static str {
        match self {
            ServerError::UnknownControl { .. } => "unknown_control",
            ServerError::InvalidAddress { .. } => "invalid_address",
            ServerError::NoAvailablePort { .. } => "no_available_port",
            ServerError::NotBound => "not_bound",
            ServerError::Io { .. } => "io_error",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        });
        (self.status_code(), Json(body)).into_response()
    }
}
