//! Web front end errors.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use dirsize_core::{RequestError, ScanError};

/// Errors raised by handlers and the server lifecycle.
#[derive(Debug, Error)]
pub enum WebError {
    /// Invalid query parameters
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Root directory could not be listed
    #[error("Failed to read directory: {0}")]
    Scan(#[from] ScanError),

    /// Page rendering failed
    #[error("Failed to render template: {0}")]
    Template(#[from] askama::Error),

    /// Blocking scan task panicked or was cancelled
    #[error("Scan task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Statistics client could not be built
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Server I/O error
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),

    /// In-flight requests outlived the shutdown timeout
    #[error("Graceful shutdown did not complete within {0:?}")]
    ShutdownTimeout(Duration),
}

impl WebError {
    /// HTTP status reported to the client.
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::Request(_) => StatusCode::BAD_REQUEST,
            WebError::Scan(ScanError::NotFound { .. }) => StatusCode::NOT_FOUND,
            WebError::Scan(ScanError::PermissionDenied { .. }) => StatusCode::FORBIDDEN,
            WebError::Scan(ScanError::NotADirectory { .. }) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            WebError::from(RequestError::MissingRoot).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebError::from(ScanError::NotFound {
                path: PathBuf::from("/x")
            })
            .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebError::from(ScanError::PermissionDenied {
                path: PathBuf::from("/x")
            })
            .status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            WebError::from(std::io::Error::other("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_request_error_message_is_verbatim() {
        let err = WebError::from(RequestError::InvalidSortDirection {
            value: "up".to_string(),
        });
        assert_eq!(
            err.to_string(),
            RequestError::InvalidSortDirection {
                value: "up".to_string()
            }
            .to_string()
        );
    }
}
