//! Error types for backend fetches.
//!
//! Both failure kinds end up rendered as the same static HTML error view;
//! the distinction only drives logging and the response status code.

use axum::http::StatusCode;

/// Failure talking to the backend API.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure: connect, timeout, body read, JSON decode.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {0}")]
    Status(StatusCode),
}

impl FetchError {
    /// Response status for the rendered error page.
    ///
    /// An upstream 404 stays a 404 (the post does not exist); everything
    /// else is reported as a bad gateway.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Status(status) if *status == StatusCode::NOT_FOUND => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}
