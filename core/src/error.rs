//! Error types for the Paper API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the project/version/build does not exist" from "the server returned an
//! unexpected status." All other non-2xx responses land in `Http` with the
//! raw status code and body for debugging. The only client-originated
//! failures are the empty-list variants raised during "latest" resolution.

use std::fmt;

/// Errors returned by [`PaperClient`](crate::PaperClient) operations.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested resource does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    Http { status: u16, body: String },

    /// The request could not be executed (connection refused, DNS failure,
    /// broken stream).
    Transport(String),

    /// The response body could not be deserialized into the expected shape.
    Decode(String),

    /// The project's version list was empty, so no latest version exists.
    EmptyVersionList,

    /// The version's build list was empty, so no latest build exists.
    EmptyBuildList,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Transport(msg) => {
                write!(f, "transport failed: {msg}")
            }
            ApiError::Decode(msg) => {
                write!(f, "response decoding failed: {msg}")
            }
            ApiError::EmptyVersionList => {
                write!(f, "project has no versions")
            }
            ApiError::EmptyBuildList => {
                write!(f, "version has no builds")
            }
        }
    }
}

impl std::error::Error for ApiError {}
