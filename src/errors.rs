//! Error types for the fawry-rs library.
//!
//! This module defines all error types that can occur while building, signing,
//! and dispatching gateway requests.

use thiserror::Error;

/// Main error type for Fawry gateway operations.
///
/// Each variant corresponds to one stage of the request pipeline, so callers can
/// tell whether a failure happened before any network activity (`Validation`,
/// `Json`, `Url`) or during transport (`Http`).
#[derive(Error, Debug)]
pub enum FawryError {
    /// A payload failed its structural validation rules. Reported before any
    /// network activity takes place.
    #[error("validation error: {0}")]
    Validation(String),

    /// A request body could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A request URL could not be constructed.
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// The HTTP transport failed (DNS, connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Fawry gateway operations.
pub type Result<T> = std::result::Result<T, FawryError>;
