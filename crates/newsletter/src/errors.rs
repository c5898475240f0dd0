//! Error types for the newsletter crate.

use thiserror::Error;

/// Errors raised by the fetch, summarize and dispatch stages.
#[derive(Error, Debug)]
pub enum NewsletterError {
    // Transport errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    // Text generation errors
    #[error("AI error: {0}")]
    Ai(String),

    // Mail errors
    #[error("Invalid email address: {0}")]
    Address(String),

    #[error("Failed to build email: {0}")]
    Email(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

impl From<lettre::address::AddressError> for NewsletterError {
    fn from(err: lettre::address::AddressError) -> Self {
        Self::Address(err.to_string())
    }
}

impl From<lettre::error::Error> for NewsletterError {
    fn from(err: lettre::error::Error) -> Self {
        Self::Email(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for NewsletterError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        Self::Smtp(err.to_string())
    }
}

/// Result type alias for newsletter operations
pub type NewsletterResult<T> = Result<T, NewsletterError>;
