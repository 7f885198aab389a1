//! Typed errors for the remote services. Nothing here is retried or
//! escalated; callers surface the message as a toast and move on.

use thiserror::Error;

/// Failures talking to the hosted JSON document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("document store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("document store is not configured")]
    Unconfigured,
}

/// Failures in the sign-up / sign-in flows.
///
/// Unknown email and wrong password both map to [`AuthError::InvalidCredentials`]
/// so the two are indistinguishable to the user.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already exists")]
    EmailTaken,

    #[error("{0}")]
    Validation(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures calling the generation API.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("generation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse generation response: {0}")]
    Parse(#[from] serde_json::Error),
}
