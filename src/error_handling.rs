use std::io;

use thiserror::Error;

use crate::models::ErrorBody;

/// Fallback when an error body carries no usable `message`
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Everything that can end an invocation early
#[derive(Error, Debug)]
pub enum GitPeekError {
    #[error("Error: {0}")]
    Usage(String),

    #[error("Error: {message}")]
    RemoteApi { status: u16, message: String },

    #[error("Error: could not reach the API ({0})")]
    Transport(String),

    #[error("Error: malformed response from the API ({0})")]
    MalformedBody(String),

    #[error("Error: invalid configuration ({0})")]
    Config(String),

    #[error("Error: failed to write output ({0})")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GitPeekError>;

impl GitPeekError {
    /// Process exit status for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            Self::Transport(_) => 3,
            Self::RemoteApi { .. } | Self::MalformedBody(_) | Self::Config(_) | Self::Output(_) => 1,
        }
    }

    /// Build a remote error from a non-200 status and its raw body
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::RemoteApi {
            status,
            message: error_message_from_body(body),
        }
    }
}

impl From<reqwest::Error> for GitPeekError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Transport("request timed out".to_string())
        } else if err.is_connect() {
            Self::Transport("connection failed".to_string())
        } else if err.is_builder() {
            Self::Config(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Extract the `message` field of an error body, tolerating non-JSON bodies
#[must_use]
pub fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}
