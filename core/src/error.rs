//! Error types for the congress.gov client.
//!
//! # Design
//! Each variant is one failure category a caller can branch on. `NotFound`
//! and `MalformedResponse` are deliberately separate: the first means the
//! server has no such resource, the second means the server answered but the
//! document does not have the shape the call asked for. Transient variants
//! carry the last observed cause so a caller can retry at a higher level.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by every pipeline and resource method.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A path or query value was missing or structurally invalid. Detected
    /// before any network call.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The server returned 404 for the resolved path.
    #[error("resource not found: {path}")]
    NotFound { path: String },

    /// The server refused the request (4xx other than 404/429).
    #[error("request rejected with HTTP {status}: {body}")]
    RequestRejected { status: u16, body: String },

    /// Transient failures persisted past the retry budget.
    #[error("transient failure after {attempts} attempt(s): {cause}")]
    TransientFailure { attempts: u32, cause: TransientCause },

    /// The caller's deadline elapsed before a final answer was obtained.
    #[error("deadline exceeded after {attempts} attempt(s){}", cause_suffix(.cause))]
    DeadlineExceeded {
        attempts: u32,
        cause: Option<TransientCause>,
    },

    /// A success status carried a body that does not match the expected shape.
    #[error("malformed response from {path}: {reason}")]
    MalformedResponse { path: String, reason: String },
}

impl ApiError {
    pub(crate) fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for the categories that may succeed if the caller tries again
    /// later.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::TransientFailure { .. } | Self::DeadlineExceeded { .. }
        )
    }
}

fn cause_suffix(cause: &Option<TransientCause>) -> String {
    cause.as_ref().map(|c| format!(": {c}")).unwrap_or_default()
}

/// The last failure observed by the executor before it gave up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransientCause {
    /// The server answered with a retryable status (5xx or 429).
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Failures raised by a `Transport` before any HTTP status was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    /// The URL could not be constructed or parsed. Never retried.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The response arrived but its body could not be read, e.g. it
    /// exceeded the size limit or failed to decompress. Never retried.
    #[error("unreadable response body: {0}")]
    Body(String),

    #[error("transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        !matches!(self, Self::InvalidUrl(_) | Self::Body(_))
    }
}

/// Errors raised while loading or validating `ClientConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}
