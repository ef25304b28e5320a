//! HTTP request and response values exchanged between pipeline stages.
//!
//! # Design
//! Requests and responses are plain data. The Request Builder produces an
//! `HttpRequest` without touching the network, a `Transport` turns it into an
//! `HttpResponse`, and the classifier consumes that response. Keeping them as
//! owned values lets every stage be tested with synthetic inputs.
//!
//! The domain is read-only, so every request is a GET and no method field is
//! carried.

use crate::error::{TransientCause, TransportError};

/// A fully resolved request, minus the origin and credential.
///
/// `path` is relative to the configured base URL. `query` holds each
/// parameter at most once, in the order it was set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Value of a query parameter, if it was emitted.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// `name=value&...` rendering, without percent-encoding. Used for logs and
    /// test assertions.
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// A raw HTTP response. Header names are stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_ascii_lowercase(), value.into()));
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 5xx and 429 are worth another attempt.
    pub fn is_transient(&self) -> bool {
        self.status == 429 || (500..600).contains(&self.status)
    }
}

/// What the executor hands to the classifier after it stops retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A final response that needs no further attempt.
    Response(HttpResponse),

    /// Every attempt failed transiently.
    Exhausted { attempts: u32, cause: TransientCause },

    /// The deadline elapsed first. `cause` is the last failure seen, if any
    /// attempt was made.
    DeadlineExceeded {
        attempts: u32,
        cause: Option<TransientCause>,
    },

    /// The request could not be sent at all and retrying will not help.
    Unsendable(TransportError),

    /// A response arrived whose body could not be read.
    Unreadable(String),
}
