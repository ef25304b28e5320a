//! Transport Executor: sends GETs, attaches the API key, retries transient
//! failures.
//!
//! # Design
//! `Transport` performs exactly one HTTP exchange and knows nothing about
//! retries or credentials. `Executor` owns the retry loop and is the only
//! place the API key is attached. Everything the loop tracks (attempt count,
//! last cause) is local to one `execute` call, so a single executor can be
//! shared across threads without locking.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::{TransientCause, TransportError};
use crate::http::{HttpRequest, HttpResponse, Outcome};
use crate::retry::{parse_retry_after, RetryPolicy};

/// Name of the credential query parameter.
const API_KEY_PARAM: &str = "api_key";

/// One HTTP GET. Implementations must return non-2xx statuses as
/// `Ok(HttpResponse)`; `Err` is reserved for exchanges that produced no
/// status at all.
pub trait Transport: Send + Sync {
    fn get(
        &self,
        url: &str,
        query: &[(String, String)],
        timeout: Option<Duration>,
    ) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by a shared `ureq` agent.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl Transport for UreqTransport {
    fn get(
        &self,
        url: &str,
        query: &[(String, String)],
        timeout: Option<Duration>,
    ) -> Result<HttpResponse, TransportError> {
        let request = query
            .iter()
            .fold(self.agent.get(url), |req, (k, v)| req.query(k, v))
            .config()
            .timeout_global(timeout)
            .build();

        let mut response = request.call().map_err(map_ureq_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(map_body_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn map_ureq_error(err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::Timeout(_) => TransportError::Timeout,
        ureq::Error::BadUri(msg) => TransportError::InvalidUrl(msg),
        ureq::Error::Http(e) => TransportError::InvalidUrl(e.to_string()),
        ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => {
            TransportError::Connect(err.to_string())
        }
        ureq::Error::Io(e) => TransportError::Connect(e.to_string()),
        other => TransportError::Other(other.to_string()),
    }
}

/// Errors reading a body that has already arrived. Size and decoding
/// failures repeat on every attempt; anything else is a network error.
fn map_body_error(err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::BodyExceedsLimit(limit) => {
            TransportError::Body(format!("body exceeds {limit} bytes"))
        }
        ureq::Error::Decompress(encoding, e) => {
            TransportError::Body(format!("{encoding} decoding failed: {e}"))
        }
        other => map_ureq_error(other),
    }
}

/// Runs one request to completion under a `RetryPolicy`.
#[derive(Clone)]
pub struct Executor {
    transport: Arc<dyn Transport>,
    base_url: String,
    api_key: String,
    policy: RetryPolicy,
    attempt_timeout: Option<Duration>,
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executor")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("policy", &self.policy)
            .field("attempt_timeout", &self.attempt_timeout)
            .finish_non_exhaustive()
    }
}

impl Executor {
    pub fn new(
        transport: Arc<dyn Transport>,
        base_url: &str,
        api_key: impl Into<String>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            policy,
            attempt_timeout: None,
        }
    }

    /// Bound every single attempt, independently of the call deadline.
    pub fn with_attempt_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `request`, retrying transient failures until the policy or the
    /// deadline runs out.
    pub fn execute(&self, request: &HttpRequest, deadline: Option<Instant>) -> Outcome {
        let url = format!("{}{}", self.base_url, request.path);
        let mut query = request.query.clone();
        query.push((API_KEY_PARAM.to_string(), self.api_key.clone()));

        let max_attempts = self.policy.max_attempts();
        let mut attempts = 0;
        let mut last_cause: Option<TransientCause> = None;

        loop {
            let Some(timeout) = self.timeout_for(deadline) else {
                warn!(attempts, "deadline elapsed before attempt {}", attempts + 1);
                return Outcome::DeadlineExceeded {
                    attempts,
                    cause: last_cause,
                };
            };

            attempts += 1;
            debug!(attempt = attempts, max_attempts, %url, "sending request");

            let mut retry_after = None;
            let cause = match self.transport.get(&url, &query, timeout) {
                Ok(response) if response.is_transient() => {
                    warn!(
                        "HTTP {} on attempt {}/{}",
                        response.status, attempts, max_attempts
                    );
                    if response.status == 429 {
                        retry_after = response.header("retry-after").and_then(parse_retry_after);
                    }
                    TransientCause::Status {
                        status: response.status,
                        body: response.body,
                    }
                }
                Ok(response) => {
                    debug!(status = response.status, attempt = attempts, "request completed");
                    return Outcome::Response(response);
                }
                Err(TransportError::Body(reason)) => {
                    warn!("response body unreadable: {reason}");
                    return Outcome::Unreadable(reason);
                }
                Err(err) if !err.is_transient() => {
                    warn!("request could not be sent: {err}");
                    return Outcome::Unsendable(err);
                }
                Err(err) => {
                    warn!("{err} on attempt {}/{}", attempts, max_attempts);
                    TransientCause::Transport(err)
                }
            };

            if attempts >= max_attempts {
                return Outcome::Exhausted { attempts, cause };
            }

            let delay = self.policy.delay_for(attempts - 1, retry_after);
            if let Some(deadline) = deadline {
                if Instant::now() + delay >= deadline {
                    warn!(attempts, "backoff of {delay:?} would pass the deadline");
                    return Outcome::DeadlineExceeded {
                        attempts,
                        cause: Some(cause),
                    };
                }
            }
            last_cause = Some(cause);
            debug!("retrying after {delay:?}");
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
        }
    }

    /// Per-attempt timeout clipped to the deadline. `None` means the deadline
    /// has already passed; `Some(None)` means no limit at all.
    fn timeout_for(&self, deadline: Option<Instant>) -> Option<Option<Duration>> {
        let Some(deadline) = deadline else {
            return Some(self.attempt_timeout);
        };
        let remaining = deadline.checked_duration_since(Instant::now())?;
        if remaining.is_zero() {
            return None;
        }
        Some(Some(
            self.attempt_timeout.map_or(remaining, |t| t.min(remaining)),
        ))
    }
}
