//! Client configuration.

use std::fmt;
use std::time::Duration;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::retry::{RetryPolicy, DEFAULT_INITIAL_BACKOFF, DEFAULT_MAX_BACKOFF, DEFAULT_MAX_RETRIES};

/// Production API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.congress.gov/v3";

/// Prefix of the environment variables read by [`ClientConfig::load`].
pub const ENV_PREFIX: &str = "CONGRESS_";

/// Settings for a `CongressClient`.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. Environment variables with the `CONGRESS_` prefix
///
/// `CONGRESS_API_KEY` is the only setting without a usable default.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// congress.gov API key, sent as the `api_key` query parameter.
    pub api_key: String,

    /// Origin plus version prefix, without trailing slash.
    pub base_url: String,

    /// Timeout for a single network attempt.
    pub timeout_secs: u64,

    /// Overall budget for one call including retries and backoff.
    pub call_timeout_secs: Option<u64>,

    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    pub jitter: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            call_timeout_secs: None,
            max_retries: DEFAULT_MAX_RETRIES,
            initial_backoff_ms: millis(DEFAULT_INITIAL_BACKOFF),
            max_backoff_ms: millis(DEFAULT_MAX_BACKOFF),
            jitter: true,
        }
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("call_timeout_secs", &self.call_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("initial_backoff_ms", &self.initial_backoff_ms)
            .field("max_backoff_ms", &self.max_backoff_ms)
            .field("jitter", &self.jitter)
            .finish()
    }
}

impl ClientConfig {
    /// Defaults with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// The layered provider used by [`load`](Self::load). Callers may merge
    /// further providers on top before extracting.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load configuration from defaults and the environment.
    ///
    /// # Errors
    /// Returns an error if a value cannot be parsed or fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    /// Returns an error if extraction or validation fails.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error naming the first invalid setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api_key is required. Set CONGRESS_API_KEY or pass it to ClientConfig::new.".into(),
            ));
        }

        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            ConfigError::Validation(format!("base_url '{}' is not a valid URL: {e}", self.base_url))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "base_url must use http or https, got: '{}'",
                parsed.scheme()
            )));
        }
        if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
            return Err(ConfigError::Validation(format!(
                "base_url '{}' has no host",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation("timeout_secs cannot be 0".into()));
        }
        if self.call_timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "call_timeout_secs cannot be 0".into(),
            ));
        }

        if self.initial_backoff_ms > self.max_backoff_ms {
            return Err(ConfigError::Validation(format!(
                "initial_backoff_ms ({}) exceeds max_backoff_ms ({})",
                self.initial_backoff_ms, self.max_backoff_ms
            )));
        }

        Ok(())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_call_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.call_timeout_secs = secs;
        self
    }

    pub fn with_retry_policy(mut self, policy: &RetryPolicy) -> Self {
        self.max_retries = policy.max_retries;
        self.initial_backoff_ms = millis(policy.initial_backoff);
        self.max_backoff_ms = millis(policy.max_backoff);
        self.jitter = policy.jitter;
        self
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            initial_backoff: Duration::from_millis(self.initial_backoff_ms),
            max_backoff: Duration::from_millis(self.max_backoff_ms),
            jitter: self.jitter,
        }
    }

    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn call_timeout(&self) -> Option<Duration> {
        self.call_timeout_secs.map(Duration::from_secs)
    }
}
