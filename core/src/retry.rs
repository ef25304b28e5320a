//! Retry policy: attempt bound, exponential backoff with jitter, Retry-After.

use std::time::Duration;

use rand::Rng;

/// Retries after the first attempt, so at most four network calls per request.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// First backoff step. Doubles on every further retry.
pub const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(500);

/// Upper bound for any single computed backoff.
pub const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(8);

/// How many times, and how long apart, transient failures are retried.
///
/// The policy is plain configuration. All per-call retry state lives on the
/// executor's stack, so one policy can serve any number of concurrent calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    /// Randomize the upper half of each delay.
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_backoff: DEFAULT_INITIAL_BACKOFF,
            max_backoff: DEFAULT_MAX_BACKOFF,
            jitter: true,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Total network calls this policy allows for one request.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Un-jittered delay before retry number `retry` (0-based).
    pub fn base_delay(&self, retry: u32) -> Duration {
        let factor = 2u32.checked_pow(retry).unwrap_or(u32::MAX);
        self.initial_backoff
            .checked_mul(factor)
            .unwrap_or(self.max_backoff)
            .min(self.max_backoff)
    }

    /// Delay before retry number `retry`. A server-supplied `retry_after`
    /// replaces the computed backoff as is; only the call deadline bounds it.
    pub fn delay_for(&self, retry: u32, retry_after: Option<Duration>) -> Duration {
        if let Some(hint) = retry_after {
            return hint;
        }
        let base = self.base_delay(retry);
        if !self.jitter || base.is_zero() {
            return base;
        }
        // Equal jitter: keep half, randomize the other half.
        let half = base / 2;
        let spread = u64::try_from(half.as_millis()).unwrap_or(u64::MAX);
        half + Duration::from_millis(rand::thread_rng().gen_range(0..=spread))
    }
}

/// Parse a `Retry-After` value given as delta seconds. The HTTP-date form is
/// not supported and yields `None`.
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}
