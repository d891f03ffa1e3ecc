//! Timing of the registration pass.

use serde::{Deserialize, Serialize};
use shelf_proto::DurationMs;

/// How hard the service tries to get sections into the host.
///
/// Retries use a fixed delay. Readiness is polled at a fixed interval
/// until the timeout, after which registration is attempted anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationPolicy {
    /// Registration passes before giving up (at least one is made).
    pub max_attempts: u32,
    /// Pause between failed passes.
    pub retry_delay: DurationMs,
    /// How long to wait for the host to report ready.
    pub readiness_timeout: DurationMs,
    /// Interval between readiness checks.
    pub readiness_poll: DurationMs,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: DurationMs::from_secs(2),
            readiness_timeout: DurationMs::from_secs(60),
            readiness_poll: DurationMs::from_secs(1),
        }
    }
}

impl RegistrationPolicy {
    /// Set the number of passes.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the delay between failed passes.
    pub fn with_retry_delay(mut self, delay: DurationMs) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Set the readiness timeout and poll interval.
    pub fn with_readiness(mut self, timeout: DurationMs, poll: DurationMs) -> Self {
        self.readiness_timeout = timeout;
        self.readiness_poll = poll;
        self
    }

    /// Passes to make, never zero.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Readiness checks that fit in the timeout, never zero.
    pub fn readiness_polls(&self) -> u64 {
        let poll = self.readiness_poll.as_millis().max(1);
        (self.readiness_timeout.as_millis() / poll).max(1)
    }
}
