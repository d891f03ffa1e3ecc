//! Millisecond durations for configuration files.
//!
//! [`DurationMs`] serializes as a plain integer (milliseconds) rather than
//! serde's `{"secs": N, "nanos": N}` shape, so a registration policy reads
//! as `retry_delay = 2000` in TOML.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Duration in milliseconds with a plain integer serialization.
///
/// # Examples
///
/// ```
/// use shelf_proto::DurationMs;
///
/// let d = DurationMs::from_secs(2);
/// assert_eq!(d.as_millis(), 2000);
///
/// let json = serde_json::to_string(&d).unwrap();
/// assert_eq!(json, "2000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationMs(u64);

impl DurationMs {
    /// Zero duration.
    pub const ZERO: Self = Self(0);

    /// Create from milliseconds.
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Create from seconds.
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs.saturating_mul(1000))
    }

    /// Get the value in milliseconds.
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Convert to `std::time::Duration`.
    pub fn to_std(&self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl From<Duration> for DurationMs {
    fn from(d: Duration) -> Self {
        Self(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

impl From<DurationMs> for Duration {
    fn from(d: DurationMs) -> Self {
        Duration::from_millis(d.0)
    }
}

impl Default for DurationMs {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::fmt::Display for DurationMs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
