//! Timeout configuration for outbound requests.

use std::time::Duration;

/// Timeout configuration applied to every request a client sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Connection timeout.
    pub connect: Duration,
    /// Total operation timeout.
    pub total: Duration,
}

impl TimeoutConfig {
    /// Create a new timeout configuration.
    pub fn new(connect: Duration, total: Duration) -> Self {
        Self { connect, total }
    }

    /// Create from a single total timeout.
    ///
    /// The connect phase gets a quarter of the budget.
    pub fn from_total(total: Duration) -> Self {
        Self {
            connect: Duration::from_millis(total.as_millis() as u64 / 4),
            total,
        }
    }

    /// Create from a total timeout in milliseconds.
    pub fn from_millis(total_ms: u64) -> Self {
        Self::from_total(Duration::from_millis(total_ms))
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            total: Duration::from_secs(20),
        }
    }
}
