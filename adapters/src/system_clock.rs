use std::time::{Duration, SystemTime, UNIX_EPOCH};

use application::ports::out_::Clock;

/// Wall clock in epoch milliseconds; target expiry is compared against
/// this between driver firings.
pub struct SystemClock;

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_millis() as u64
    }
}
