use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// Provider of wall-clock instants in milliseconds since the Unix epoch.
pub trait TimeSource {
    fn now_millis(&self) -> i64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    #[inline]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

/// The operating system's real-time clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => i64::try_from(d.as_millis()).unwrap_or(i64::MAX),
            // Clock set before 1970.
            Err(e) => i64::try_from(e.duration().as_millis()).map_or(i64::MIN, |ms| -ms),
        }
    }
}

/// Hand-driven clock for tests and deterministic hosts.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    pub fn new(start_millis: i64) -> Self {
        Self { now: Cell::new(start_millis) }
    }

    pub fn set(&self, millis: i64) {
        self.now.set(millis);
    }

    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get().saturating_add(millis));
    }
}

impl TimeSource for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(1_000);
        clock.advance(250);
        assert_eq!(clock.now_millis(), 1_250);
        clock.set(-5);
        assert_eq!((&clock).now_millis(), -5);
    }

    #[test]
    fn system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }
}
