// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::cell::Cell;
use std::rc::Rc;
use time::{Duration, OffsetDateTime};

/// A source of the current time.
///
/// Cart expiry and order numbers depend on wall-clock time; taking the clock
/// as a parameter keeps those paths deterministic under test.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> OffsetDateTime;

    /// Returns the current instant as whole milliseconds since the Unix
    /// epoch.
    #[allow(clippy::cast_possible_truncation)]
    fn now_ms(&self) -> i64 {
        (self.now().unix_timestamp_nanos() / 1_000_000) as i64
    }
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A hand-driven clock for tests. Clones share the same instant, so a test
/// can hold one handle while the code under test holds another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<OffsetDateTime>>,
}

impl ManualClock {
    /// Creates a manual clock frozen at `start`.
    #[must_use]
    pub fn new(start: OffsetDateTime) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Moves the clock forward by `step`.
    pub fn advance(&self, step: Duration) {
        self.now.set(self.now.get() + step);
    }

    /// Jumps the clock to `instant`.
    pub fn set(&self, instant: OffsetDateTime) {
        self.now.set(instant);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> OffsetDateTime {
        self.now.get()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_manual_clock_advances_and_shares_state() {
        let clock: ManualClock = ManualClock::new(datetime!(2026-08-23 12:00 UTC));
        let handle: ManualClock = clock.clone();

        clock.advance(Duration::minutes(30));

        assert_eq!(handle.now(), datetime!(2026-08-23 12:30 UTC));
    }

    #[test]
    fn test_now_ms_converts_to_whole_milliseconds() {
        let clock: ManualClock = ManualClock::new(datetime!(2026-08-23 00:00:01.5 UTC));

        assert_eq!(clock.now_ms(), 1_787_443_201_500);
    }
}
