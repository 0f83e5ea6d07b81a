//! Wall-clock access.
//!
//! The store never calls `chrono::Local::now()` directly; it asks a
//! [`Clock`]. Production wiring uses [`SystemClock`], tests use
//! [`ManualClock`] to pin the time of day.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveTime, Timelike, Utc};
use parking_lot::Mutex;

use crate::types::Timestamp;

/// Source of the current instant, expressed in the server's local offset.
pub trait Clock: Send + Sync {
    /// The current instant with the server's local UTC offset attached.
    fn now(&self) -> DateTime<FixedOffset>;

    /// The current instant as a UTC timestamp.
    fn timestamp(&self) -> Timestamp {
        self.now().with_timezone(&Utc)
    }

    /// The server's local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// The local time of day truncated to whole minutes.
    fn wall_time(&self) -> NaiveTime {
        truncate_to_minute(self.now().time())
    }
}

/// Drop seconds and sub-second precision.
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// Reads the operating system clock in the server's local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<FixedOffset>>,
}

impl ManualClock {
    pub fn new(start: DateTime<FixedOffset>) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Build a clock at the given local date and time with a UTC offset of zero.
    pub fn at(date: NaiveDate, time: NaiveTime) -> Self {
        Self::new(date.and_time(time).and_utc().fixed_offset())
    }

    /// Jump to an absolute instant.
    pub fn set(&self, instant: DateTime<FixedOffset>) {
        *self.current.lock() = instant;
    }

    /// Move to a different time of day on the current local date.
    pub fn set_time(&self, time: NaiveTime) {
        let mut current = self.current.lock();
        let offset = *current.offset();
        let local = current.date_naive().and_time(time);
        if let Some(moved) = local.and_local_timezone(offset).single() {
            *current = moved;
        }
    }

    /// Advance the clock.
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock();
        *current += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.current.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn wall_time_drops_seconds() {
        let clock = ManualClock::at(date(2025, 3, 14), time(9, 41, 59));
        assert_eq!(clock.wall_time(), time(9, 41, 0));
    }

    #[test]
    fn set_time_keeps_date() {
        let clock = ManualClock::at(date(2025, 3, 14), time(9, 0, 0));
        clock.set_time(time(17, 30, 0));
        assert_eq!(clock.today(), date(2025, 3, 14));
        assert_eq!(clock.wall_time(), time(17, 30, 0));
    }

    #[test]
    fn advance_can_cross_midnight() {
        let clock = ManualClock::at(date(2025, 3, 14), time(23, 50, 0));
        clock.advance(Duration::minutes(20));
        assert_eq!(clock.today(), date(2025, 3, 15));
        assert_eq!(clock.wall_time(), time(0, 10, 0));
    }
}
