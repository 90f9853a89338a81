//! Zone clock abstraction for deterministic timestamp resolution
//!
//! Reading times carry no date, so the formatter anchors them to "now" in
//! the zone's own time zone. The clock is injectable: production code uses
//! [`SystemClock`], tests freeze time with [`FixedClock`].

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Time zone of the AX electrical zone
pub const TIME_ZONE: Tz = chrono_tz::Europe::Mariehamn;

/// Source of "now" in the AX zone
pub trait Clock {
    /// Current time in [`TIME_ZONE`]
    fn now(&self) -> DateTime<Tz>;
}

/// Wall clock, converted into the zone's time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&TIME_ZONE)
    }
}

/// Clock frozen at a fixed instant
///
/// # Examples
///
/// ```
/// # use aland_grid_parser::{Clock, FixedClock};
/// let clock = FixedClock::at(2025, 10, 28, 12, 34);
/// assert_eq!(clock.now(), clock.now());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Tz>,
}

impl FixedClock {
    /// Freeze the clock at the given instant
    pub fn new(now: DateTime<Tz>) -> Self {
        Self { now }
    }

    /// Freeze the clock at a zone-local wall time
    ///
    /// Panics on dates that do not exist in the zone; intended for fixed
    /// test instants, not arbitrary input.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        let now = TIME_ZONE
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
            .expect("unambiguous zone-local instant");
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_system_clock_reports_zone_time() {
        let now = SystemClock.now();
        assert_eq!(now.timezone(), TIME_ZONE);
        assert!(now.year() >= 2024);
    }

    #[test]
    fn test_fixed_clock_is_deterministic() {
        let clock = FixedClock::at(2025, 10, 28, 12, 34);
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().hour(), 12);
        assert_eq!(clock.now().minute(), 34);
    }

    #[test]
    fn test_fixed_clock_from_instant() {
        let instant = TIME_ZONE.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(FixedClock::new(instant).now(), instant);
    }
}
