//! Pure transforms for the AX adapter
//!
//! Two concerns live here:
//!
//! 1. **Reading-time resolution**: the feed stamps each reading with
//!    "HH:MM" only. The date comes from "now" in the zone; a candidate
//!    after "now" must belong to the previous day (readings crossing
//!    midnight relative to fetch time).
//! 2. **Exchange mapping**: which interconnector fields feed a zone pair,
//!    and how the net flow is oriented along the sorted pair key.

use chrono::{DateTime, Duration, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::error::ParserError;
use crate::types::{RawReading, ZoneKey};

/// Sampling interval of the feed, subtracted from non-initial readings
const READING_INTERVAL_MINUTES: i64 = 15;

/// Resolve a "HH:MM" reading time against "now" in the zone
///
/// The candidate timestamp is now's local date combined with the reading's
/// time of day. Two corrections apply, in order:
///
/// 1. A candidate strictly after "now" is shifted back one day.
/// 2. Readings at `index > 0` are shifted back one sampling interval
///    (15 minutes). The first reading never is; this asymmetry is the
///    reference behavior of the feed and is kept as-is.
///
/// # Arguments
///
/// * `now` - Current time in the zone's time zone
/// * `time` - Reading time of day, "HH:MM"
/// * `index` - Position of the reading in the fetched list
///
/// # Returns
///
/// * `Ok(DateTime<Tz>)` - Corrected timestamp in the zone's time zone
/// * `Err(ParserError::InvalidTime)` - Unparseable time, or a wall-clock
///   time skipped by a DST transition
pub fn resolve_reading_time(
    now: DateTime<Tz>,
    time: &str,
    index: usize,
) -> Result<DateTime<Tz>, ParserError> {
    let time_of_day = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| ParserError::InvalidTime(time.to_string()))?;

    let local = now.date_naive().and_time(time_of_day);
    let mut corrected = now
        .timezone()
        .from_local_datetime(&local)
        .earliest()
        .ok_or_else(|| ParserError::InvalidTime(time.to_string()))?;

    if corrected > now {
        corrected = corrected - Duration::days(1);
    }
    if index > 0 {
        corrected = corrected - Duration::minutes(READING_INTERVAL_MINUTES);
    }

    Ok(corrected)
}

/// Alphabetically sorted exchange key for a zone pair, "A->B"
///
/// # Examples
///
/// ```
/// # use aland_grid_parser::{ZoneKey, transformations::sorted_exchange_key};
/// let ax = ZoneKey::new("AX").unwrap();
/// let se = ZoneKey::new("SE-SE3").unwrap();
/// assert_eq!(sorted_exchange_key(&ax, &se), "AX->SE-SE3");
/// assert_eq!(sorted_exchange_key(&se, &ax), "AX->SE-SE3");
/// ```
pub fn sorted_exchange_key(zone1: &ZoneKey, zone2: &ZoneKey) -> String {
    let (first, second) = if zone1.as_str() <= zone2.as_str() {
        (zone1, zone2)
    } else {
        (zone2, zone1)
    };
    format!("{}->{}", first, second)
}

/// Net flow for a zone pair, oriented along the sorted exchange key
///
/// The feed reports interconnector flows as imports into AX (positive =
/// into AX). The Sweden link is the `sweden` field; the two cables to
/// Finland (ÅL-link and Gustavs) sum into the Finland flow. The result is
/// re-oriented so that a positive value means flow from the first to the
/// second zone of the sorted key.
///
/// # Returns
///
/// * `Ok(f64)` - Net flow in MW along the sorted key
/// * `Err(ParserError::UnsupportedExchange)` - Pair without AX, or a
///   neighbor with no mapped interconnector
pub fn exchange_net_flow(
    reading: &RawReading,
    zone1: &ZoneKey,
    zone2: &ZoneKey,
) -> Result<f64, ParserError> {
    let (first, second) = if zone1.as_str() <= zone2.as_str() {
        (zone1, zone2)
    } else {
        (zone2, zone1)
    };

    let neighbor = if first.as_str() == "AX" {
        second
    } else if second.as_str() == "AX" {
        first
    } else {
        return Err(ParserError::UnsupportedExchange(sorted_exchange_key(
            zone1, zone2,
        )));
    };

    let import = if neighbor.as_str().starts_with("SE") {
        reading.sweden
    } else if neighbor.as_str() == "FI" {
        reading.alink + reading.gustavs
    } else {
        return Err(ParserError::UnsupportedExchange(sorted_exchange_key(
            zone1, zone2,
        )));
    };

    // Positive along the key means first -> second; an import into AX runs
    // against that direction whenever AX sorts first.
    if first.as_str() == "AX" {
        Ok(-import)
    } else {
        Ok(import)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TIME_ZONE;
    use chrono::{Datelike, Timelike};

    fn fixed_now() -> DateTime<Tz> {
        TIME_ZONE.with_ymd_and_hms(2025, 10, 28, 12, 34, 0).unwrap()
    }

    fn reading(time: &str) -> RawReading {
        RawReading {
            time: time.to_string(),
            wind: 0.0,
            fossil: 0.0,
            consumption: 0.0,
            sweden: 0.0,
            alink: 0.0,
            gustavs: 0.0,
        }
    }

    // ========================================================================
    // resolve_reading_time
    // ========================================================================

    #[test]
    fn test_first_reading_keeps_exact_time() {
        let dt = resolve_reading_time(fixed_now(), "12:00", 0).unwrap();
        assert_eq!(dt.day(), 28);
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn test_reading_equal_to_now_is_not_shifted() {
        let dt = resolve_reading_time(fixed_now(), "12:34", 0).unwrap();
        assert_eq!(dt, fixed_now());
    }

    #[test]
    fn test_future_time_shifts_back_one_day() {
        let dt = resolve_reading_time(fixed_now(), "13:00", 0).unwrap();
        assert_eq!(dt.day(), 27);
        assert_eq!(dt.hour(), 13);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn test_non_initial_reading_shifts_back_interval() {
        let dt = resolve_reading_time(fixed_now(), "12:00", 1).unwrap();
        assert_eq!(dt.day(), 28);
        assert_eq!(dt.hour(), 11);
        assert_eq!(dt.minute(), 45);
    }

    #[test]
    fn test_day_and_interval_corrections_stack() {
        // 13:00 > now, so minus one day; index 3, so minus 15 minutes too
        let dt = resolve_reading_time(fixed_now(), "13:00", 3).unwrap();
        assert_eq!(dt.day(), 27);
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.minute(), 45);
    }

    #[test]
    fn test_interval_shift_crosses_midnight() {
        let now = TIME_ZONE.with_ymd_and_hms(2025, 10, 28, 23, 50, 0).unwrap();
        let dt = resolve_reading_time(now, "00:05", 2).unwrap();
        // 00:05 today is before now, so no day shift; the interval shift
        // alone crosses back over midnight
        assert_eq!(dt.day(), 27);
        assert_eq!(dt.hour(), 23);
        assert_eq!(dt.minute(), 50);
    }

    #[test]
    fn test_invalid_times_rejected() {
        assert!(resolve_reading_time(fixed_now(), "25:00", 0).is_err());
        assert!(resolve_reading_time(fixed_now(), "noon", 0).is_err());
        assert!(resolve_reading_time(fixed_now(), "", 0).is_err());
    }

    // ========================================================================
    // exchange helpers
    // ========================================================================

    #[test]
    fn test_exchange_key_is_sorted() {
        let ax = ZoneKey::new("AX").unwrap();
        let fi = ZoneKey::new("FI").unwrap();
        assert_eq!(sorted_exchange_key(&ax, &fi), "AX->FI");
        assert_eq!(sorted_exchange_key(&fi, &ax), "AX->FI");
    }

    #[test]
    fn test_sweden_import_is_negative_along_key() {
        let ax = ZoneKey::new("AX").unwrap();
        let se = ZoneKey::new("SE-SE3").unwrap();
        let mut r = reading("12:00");
        r.sweden = 12.5;

        assert_eq!(exchange_net_flow(&r, &ax, &se).unwrap(), -12.5);
        assert_eq!(exchange_net_flow(&r, &se, &ax).unwrap(), -12.5);
    }

    #[test]
    fn test_finland_flow_sums_both_cables() {
        let ax = ZoneKey::new("AX").unwrap();
        let fi = ZoneKey::new("FI").unwrap();
        let mut r = reading("12:00");
        r.alink = 3.0;
        r.gustavs = 2.0;

        assert_eq!(exchange_net_flow(&r, &ax, &fi).unwrap(), -5.0);
    }

    #[test]
    fn test_export_is_positive_along_key() {
        let ax = ZoneKey::new("AX").unwrap();
        let fi = ZoneKey::new("FI").unwrap();
        let mut r = reading("12:00");
        r.alink = -4.0;

        assert_eq!(exchange_net_flow(&r, &ax, &fi).unwrap(), 4.0);
    }

    #[test]
    fn test_unmapped_pairs_rejected() {
        let ax = ZoneKey::new("AX").unwrap();
        let no = ZoneKey::new("NO").unwrap();
        let fi = ZoneKey::new("FI").unwrap();
        let r = reading("12:00");

        assert_eq!(
            exchange_net_flow(&r, &ax, &no),
            Err(ParserError::UnsupportedExchange("AX->NO".to_string()))
        );
        assert!(exchange_net_flow(&r, &fi, &no).is_err());
    }
}
