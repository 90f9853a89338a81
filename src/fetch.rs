//! Fetch collaborator seam
//!
//! The formatter never talks to the network itself: it asks a
//! [`ReadingSource`] for the full raw reading list, exactly once per call.
//! Transport, sessions, retries and backoff are entirely the source's
//! concern. This module also provides the payload decoder for the feed's
//! JSON wire shape, and a canned source for deterministic use.

use crate::error::ParserError;
use crate::types::RawReading;

/// Data source delivering the raw reading list
///
/// Implementors own their session state; a failed fetch surfaces as
/// [`ParserError::Fetch`] and aborts the formatting call.
pub trait ReadingSource {
    /// Fetch the full reading list, fully materialized
    fn fetch(&self) -> Result<Vec<RawReading>, ParserError>;
}

/// Canned source returning a fixed reading list
///
/// The deterministic counterpart to a live feed, for tests and replay.
#[derive(Debug, Clone, Default)]
pub struct FixedReadings {
    readings: Vec<RawReading>,
}

impl FixedReadings {
    pub fn new(readings: Vec<RawReading>) -> Self {
        Self { readings }
    }

    /// Build a canned source straight from a JSON payload
    pub fn from_json(payload: &str) -> Result<Self, ParserError> {
        Ok(Self::new(parse_readings_json(payload)?))
    }
}

impl ReadingSource for FixedReadings {
    fn fetch(&self) -> Result<Vec<RawReading>, ParserError> {
        Ok(self.readings.clone())
    }
}

/// Parse the feed's JSON payload into raw readings
///
/// # Payload format
///
/// Array of objects, one per sample:
/// ```json
/// [
///   {"time":"12:00","wind":10.0,"fossil":5.0,"consumption":42.5,
///    "sweden":12.5,"alink":3.0,"gustavs":2.0}
/// ]
/// ```
///
/// Absent numeric fields read as zero; `time` is required.
///
/// # Returns
///
/// * `Ok(Vec<RawReading>)` - Decoded readings, possibly empty
/// * `Err(ParserError::Payload)` - Malformed JSON or a missing `time` field
///
/// # Example
///
/// ```
/// # use aland_grid_parser::fetch::parse_readings_json;
/// let payload = r#"[{"time":"12:00","wind":10.0,"fossil":5.0}]"#;
/// let readings = parse_readings_json(payload).unwrap();
/// assert_eq!(readings.len(), 1);
/// assert_eq!(readings[0].wind, 10.0);
/// assert_eq!(readings[0].sweden, 0.0);
/// ```
pub fn parse_readings_json(payload: &str) -> Result<Vec<RawReading>, ParserError> {
    serde_json::from_str(payload)
        .map_err(|e| ParserError::Payload(format!("failed to decode reading list: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_readings_json_full_row() {
        let payload = r#"[
  {"time":"12:00","wind":10.0,"fossil":5.0,"consumption":42.5,"sweden":12.5,"alink":3.0,"gustavs":2.0},
  {"time":"12:15","wind":11.0,"fossil":4.5,"consumption":41.0,"sweden":11.0,"alink":2.5,"gustavs":2.0}
]"#;

        let readings = parse_readings_json(payload).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].time, "12:00");
        assert_eq!(readings[0].consumption, 42.5);
        assert_eq!(readings[1].time, "12:15");
        assert_eq!(readings[1].sweden, 11.0);
    }

    #[test]
    fn test_parse_readings_json_empty_array() {
        assert_eq!(parse_readings_json("[]").unwrap().len(), 0);
    }

    #[test]
    fn test_parse_readings_json_invalid() {
        assert!(parse_readings_json("not json").is_err());
        // `time` has no default
        assert!(parse_readings_json(r#"[{"wind":1.0}]"#).is_err());
    }

    #[test]
    fn test_fixed_readings_round_trip() {
        let source =
            FixedReadings::from_json(r#"[{"time":"12:00","wind":3.0}]"#).unwrap();
        let readings = source.fetch().unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].wind, 3.0);
    }
}
