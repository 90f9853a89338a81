//! Error types for the AX grid parser
//!
//! Covers every failure mode of the adapter:
//! - Missing zone identifiers for the requested output kind
//! - Timestamp resolution failures ("HH:MM" parsing, nonexistent local times)
//! - Payload decoding and fetch collaborator failures

use std::fmt;

use crate::types::DataKind;

/// Parser-level error for the AX adapter
///
/// The only error the core formatting loop raises itself is
/// `MissingZoneKey`; the remaining variants come from the seams around it
/// (clock math, payload decoding, the fetch collaborator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    /// Required zone identifier is absent for the requested data kind
    ///
    /// Production and consumption require the zone key; exchange requires
    /// both zones of the pair. Raised before any record is collected, and
    /// aborts the whole call.
    MissingZoneKey(DataKind),

    /// Zone identifier rejected at construction
    ///
    /// Example: "" or "ax zone" (only uppercase ASCII, digits and hyphens
    /// are accepted)
    InvalidZoneKey(String),

    /// Reading time could not be resolved against the zone clock
    ///
    /// Example: "25:00", or a wall-clock time skipped by a DST transition
    InvalidTime(String),

    /// Zone pair has no mapped interconnector fields
    ///
    /// Example: "AX->NO" (only the Sweden and Finland links exist)
    UnsupportedExchange(String),

    /// Raw payload is not a valid reading list
    Payload(String),

    /// Fetch collaborator failed to deliver the reading list
    Fetch(String),
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::MissingZoneKey(kind) => {
                write!(f, "Missing required zone key for data kind '{}'", kind)
            }
            ParserError::InvalidZoneKey(key) => {
                write!(
                    f,
                    "Invalid zone key: '{}' (expected uppercase letters, digits or hyphens)",
                    key
                )
            }
            ParserError::InvalidTime(val) => {
                write!(f, "Invalid reading time: '{}' (expected HH:MM)", val)
            }
            ParserError::UnsupportedExchange(pair) => {
                write!(f, "No interconnector mapping for zone pair '{}'", pair)
            }
            ParserError::Payload(msg) => {
                write!(f, "Invalid reading payload: {}", msg)
            }
            ParserError::Fetch(msg) => {
                write!(f, "Fetch failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for ParserError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_zone_key_formatting() {
        let err = ParserError::MissingZoneKey(DataKind::Production);
        let msg = format!("{}", err);
        assert!(msg.contains("Missing required zone key"));
        assert!(msg.contains("production"));
    }

    #[test]
    fn test_invalid_time_formatting() {
        let err = ParserError::InvalidTime("25:00".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("25:00"));
        assert!(msg.contains("HH:MM"));
    }

    #[test]
    fn test_unsupported_exchange_formatting() {
        let err = ParserError::UnsupportedExchange("AX->NO".to_string());
        assert!(format!("{}", err).contains("AX->NO"));
    }
}
