//! Data structures for AX grid readings and formatted records
//!
//! `RawReading` mirrors one entry of the feed payload wholesale; the three
//! record structs are the shapes handed to the output collectors, one per
//! requested data kind.

use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::ParserError;

/// Which of the three output record shapes a call produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    /// Production breakdown per source (wind, oil)
    Production,
    /// Total zone consumption
    Consumption,
    /// Net interconnector flow for a zone pair
    Exchange,
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            DataKind::Production => "production",
            DataKind::Consumption => "consumption",
            DataKind::Exchange => "exchange",
        };
        write!(f, "{}", kind)
    }
}

impl FromStr for DataKind {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(DataKind::Production),
            "consumption" => Ok(DataKind::Consumption),
            "exchange" => Ok(DataKind::Exchange),
            other => Err(ParserError::Payload(format!(
                "unknown data kind '{}' (expected production, consumption or exchange)",
                other
            ))),
        }
    }
}

/// Validated electrical zone identifier
///
/// Identifiers follow the electricitymap convention: uppercase ASCII
/// letters and digits, optionally hyphen-separated ("AX", "SE-SE3").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneKey(String);

impl ZoneKey {
    /// Construct a zone key, rejecting malformed identifiers
    ///
    /// # Examples
    ///
    /// ```
    /// # use aland_grid_parser::ZoneKey;
    /// assert!(ZoneKey::new("AX").is_ok());
    /// assert!(ZoneKey::new("SE-SE3").is_ok());
    /// assert!(ZoneKey::new("").is_err());
    /// assert!(ZoneKey::new("ax zone").is_err());
    /// ```
    pub fn new(key: &str) -> Result<Self, ParserError> {
        let valid = !key.is_empty()
            && !key.starts_with('-')
            && !key.ends_with('-')
            && key
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-');

        if valid {
            Ok(ZoneKey(key.to_string()))
        } else {
            Err(ParserError::InvalidZoneKey(key.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ZoneKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One raw reading from the Kraftnät Åland feed
///
/// Supplied wholesale by the fetch collaborator and discarded after
/// formatting. `time` carries only "HH:MM"; the date is resolved against
/// the zone clock. Flow magnitudes are zero when not applicable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawReading {
    /// Time of day of the sample, "HH:MM", no date
    pub time: String,

    /// Wind production in MW
    #[serde(default)]
    pub wind: f64,

    /// Fossil (oil-fired reserve) production in MW
    #[serde(default)]
    pub fossil: f64,

    /// Total zone consumption in MW
    #[serde(default)]
    pub consumption: f64,

    /// Flow on the Sweden interconnector in MW (positive = import into AX)
    #[serde(default)]
    pub sweden: f64,

    /// Flow on the ÅL-link cable to Finland in MW (positive = import into AX)
    #[serde(default)]
    pub alink: f64,

    /// Flow on the Gustavs cable to Finland in MW (positive = import into AX)
    #[serde(default)]
    pub gustavs: f64,
}

/// Production breakdown per source for one corrected timestamp
///
/// The feed's `fossil` value maps to `oil`: the zone's only fossil
/// capacity is the oil-fired reserve plant in Mariehamn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductionBreakdown {
    pub wind: f64,
    pub oil: f64,
}

/// One production breakdown event
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionRecord {
    pub datetime: DateTime<Tz>,
    pub production: ProductionBreakdown,
    pub source: String,
    pub zone_key: ZoneKey,
}

/// One total consumption event
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionRecord {
    pub datetime: DateTime<Tz>,
    /// Total consumption in MW
    pub consumption: f64,
    pub source: String,
    pub zone_key: ZoneKey,
}

/// One net exchange flow event
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRecord {
    pub datetime: DateTime<Tz>,
    /// Net flow in MW, oriented from the first to the second zone of
    /// `sorted_zone_key` (positive = flow in key order)
    pub net_flow: f64,
    pub source: String,
    /// Alphabetically sorted pair, "A->B"
    pub sorted_zone_key: String,
}

/// A formatted record of whichever kind the call requested
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedRecord {
    Production(ProductionRecord),
    Consumption(ConsumptionRecord),
    Exchange(ExchangeRecord),
}

impl FormattedRecord {
    /// Corrected timestamp of the underlying record
    pub fn datetime(&self) -> DateTime<Tz> {
        match self {
            FormattedRecord::Production(r) => r.datetime,
            FormattedRecord::Consumption(r) => r.datetime,
            FormattedRecord::Exchange(r) => r.datetime,
        }
    }
}
