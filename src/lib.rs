//! Production, consumption and exchange parser for the Åland Islands (AX)
//! electrical zone
//!
//! The Kraftnät Åland feed delivers time-stamped readings carrying only a
//! "HH:MM" time of day. This crate resolves those ambiguous timestamps
//! against an injectable zone clock (Europe/Mariehamn) and reformats each
//! reading into one of three record shapes: production breakdown, total
//! consumption, or net interconnector flow.
//!
//! # Features
//! - Timestamp disambiguation with midnight-crossing handling
//! - Three typed entry points (`fetch_production`, `fetch_consumption`,
//!   `fetch_exchange`) over one shared formatting pass
//! - Injectable clock and fetch collaborator for deterministic tests
//! - Fail-fast zone-key validation (no partial results)
//!
//! # Example
//!
//! ```
//! use aland_grid_parser::{fetch_production, FixedClock, FixedReadings, ZoneKey};
//!
//! let source = FixedReadings::from_json(
//!     r#"[{"time":"12:00","wind":10.0,"fossil":5.0}]"#,
//! )?;
//! let clock = FixedClock::at(2025, 10, 28, 12, 34);
//! let zone = ZoneKey::new("AX")?;
//!
//! let records = fetch_production(&zone, &source, &clock)?;
//! assert_eq!(records[0].production.wind, 10.0);
//! # Ok::<(), aland_grid_parser::ParserError>(())
//! ```

pub mod clock;
pub mod collectors;
mod error;
pub mod fetch;
pub mod parser;
pub mod transformations;
mod types;

pub use clock::{Clock, FixedClock, SystemClock, TIME_ZONE};
pub use collectors::{ExchangeList, ProductionBreakdownList, TotalConsumptionList};
pub use error::ParserError;
pub use fetch::{FixedReadings, ReadingSource};
pub use parser::{fetch_consumption, fetch_exchange, fetch_production, formatted_data, SOURCE};
pub use types::{
    ConsumptionRecord, DataKind, ExchangeRecord, FormattedRecord, ProductionBreakdown,
    ProductionRecord, RawReading, ZoneKey,
};
