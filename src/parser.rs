//! Reading formatter for the AX zone
//!
//! Single-pass transform over the fetched reading list: resolve each
//! reading's timestamp against "now", then dispatch it into the collector
//! the requested data kind selects. The first missing-zone-key violation
//! aborts the whole call; there is no partial-success mode.

use tracing::debug;

use crate::clock::Clock;
use crate::collectors::{ExchangeList, ProductionBreakdownList, TotalConsumptionList};
use crate::error::ParserError;
use crate::fetch::ReadingSource;
use crate::transformations::{exchange_net_flow, resolve_reading_time, sorted_exchange_key};
use crate::types::{
    ConsumptionRecord, DataKind, ExchangeRecord, FormattedRecord, ProductionBreakdown,
    ProductionRecord, ZoneKey,
};

/// Attribution carried on every formatted record
pub const SOURCE: &str = "kraftnat.aland.fi";

/// Output target with its required zone identifiers already validated
#[derive(Clone, Copy)]
enum Target<'a> {
    Production(&'a ZoneKey),
    Consumption(&'a ZoneKey),
    Exchange(&'a ZoneKey, &'a ZoneKey),
}

impl<'a> Target<'a> {
    /// Bind the zone arguments the kind requires, or fail the whole call
    fn resolve(
        kind: DataKind,
        zone_key: Option<&'a ZoneKey>,
        zone_key1: Option<&'a ZoneKey>,
        zone_key2: Option<&'a ZoneKey>,
    ) -> Result<Self, ParserError> {
        match kind {
            DataKind::Production => zone_key
                .map(Target::Production)
                .ok_or(ParserError::MissingZoneKey(kind)),
            DataKind::Consumption => zone_key
                .map(Target::Consumption)
                .ok_or(ParserError::MissingZoneKey(kind)),
            DataKind::Exchange => zone_key1
                .zip(zone_key2)
                .map(|(a, b)| Target::Exchange(a, b))
                .ok_or(ParserError::MissingZoneKey(kind)),
        }
    }
}

/// Format the fetched reading list into records of the requested kind
///
/// "Now" is taken once from the injected clock; the source is invoked
/// exactly once and its result fully materialized before processing.
///
/// # Arguments
///
/// * `zone_key` - Zone of the production/consumption records; required for
///   those kinds, unused for exchange
/// * `zone_key1`, `zone_key2` - Zone pair defining the exchange flow;
///   required for exchange, unused otherwise
/// * `source` - Fetch collaborator delivering the raw readings
/// * `clock` - "Now" provider in the zone's time zone
/// * `kind` - Which output record shape to produce
///
/// # Returns
///
/// * `Ok(Vec<FormattedRecord>)` - Records of the requested kind, in feed
///   order
/// * `Err(ParserError::MissingZoneKey)` - A required zone identifier was
///   absent; nothing is returned for the call
pub fn formatted_data<S, C>(
    zone_key: Option<&ZoneKey>,
    zone_key1: Option<&ZoneKey>,
    zone_key2: Option<&ZoneKey>,
    source: &S,
    clock: &C,
    kind: DataKind,
) -> Result<Vec<FormattedRecord>, ParserError>
where
    S: ReadingSource + ?Sized,
    C: Clock + ?Sized,
{
    // Required identifiers are validated before any reading is touched, so
    // a missing key aborts even for an empty feed.
    let target = Target::resolve(kind, zone_key, zone_key1, zone_key2)?;

    let now = clock.now();
    let readings = source.fetch()?;
    debug!(count = readings.len(), %kind, "formatting fetched readings");

    let mut production = ProductionBreakdownList::new();
    let mut consumption = TotalConsumptionList::new();
    let mut exchange = ExchangeList::new();

    for (index, reading) in readings.iter().enumerate() {
        let corrected = resolve_reading_time(now, &reading.time, index)?;

        match target {
            Target::Production(zone) => {
                production.append(
                    corrected,
                    ProductionBreakdown {
                        wind: reading.wind,
                        oil: reading.fossil,
                    },
                    SOURCE,
                    zone.clone(),
                );
            }
            Target::Consumption(zone) => {
                consumption.append(corrected, reading.consumption, SOURCE, zone.clone());
            }
            Target::Exchange(zone1, zone2) => {
                let net_flow = exchange_net_flow(reading, zone1, zone2)?;
                exchange.append(corrected, net_flow, SOURCE, sorted_exchange_key(zone1, zone2));
            }
        }
    }

    let records = match kind {
        DataKind::Production => production
            .into_vec()
            .into_iter()
            .map(FormattedRecord::Production)
            .collect(),
        DataKind::Consumption => consumption
            .into_vec()
            .into_iter()
            .map(FormattedRecord::Consumption)
            .collect(),
        DataKind::Exchange => exchange
            .into_vec()
            .into_iter()
            .map(FormattedRecord::Exchange)
            .collect(),
    };

    Ok(records)
}

/// Fetch and format the production breakdown for a zone
pub fn fetch_production<S, C>(
    zone_key: &ZoneKey,
    source: &S,
    clock: &C,
) -> Result<Vec<ProductionRecord>, ParserError>
where
    S: ReadingSource + ?Sized,
    C: Clock + ?Sized,
{
    let records = formatted_data(Some(zone_key), None, None, source, clock, DataKind::Production)?;
    Ok(records
        .into_iter()
        .filter_map(|r| match r {
            FormattedRecord::Production(p) => Some(p),
            _ => None,
        })
        .collect())
}

/// Fetch and format the total consumption for a zone
pub fn fetch_consumption<S, C>(
    zone_key: &ZoneKey,
    source: &S,
    clock: &C,
) -> Result<Vec<ConsumptionRecord>, ParserError>
where
    S: ReadingSource + ?Sized,
    C: Clock + ?Sized,
{
    let records = formatted_data(
        Some(zone_key),
        None,
        None,
        source,
        clock,
        DataKind::Consumption,
    )?;
    Ok(records
        .into_iter()
        .filter_map(|r| match r {
            FormattedRecord::Consumption(c) => Some(c),
            _ => None,
        })
        .collect())
}

/// Fetch and format the net exchange flow for a zone pair
pub fn fetch_exchange<S, C>(
    zone_key1: &ZoneKey,
    zone_key2: &ZoneKey,
    source: &S,
    clock: &C,
) -> Result<Vec<ExchangeRecord>, ParserError>
where
    S: ReadingSource + ?Sized,
    C: Clock + ?Sized,
{
    let records = formatted_data(
        None,
        Some(zone_key1),
        Some(zone_key2),
        source,
        clock,
        DataKind::Exchange,
    )?;
    Ok(records
        .into_iter()
        .filter_map(|r| match r {
            FormattedRecord::Exchange(e) => Some(e),
            _ => None,
        })
        .collect())
}
