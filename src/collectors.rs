//! Append-then-drain collectors for formatted records
//!
//! One sink per output kind. The formatter only relies on append order
//! being preserved; each collector is created fresh per call and drained
//! once at the end.

use chrono::DateTime;
use chrono_tz::Tz;
use tracing::debug;

use crate::types::{
    ConsumptionRecord, ExchangeRecord, ProductionBreakdown, ProductionRecord, ZoneKey,
};

/// Collector for production breakdown events
#[derive(Debug, Default)]
pub struct ProductionBreakdownList {
    events: Vec<ProductionRecord>,
}

impl ProductionBreakdownList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(
        &mut self,
        datetime: DateTime<Tz>,
        production: ProductionBreakdown,
        source: &str,
        zone_key: ZoneKey,
    ) {
        debug!(
            %datetime,
            wind = production.wind,
            oil = production.oil,
            zone = %zone_key,
            "collected production breakdown"
        );
        self.events.push(ProductionRecord {
            datetime,
            production,
            source: source.to_string(),
            zone_key,
        });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drain the collected events in append order
    pub fn into_vec(self) -> Vec<ProductionRecord> {
        self.events
    }
}

/// Collector for total consumption events
#[derive(Debug, Default)]
pub struct TotalConsumptionList {
    events: Vec<ConsumptionRecord>,
}

impl TotalConsumptionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(
        &mut self,
        datetime: DateTime<Tz>,
        consumption: f64,
        source: &str,
        zone_key: ZoneKey,
    ) {
        debug!(%datetime, consumption, zone = %zone_key, "collected consumption");
        self.events.push(ConsumptionRecord {
            datetime,
            consumption,
            source: source.to_string(),
            zone_key,
        });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_vec(self) -> Vec<ConsumptionRecord> {
        self.events
    }
}

/// Collector for net exchange flow events
#[derive(Debug, Default)]
pub struct ExchangeList {
    events: Vec<ExchangeRecord>,
}

impl ExchangeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(
        &mut self,
        datetime: DateTime<Tz>,
        net_flow: f64,
        source: &str,
        sorted_zone_key: String,
    ) {
        debug!(%datetime, net_flow, key = %sorted_zone_key, "collected exchange flow");
        self.events.push(ExchangeRecord {
            datetime,
            net_flow,
            source: source.to_string(),
            sorted_zone_key,
        });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_vec(self) -> Vec<ExchangeRecord> {
        self.events
    }
}
