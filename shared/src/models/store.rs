//! In-memory store for the five fixed zones

use rust_decimal::Decimal;

use crate::error::DomainError;
use crate::metrics;
use crate::models::{ClimateReading, DerivedFigures, History, Zone};
use crate::types::{Pollutant, ZoneId, ZONE_COUNT};

/// Owns exactly one record per [`ZoneId`], in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneStore {
    zones: [Zone; ZONE_COUNT],
}

impl Default for ZoneStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneStore {
    pub fn new() -> Self {
        Self {
            zones: ZoneId::ALL.map(Zone::new),
        }
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone(&self, id: ZoneId) -> &Zone {
        &self.zones[id.index()]
    }

    pub fn zone_mut(&mut self, id: ZoneId) -> &mut Zone {
        &mut self.zones[id.index()]
    }

    /// Exact name match, as used when loading persisted rows
    pub fn find_by_name(&self, name: &str) -> Option<ZoneId> {
        self.zones
            .iter()
            .map(Zone::id)
            .find(|id| id.name() == name)
    }

    pub fn history(&self, id: ZoneId, pollutant: Pollutant) -> &History {
        self.zone(id).history(pollutant)
    }

    pub fn climate(&self, id: ZoneId) -> ClimateReading {
        self.zone(id).climate()
    }

    pub fn set_climate(&mut self, id: ZoneId, climate: ClimateReading) {
        self.zone_mut(id).set_climate(climate);
    }

    pub fn set_current_reading(&mut self, id: ZoneId, pollutant: Pollutant, value: Decimal) {
        self.zone_mut(id).set_current_reading(pollutant, value);
    }

    /// Write one history slot addressed by 1-based day
    pub fn set_day(
        &mut self,
        id: ZoneId,
        pollutant: Pollutant,
        day: usize,
        value: Decimal,
    ) -> Result<(), DomainError> {
        self.zone_mut(id).set_day(pollutant, day, value)
    }

    pub fn set_derived(&mut self, id: ZoneId, pollutant: Pollutant, figures: DerivedFigures) {
        self.zone_mut(id).set_derived(pollutant, figures);
    }

    /// Refresh derived figures of every zone
    pub fn recompute_all(&mut self, window: usize) {
        for zone in self.zones.iter_mut() {
            metrics::recompute(zone, window);
        }
    }
}
