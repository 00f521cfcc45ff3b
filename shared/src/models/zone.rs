//! Zone records: reading history, climate and derived figures

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::models::ClimateReading;
use crate::types::{Pollutant, ZoneId, CURRENT_SLOT, HISTORY_DAYS, POLLUTANT_COUNT};

/// Daily readings for one pollutant, oldest first
pub type History = [Decimal; HISTORY_DAYS];

/// Figures computed from a zone's history and climate
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DerivedFigures {
    /// Most recent reading (history slot 30)
    pub actual: Decimal,
    /// Mean of the full 30-day history
    pub average_30d: Decimal,
    /// Climate-adjusted weighted recency average
    pub predicted_24h: Decimal,
}

/// One monitored zone
///
/// Derived figures are only valid after a recompute following the last
/// history or climate change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    id: ZoneId,
    history: [History; POLLUTANT_COUNT],
    climate: ClimateReading,
    derived: [DerivedFigures; POLLUTANT_COUNT],
}

impl Zone {
    /// Create a zone with zeroed history and climate
    pub fn new(id: ZoneId) -> Self {
        Self {
            id,
            history: [[Decimal::ZERO; HISTORY_DAYS]; POLLUTANT_COUNT],
            climate: ClimateReading::default(),
            derived: [DerivedFigures::default(); POLLUTANT_COUNT],
        }
    }

    pub fn id(&self) -> ZoneId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn history(&self, pollutant: Pollutant) -> &History {
        &self.history[pollutant.index()]
    }

    pub fn set_history(&mut self, pollutant: Pollutant, history: History) {
        self.history[pollutant.index()] = history;
    }

    /// Value in the most recent slot
    pub fn current(&self, pollutant: Pollutant) -> Decimal {
        self.history[pollutant.index()][CURRENT_SLOT]
    }

    /// Overwrite the most recent slot in place; older days are untouched
    pub fn set_current_reading(&mut self, pollutant: Pollutant, value: Decimal) {
        self.history[pollutant.index()][CURRENT_SLOT] = value;
    }

    /// Set a reading by 1-based day number (day 30 is the current slot)
    pub fn set_day(&mut self, pollutant: Pollutant, day: usize, value: Decimal) -> Result<(), DomainError> {
        if !(1..=HISTORY_DAYS).contains(&day) {
            return Err(DomainError::DayOutOfRange(day));
        }
        self.history[pollutant.index()][day - 1] = value;
        Ok(())
    }

    pub fn climate(&self) -> ClimateReading {
        self.climate
    }

    pub fn set_climate(&mut self, climate: ClimateReading) {
        self.climate = climate;
    }

    pub fn derived(&self, pollutant: Pollutant) -> DerivedFigures {
        self.derived[pollutant.index()]
    }

    pub fn set_derived(&mut self, pollutant: Pollutant, figures: DerivedFigures) {
        self.derived[pollutant.index()] = figures;
    }
}
