//! Common types used across the platform

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Number of daily readings kept per pollutant per zone
pub const HISTORY_DAYS: usize = 30;

/// Index of the most recent ("current") history slot
pub const CURRENT_SLOT: usize = HISTORY_DAYS - 1;

/// Number of days the 24h prediction looks back over
pub const DEFAULT_PREDICTION_WINDOW: usize = 7;

pub const POLLUTANT_COUNT: usize = 4;
pub const ZONE_COUNT: usize = 5;

/// Tracked air pollutants, in fixed reporting order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Pollutant {
    /// Fine particulate matter (µg/m³)
    Pm25,
    /// Nitrogen dioxide (µg/m³)
    No2,
    /// Sulphur dioxide (µg/m³)
    So2,
    /// Carbon dioxide (ppm)
    Co2,
}

impl Pollutant {
    pub const ALL: [Pollutant; POLLUTANT_COUNT] =
        [Pollutant::Pm25, Pollutant::No2, Pollutant::So2, Pollutant::Co2];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Reference threshold the alert levels are derived from
    pub fn threshold(self) -> Decimal {
        match self {
            Pollutant::Pm25 => Decimal::new(150, 1),
            Pollutant::No2 => Decimal::new(400, 1),
            Pollutant::So2 => Decimal::new(400, 1),
            Pollutant::Co2 => Decimal::new(10000, 1),
        }
    }

    /// Highest concentration accepted as input
    pub fn max_plausible(self) -> Decimal {
        match self {
            Pollutant::Pm25 => Decimal::from(1000),
            Pollutant::No2 => Decimal::from(2000),
            Pollutant::So2 => Decimal::from(2000),
            Pollutant::Co2 => Decimal::from(10000),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::No2 => "NO2",
            Pollutant::So2 => "SO2",
            Pollutant::Co2 => "CO2",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Pollutant::Co2 => "ppm",
            _ => "µg/m³",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The five fixed city zones
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZoneId {
    Central,
    North,
    South,
    East,
    West,
}

impl ZoneId {
    pub const ALL: [ZoneId; ZONE_COUNT] = [
        ZoneId::Central,
        ZoneId::North,
        ZoneId::South,
        ZoneId::East,
        ZoneId::West,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Exact identifier used in the data file
    pub fn name(&self) -> &'static str {
        match self {
            ZoneId::Central => "Central",
            ZoneId::North => "North",
            ZoneId::South => "South",
            ZoneId::East => "East",
            ZoneId::West => "West",
        }
    }

    /// Case-insensitive lookup for interactive input
    pub fn from_name_ignore_case(name: &str) -> Option<ZoneId> {
        let name = name.trim();
        ZoneId::ALL
            .into_iter()
            .find(|zone| zone.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZoneId {
    type Err = DomainError;

    /// Exact, case-sensitive match as required by the data file format
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZoneId::ALL
            .into_iter()
            .find(|zone| zone.name() == s)
            .ok_or_else(|| DomainError::UnknownZone(s.to_string()))
    }
}
