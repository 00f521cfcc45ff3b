//! Weather conditions attached to a zone

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current weather for a zone, always replaced as a whole
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClimateReading {
    pub temperature_celsius: Decimal,
    pub wind_speed_mps: Decimal,
    pub humidity_percent: Decimal,
}

impl ClimateReading {
    pub fn new(temperature_celsius: Decimal, wind_speed_mps: Decimal, humidity_percent: Decimal) -> Self {
        Self {
            temperature_celsius,
            wind_speed_mps,
            humidity_percent,
        }
    }
}
