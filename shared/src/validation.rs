//! Validation utilities for readings entered by hand or loaded from disk
//!
//! The metrics engine assumes its inputs passed these checks.

use rust_decimal::Decimal;

use crate::models::ClimateReading;
use crate::types::{Pollutant, HISTORY_DAYS};

/// Inclusive range of accepted values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl InputRange {
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const TEMPERATURE_RANGE: InputRange = InputRange::new(
    Decimal::from_parts(50, 0, 0, true, 0),
    Decimal::from_parts(60, 0, 0, false, 0),
);
pub const WIND_SPEED_RANGE: InputRange =
    InputRange::new(Decimal::ZERO, Decimal::from_parts(60, 0, 0, false, 0));
pub const HUMIDITY_RANGE: InputRange = InputRange::new(Decimal::ZERO, Decimal::ONE_HUNDRED);

pub fn concentration_range(pollutant: Pollutant) -> InputRange {
    InputRange::new(Decimal::ZERO, pollutant.max_plausible())
}

// ============================================================================
// Climate Validations
// ============================================================================

/// Validate air temperature (-50 to 60 °C)
pub fn validate_temperature(temperature: Decimal) -> Result<(), &'static str> {
    if !TEMPERATURE_RANGE.contains(temperature) {
        return Err("Temperature must be between -50 and 60 °C");
    }
    Ok(())
}

/// Validate wind speed (0 to 60 m/s)
pub fn validate_wind_speed(wind_speed: Decimal) -> Result<(), &'static str> {
    if !WIND_SPEED_RANGE.contains(wind_speed) {
        return Err("Wind speed must be between 0 and 60 m/s");
    }
    Ok(())
}

pub fn validate_humidity(humidity: Decimal) -> Result<(), &'static str> {
    if !HUMIDITY_RANGE.contains(humidity) {
        return Err("Humidity must be between 0 and 100%");
    }
    Ok(())
}

pub fn validate_climate(climate: &ClimateReading) -> Result<(), &'static str> {
    validate_temperature(climate.temperature_celsius)?;
    validate_wind_speed(climate.wind_speed_mps)?;
    validate_humidity(climate.humidity_percent)?;
    Ok(())
}

// ============================================================================
// Reading Validations
// ============================================================================

/// Validate a pollutant concentration is non-negative and plausible
pub fn validate_concentration(pollutant: Pollutant, value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO {
        return Err("Concentration cannot be negative");
    }
    if value > pollutant.max_plausible() {
        return Err("Concentration is above the plausible maximum");
    }
    Ok(())
}

/// Validate a 1-based history day number
pub fn validate_day(day: usize) -> Result<(), &'static str> {
    if day == 0 || day > HISTORY_DAYS {
        return Err("Day must be between 1 and 30");
    }
    Ok(())
}
