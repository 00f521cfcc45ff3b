//! Metrics engine: averages, recency-weighted prediction and climate adjustment
//!
//! All functions are pure over their inputs; the `compute_*` helpers write
//! their results into the zone's derived figures.

use rust_decimal::Decimal;

use crate::models::{ClimateReading, DerivedFigures, Zone};
use crate::types::Pollutant;

/// Wind at or above this disperses pollutants (m/s)
pub const DISPERSION_WIND_MPS: Decimal = Decimal::from_parts(40, 0, 0, false, 1);
pub const DISPERSION_FACTOR: Decimal = Decimal::from_parts(92, 0, 0, false, 2);

/// Calm wind below this combined with high humidity traps pollutants (m/s)
pub const STAGNATION_WIND_MPS: Decimal = Decimal::from_parts(15, 0, 0, false, 1);
pub const STAGNATION_HUMIDITY_PERCENT: Decimal = Decimal::from_parts(750, 0, 0, false, 1);
pub const STAGNATION_FACTOR: Decimal = Decimal::from_parts(108, 0, 0, false, 2);

/// Temperature at or below this is treated as a thermal inversion (°C)
pub const INVERSION_TEMPERATURE_CELSIUS: Decimal = Decimal::from_parts(120, 0, 0, false, 1);
pub const INVERSION_FACTOR: Decimal = Decimal::from_parts(105, 0, 0, false, 2);

/// Arithmetic mean; zero for an empty slice
pub fn plain_average(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    values.iter().sum::<Decimal>() / Decimal::from(values.len())
}

/// Mean of the last `window` values weighted 1, 2, 3, ... towards the most recent
pub fn weighted_recency_average(values: &[Decimal], window: usize) -> Decimal {
    let take = window.min(values.len());
    if take == 0 {
        return Decimal::ZERO;
    }

    let recent = &values[values.len() - take..];
    let (weighted_sum, weight_total) = recent
        .iter()
        .zip(1u32..)
        .fold((Decimal::ZERO, Decimal::ZERO), |(sum, total), (value, weight)| {
            let weight = Decimal::from(weight);
            (sum + *value * weight, total + weight)
        });

    weighted_sum / weight_total
}

/// Apply the wind, stagnation and inversion factors that hold for `climate`
///
/// Each condition is checked against the unmodified reading and compounds
/// onto the running value in that order.
pub fn adjust_for_climate(value: Decimal, climate: &ClimateReading) -> Decimal {
    let mut adjusted = value;

    if climate.wind_speed_mps >= DISPERSION_WIND_MPS {
        adjusted *= DISPERSION_FACTOR;
    }
    if climate.wind_speed_mps < STAGNATION_WIND_MPS
        && climate.humidity_percent >= STAGNATION_HUMIDITY_PERCENT
    {
        adjusted *= STAGNATION_FACTOR;
    }
    if climate.temperature_celsius <= INVERSION_TEMPERATURE_CELSIUS {
        adjusted *= INVERSION_FACTOR;
    }

    adjusted
}

/// Refresh `actual` and `average_30d` for every pollutant
pub fn compute_current_and_average(zone: &mut Zone) {
    for pollutant in Pollutant::ALL {
        let figures = DerivedFigures {
            actual: zone.current(pollutant),
            average_30d: plain_average(zone.history(pollutant)),
            ..zone.derived(pollutant)
        };
        zone.set_derived(pollutant, figures);
    }
}

/// Refresh `predicted_24h` for every pollutant
pub fn compute_prediction(zone: &mut Zone, window: usize) {
    let climate = zone.climate();
    for pollutant in Pollutant::ALL {
        let baseline = weighted_recency_average(zone.history(pollutant), window);
        let figures = DerivedFigures {
            predicted_24h: adjust_for_climate(baseline, &climate),
            ..zone.derived(pollutant)
        };
        zone.set_derived(pollutant, figures);
    }
}

pub fn recompute(zone: &mut Zone, window: usize) {
    compute_current_and_average(zone);
    compute_prediction(zone, window);
}
