//! Per-zone assessments combining derived figures with alert levels

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{classify, recommendation_for, worst_of, AlertLevel, ClimateReading, Zone, ZoneStore};
use crate::types::{Pollutant, ZoneId};

/// Figures and levels for one pollutant in one zone
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PollutantAssessment {
    pub pollutant: Pollutant,
    pub threshold: Decimal,
    pub actual: Decimal,
    pub actual_level: AlertLevel,
    pub average_30d: Decimal,
    pub average_level: AlertLevel,
    pub predicted_24h: Decimal,
    pub predicted_level: AlertLevel,
    /// Level shown when actual and predicted are reported together
    pub combined_level: AlertLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZoneAssessment {
    pub zone: ZoneId,
    pub climate: ClimateReading,
    pub pollutants: Vec<PollutantAssessment>,
    /// Most severe combined level across pollutants
    pub overall_level: AlertLevel,
    pub recommendation: String,
}

/// Assess a zone from its current derived figures
///
/// Callers are expected to recompute the zone first.
pub fn assess_zone(zone: &Zone) -> ZoneAssessment {
    let pollutants: Vec<PollutantAssessment> = Pollutant::ALL
        .into_iter()
        .map(|pollutant| {
            let figures = zone.derived(pollutant);
            let threshold = pollutant.threshold();
            let actual_level = classify(figures.actual, threshold);
            let predicted_level = classify(figures.predicted_24h, threshold);
            PollutantAssessment {
                pollutant,
                threshold,
                actual: figures.actual,
                actual_level,
                average_30d: figures.average_30d,
                average_level: classify(figures.average_30d, threshold),
                predicted_24h: figures.predicted_24h,
                predicted_level,
                combined_level: worst_of(actual_level, predicted_level),
            }
        })
        .collect();

    let overall_level = pollutants
        .iter()
        .map(|p| p.combined_level)
        .max()
        .unwrap_or(AlertLevel::Normal);

    ZoneAssessment {
        zone: zone.id(),
        climate: zone.climate(),
        pollutants,
        overall_level,
        recommendation: recommendation_for(overall_level).to_string(),
    }
}

pub fn assess_all(store: &ZoneStore) -> Vec<ZoneAssessment> {
    store.zones().iter().map(assess_zone).collect()
}
