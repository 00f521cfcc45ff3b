//! Synthetic baseline data used when no data file can be loaded
//!
//! Wraps `ChaCha8Rng` so that a configured seed always yields the same
//! zone histories.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use shared::{ClimateReading, History, Pollutant, ZoneId, ZoneStore, HISTORY_DAYS};

/// Maximum day-to-day deviation from the zone's base level (percent)
const DAILY_JITTER_PERCENT: i64 = 15;

/// Generator for plausible 30-day histories and climate readings
pub struct BaselineGenerator {
    rng: ChaCha8Rng,
}

impl BaselineGenerator {
    /// Seeded generator; fresh entropy when `seed` is `None`
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng }
    }

    /// Overwrite every zone's history and climate
    pub fn populate(&mut self, store: &mut ZoneStore) {
        for id in ZoneId::ALL {
            let climate = self.climate();
            let zone = store.zone_mut(id);
            for pollutant in Pollutant::ALL {
                let history = self.history(id, pollutant);
                zone.set_history(pollutant, history);
            }
            zone.set_climate(climate);
        }
        tracing::info!(zones = ZoneId::ALL.len(), days = HISTORY_DAYS, "Synthetic baseline generated");
    }

    fn history(&mut self, zone: ZoneId, pollutant: Pollutant) -> History {
        let (low, high) = base_band_tenths(pollutant);
        let base = self.rng.gen_range(low..=high) * zone_factor_percent(zone) / 100;

        let mut history = [Decimal::ZERO; HISTORY_DAYS];
        for slot in history.iter_mut() {
            let jitter = self.rng.gen_range(-DAILY_JITTER_PERCENT..=DAILY_JITTER_PERCENT);
            *slot = Decimal::new(base * (100 + jitter) / 100, 1);
        }
        history
    }

    fn climate(&mut self) -> ClimateReading {
        ClimateReading::new(
            Decimal::new(self.rng.gen_range(50..=320), 1),
            Decimal::new(self.rng.gen_range(0..=80), 1),
            Decimal::new(self.rng.gen_range(300..=950), 1),
        )
    }
}

/// Relative pollution load of each zone
fn zone_factor_percent(zone: ZoneId) -> i64 {
    match zone {
        ZoneId::Central => 120,
        ZoneId::North => 90,
        ZoneId::South => 100,
        ZoneId::East => 130,
        ZoneId::West => 80,
    }
}

/// Range the base level is drawn from, in tenths of the pollutant unit
fn base_band_tenths(pollutant: Pollutant) -> (i64, i64) {
    match pollutant {
        Pollutant::Pm25 => (80, 180),
        Pollutant::No2 => (250, 450),
        Pollutant::So2 => (150, 400),
        Pollutant::Co2 => (4200, 9000),
    }
}
