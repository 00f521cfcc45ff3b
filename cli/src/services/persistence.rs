//! CSV persistence for zone histories
//!
//! One row per (zone, day) with the zone's climate repeated on every row.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{
    validate_climate, validate_concentration, validate_day, ClimateReading, Pollutant, ZoneStore,
    HISTORY_DAYS,
};

use crate::error::{AppError, AppResult};

/// Persistence service for the zone data file
#[derive(Debug, Clone)]
pub struct PersistenceService {
    path: PathBuf,
}

/// A single persisted row
///
/// Numbers are kept as decimal strings so values reload with their full scale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneDayRecord {
    pub zone: String,
    /// 1-based, day 30 is the current reading
    pub day: usize,
    #[serde(with = "rust_decimal::serde::str")]
    pub pm25: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub no2: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub so2: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub co2: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub temperature: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub wind_speed: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub humidity: Decimal,
}

impl ZoneDayRecord {
    fn concentrations(&self) -> [(Pollutant, Decimal); 4] {
        [
            (Pollutant::Pm25, self.pm25),
            (Pollutant::No2, self.no2),
            (Pollutant::So2, self.so2),
            (Pollutant::Co2, self.co2),
        ]
    }

    fn climate(&self) -> ClimateReading {
        ClimateReading::new(self.temperature, self.wind_speed, self.humidity)
    }

    fn validate(&self) -> Result<(), &'static str> {
        validate_day(self.day)?;
        for (pollutant, value) in self.concentrations() {
            validate_concentration(pollutant, value)?;
        }
        validate_climate(&self.climate())
    }
}

/// Outcome of reading a data file
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub rows_loaded: usize,
    /// Rows that failed to parse or validate
    pub rows_skipped: usize,
    /// Well-formed rows naming a zone that is not tracked
    pub rows_unmatched: usize,
}

impl PersistenceService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the data file into `store`
    ///
    /// Fails if the file cannot be opened or holds no valid row; individual
    /// bad rows are skipped.
    pub fn load(&self, store: &mut ZoneStore) -> AppResult<LoadSummary> {
        let file = File::open(&self.path).map_err(|source| AppError::ReadData {
            path: self.path.clone(),
            source,
        })?;

        let summary = read_zones(file, store);
        if summary.rows_loaded == 0 {
            return Err(AppError::EmptyData {
                path: self.path.clone(),
            });
        }

        tracing::info!(
            path = %self.path.display(),
            loaded = summary.rows_loaded,
            skipped = summary.rows_skipped,
            unmatched = summary.rows_unmatched,
            "Zone data loaded"
        );
        Ok(summary)
    }

    /// Write every zone to the data file, creating parent directories
    pub fn save(&self, store: &ZoneStore) -> AppResult<usize> {
        let write_error = |source: std::io::Error| AppError::WriteFile {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        let file = File::create(&self.path).map_err(write_error)?;
        let rows = write_zones(file, store)?;

        tracing::info!(path = %self.path.display(), rows, "Zone data saved");
        Ok(rows)
    }
}

/// Apply every valid row from `reader` onto `store`
pub fn read_zones<R: Read>(reader: R, store: &mut ZoneStore) -> LoadSummary {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut summary = LoadSummary::default();

    for (index, result) in csv_reader.deserialize::<ZoneDayRecord>().enumerate() {
        // Header is line 1
        let line = index + 2;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!(line, error = %e, "Skipping malformed row");
                summary.rows_skipped += 1;
                continue;
            }
        };

        let Some(zone_id) = store.find_by_name(&record.zone) else {
            tracing::debug!(line, zone = %record.zone, "Ignoring row for unknown zone");
            summary.rows_unmatched += 1;
            continue;
        };

        if let Err(reason) = record.validate() {
            tracing::debug!(line, zone = %record.zone, reason, "Skipping invalid row");
            summary.rows_skipped += 1;
            continue;
        }

        let applied = record
            .concentrations()
            .into_iter()
            .try_for_each(|(pollutant, value)| store.set_day(zone_id, pollutant, record.day, value));
        if let Err(e) = applied {
            tracing::debug!(line, error = %e, "Skipping row");
            summary.rows_skipped += 1;
            continue;
        }
        store.set_climate(zone_id, record.climate());
        summary.rows_loaded += 1;
    }

    summary
}

/// Serialize every zone, oldest day first; returns the number of rows
pub fn write_zones<W: Write>(writer: W, store: &ZoneStore) -> AppResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut rows = 0;

    for zone in store.zones() {
        let climate = zone.climate();
        for slot in 0..HISTORY_DAYS {
            let record = ZoneDayRecord {
                zone: zone.name().to_string(),
                day: slot + 1,
                pm25: zone.history(Pollutant::Pm25)[slot],
                no2: zone.history(Pollutant::No2)[slot],
                so2: zone.history(Pollutant::So2)[slot],
                co2: zone.history(Pollutant::Co2)[slot],
                temperature: climate.temperature_celsius,
                wind_speed: climate.wind_speed_mps,
                humidity: climate.humidity_percent,
            };
            csv_writer.serialize(record)?;
            rows += 1;
        }
    }

    csv_writer.flush()?;
    Ok(rows)
}
