//! Reporting service for console summaries and exported reports

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::{AlertLevel, Pollutant, ZoneAssessment, ZoneStore};

use crate::config::ReportFormat;
use crate::error::{AppError, AppResult};

const RULE_WIDTH: usize = 86;

/// Reporting service
#[derive(Debug, Clone)]
pub struct ReportingService {
    path: PathBuf,
    format: ReportFormat,
    window_days: usize,
}

/// Exported JSON document
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub prediction_window_days: usize,
    pub zones: &'a [ZoneAssessment],
}

impl ReportingService {
    pub fn new(path: impl Into<PathBuf>, format: ReportFormat, window_days: usize) -> Self {
        Self {
            path: path.into(),
            format,
            window_days,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the assessments in the configured format and write them out
    pub fn export(&self, assessments: &[ZoneAssessment], generated_at: DateTime<Utc>) -> AppResult<&Path> {
        let body = match self.format {
            ReportFormat::Text => render_text_report(assessments, generated_at, self.window_days),
            ReportFormat::Json => render_json_report(assessments, generated_at, self.window_days)?,
        };

        let write_error = |source: std::io::Error| AppError::WriteFile {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(&self.path, body).map_err(write_error)?;

        tracing::info!(path = %self.path.display(), format = ?self.format, "Report exported");
        Ok(&self.path)
    }
}

fn fixed(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

/// Full per-zone, per-pollutant breakdown
pub fn render_text_report(
    assessments: &[ZoneAssessment],
    generated_at: DateTime<Utc>,
    window_days: usize,
) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    let _ = writeln!(out, "AIR QUALITY REPORT");
    let _ = writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S UTC"));
    let _ = writeln!(
        out,
        "Prediction: climate-adjusted weighted average of the last {} days",
        window_days
    );
    let _ = writeln!(out, "{}", rule);

    for assessment in assessments {
        let climate = &assessment.climate;
        let _ = writeln!(out);
        let _ = writeln!(out, "Zone: {}", assessment.zone);
        let _ = writeln!(
            out,
            "Climate: {} °C | wind {} m/s | humidity {} %",
            climate.temperature_celsius, climate.wind_speed_mps, climate.humidity_percent
        );
        let _ = writeln!(
            out,
            "{:<10} {:>10} {:>10}  {:<11} {:>10} {:>10}  {:<11} {:<6}",
            "Pollutant", "Actual", "Threshold", "Level", "Avg 30d", "Pred 24h", "Pred level", "Unit"
        );
        for p in &assessment.pollutants {
            let _ = writeln!(
                out,
                "{:<10} {:>10} {:>10}  {:<11} {:>10} {:>10}  {:<11} {:<6}",
                p.pollutant.label(),
                fixed(p.actual),
                fixed(p.threshold),
                p.actual_level.to_string(),
                fixed(p.average_30d),
                fixed(p.predicted_24h),
                p.predicted_level.to_string(),
                p.pollutant.unit(),
            );
        }
        let _ = writeln!(out, "Overall level: {}", assessment.overall_level);
        let _ = writeln!(out, "Recommendation: {}", assessment.recommendation);
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    }

    out
}

pub fn render_json_report(
    assessments: &[ZoneAssessment],
    generated_at: DateTime<Utc>,
    window_days: usize,
) -> AppResult<String> {
    let report = JsonReport {
        generated_at,
        prediction_window_days: window_days,
        zones: assessments,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Short console summary: actual vs predicted with the combined level
///
/// A pollutant gets a recommendation line only when its actual or
/// predicted level is above Normal.
pub fn render_summary(assessments: &[ZoneAssessment]) -> String {
    let mut out = String::new();
    for assessment in assessments {
        let _ = writeln!(out, "== {} (overall: {}) ==", assessment.zone, assessment.overall_level);
        for p in &assessment.pollutants {
            let _ = writeln!(
                out,
                "  {:<6} actual {:>9} [{}]  predicted {:>9} [{}]  -> {}",
                p.pollutant.label(),
                fixed(p.actual),
                p.actual_level,
                fixed(p.predicted_24h),
                p.predicted_level,
                p.combined_level,
            );
            if p.actual_level != AlertLevel::Normal || p.predicted_level != AlertLevel::Normal {
                let _ = writeln!(out, "         Recommendation: {}", p.combined_level.recommendation());
            }
        }
        let _ = writeln!(out);
    }
    out
}

/// Table of current readings and climate, numbered for zone selection
pub fn render_zone_overview(store: &ZoneStore) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:<3} {:<9} {:>8} {:>9} {:>7}", "#", "Zone", "Temp °C", "Wind m/s", "Hum %");
    for pollutant in Pollutant::ALL {
        let _ = write!(out, " {:>9}", pollutant.label());
    }
    let _ = writeln!(out);

    for (index, zone) in store.zones().iter().enumerate() {
        let climate = zone.climate();
        let _ = write!(
            out,
            "{:<3} {:<9} {:>8} {:>9} {:>7}",
            index + 1,
            zone.name(),
            climate.temperature_celsius.to_string(),
            climate.wind_speed_mps.to_string(),
            climate.humidity_percent.to_string(),
        );
        for pollutant in Pollutant::ALL {
            let _ = write!(out, " {:>9}", zone.current(pollutant).to_string());
        }
        let _ = writeln!(out);
    }
    out
}
