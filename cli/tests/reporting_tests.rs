//! Reporting tests for the air quality monitor
//!
//! Covers the text and JSON report renderers, the console summary and
//! report export to disk.

use std::str::FromStr;

use airwatch::config::ReportFormat;
use airwatch::services::reporting::{
    render_json_report, render_summary, render_text_report, render_zone_overview,
};
use airwatch::services::ReportingService;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use shared::{
    assess_all, recommendation_for, AlertLevel, ClimateReading, Pollutant, ZoneId, ZoneStore,
    DEFAULT_PREDICTION_WINDOW, HISTORY_DAYS,
};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Central zone with PM2.5 steady at 50 and neutral weather
fn polluted_store() -> ZoneStore {
    let mut store = ZoneStore::new();
    let zone = store.zone_mut(ZoneId::Central);
    zone.set_history(Pollutant::Pm25, [dec("50.0"); HISTORY_DAYS]);
    zone.set_climate(ClimateReading::new(dec("20"), dec("0"), dec("0")));
    store.recompute_all(DEFAULT_PREDICTION_WINDOW);
    store
}

#[test]
fn test_text_report_contains_breakdown() {
    let store = polluted_store();
    let generated_at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();

    let report = render_text_report(&assess_all(&store), generated_at, 7);

    assert!(report.starts_with("AIR QUALITY REPORT\n"));
    assert!(report.contains("Generated: 2026-10-18 09:30:00 UTC"));
    assert!(report.contains("last 7 days"));
    for zone in ZoneId::ALL {
        assert!(report.contains(&format!("Zone: {}", zone)));
    }

    let pm25_line = report
        .lines()
        .find(|line| line.starts_with("PM2.5"))
        .expect("PM2.5 row");
    assert!(pm25_line.contains("50.00"));
    assert!(pm25_line.contains("15.00"));
    assert_eq!(pm25_line.matches("Critical").count(), 2);

    assert!(report.contains("Overall level: Critical"));
    assert!(report.contains(recommendation_for(AlertLevel::Critical)));
    assert!(report.contains(recommendation_for(AlertLevel::Normal)));
}

#[test]
fn test_json_report_round_trips_levels() {
    let store = polluted_store();
    let generated_at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();

    let json = render_json_report(&assess_all(&store), generated_at, 7).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["prediction_window_days"], 7);
    assert_eq!(value["zones"].as_array().unwrap().len(), 5);
    let central = &value["zones"][0];
    assert_eq!(central["zone"], "Central");
    assert_eq!(central["overall_level"], "critical");
    assert_eq!(central["pollutants"][0]["pollutant"], "pm25");
    assert_eq!(central["pollutants"][0]["predicted_level"], "critical");
    assert_eq!(value["zones"][1]["overall_level"], "normal");
}

#[test]
fn test_summary_shows_combined_level_per_pollutant() {
    let store = polluted_store();
    let summary = render_summary(&assess_all(&store));

    assert!(summary.contains("== Central (overall: Critical) =="));
    assert!(summary.contains("[Critical]  predicted"));
    assert!(summary.contains("-> Critical"));
    assert!(summary.contains("== West (overall: Normal) =="));
}

#[test]
fn test_summary_recommends_only_for_raised_pollutants() {
    let mut store = polluted_store();
    // North NO2 is fine today but rising towards the threshold
    let mut history = [dec("20"); HISTORY_DAYS];
    for slot in history.iter_mut().rev().take(7) {
        *slot = dec("35");
    }
    history[HISTORY_DAYS - 1] = dec("30");
    let north = store.zone_mut(ZoneId::North);
    north.set_history(Pollutant::No2, history);
    north.set_climate(ClimateReading::new(dec("20"), dec("2"), dec("50")));
    store.recompute_all(DEFAULT_PREDICTION_WINDOW);

    let summary = render_summary(&assess_all(&store));

    assert_eq!(summary.matches("Recommendation:").count(), 2);
    let critical = format!("Recommendation: {}", recommendation_for(AlertLevel::Critical));
    let preventive = format!("Recommendation: {}", recommendation_for(AlertLevel::Preventive));
    let central = summary.find("== Central").unwrap();
    let north = summary.find("== North").unwrap();
    let south = summary.find("== South").unwrap();
    assert!(summary[central..north].contains(&critical));
    assert!(summary[north..south].contains(&preventive));
    assert!(!summary.contains(recommendation_for(AlertLevel::Normal)));
}

#[test]
fn test_zone_overview_lists_numbered_zones() {
    let store = polluted_store();
    let overview = render_zone_overview(&store);
    let lines: Vec<_> = overview.lines().collect();

    assert_eq!(lines.len(), 6);
    assert!(lines[0].contains("PM2.5"));
    assert!(lines[1].starts_with("1   Central"));
    assert!(lines[1].contains("50.0"));
    assert!(lines[5].starts_with("5   West"));
}

#[test]
fn test_export_writes_configured_format() {
    let dir = std::env::temp_dir().join(format!("airwatch-report-{}", std::process::id()));
    let store = polluted_store();
    let assessments = assess_all(&store);

    let text = ReportingService::new(dir.join("report.txt"), ReportFormat::Text, 7);
    let path = text.export(&assessments, Utc::now()).unwrap();
    let written = std::fs::read_to_string(path).unwrap();
    assert!(written.contains("AIR QUALITY REPORT"));

    let json = ReportingService::new(dir.join("nested/report.json"), ReportFormat::Json, 7);
    let path = json.export(&assessments, Utc::now()).unwrap();
    let written = std::fs::read_to_string(path).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&written).is_ok());

    let _ = std::fs::remove_dir_all(&dir);
}
