//! Configuration management for the air quality monitor
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with AIRWATCH_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::DEFAULT_PREDICTION_WINDOW;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Zone data file settings
    pub data: DataConfig,

    /// Report export settings
    pub report: ReportConfig,

    /// Prediction settings
    pub prediction: PredictionConfig,

    /// Synthetic baseline settings
    #[serde(default)]
    pub baseline: BaselineConfig,

    /// Logging settings
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// CSV file holding the 30-day history of every zone
    pub path: String,

    /// Save pending changes when the menu exits
    pub autosave_on_exit: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Output file for exported reports
    pub path: String,

    pub format: ReportFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PredictionConfig {
    /// Number of most recent days feeding the weighted average
    pub window_days: usize,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BaselineConfig {
    /// Fixed seed for reproducible synthetic data
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Default tracing filter when RUST_LOG is unset
    pub filter: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AIRWATCH_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("data.path", "data/zones.csv")?
            .set_default("data.autosave_on_exit", true)?
            .set_default("report.path", "reports/air_quality_report.txt")?
            .set_default("report.format", "text")?
            .set_default("prediction.window_days", DEFAULT_PREDICTION_WINDOW as i64)?
            .set_default("log.filter", "airwatch=info,shared=info")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AIRWATCH_ prefix)
            .add_source(
                Environment::with_prefix("AIRWATCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.prediction.window_days == 0 {
            return Err(ConfigError::Message(
                "prediction.window_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            data: DataConfig::default(),
            report: ReportConfig::default(),
            prediction: PredictionConfig::default(),
            baseline: BaselineConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: "data/zones.csv".to_string(),
            autosave_on_exit: true,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: "reports/air_quality_report.txt".to_string(),
            format: ReportFormat::Text,
        }
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_PREDICTION_WINDOW,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "airwatch=info,shared=info".to_string(),
        }
    }
}
