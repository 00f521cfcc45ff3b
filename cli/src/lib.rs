//! Air quality zone monitor
//!
//! Interactive tool tracking pollutant readings and weather across five city
//! zones, with 30-day persistence, weather-adjusted 24h predictions and
//! alert levels. The calculations live in the `shared` crate; this crate
//! provides configuration, persistence, reporting and the menu.

pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
