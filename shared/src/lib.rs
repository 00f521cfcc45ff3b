//! Shared types and the calculation core for the air quality monitor
//!
//! This crate holds the zone model, the metrics engine that derives
//! averages and 24h predictions, and the alert classifier. It performs no
//! I/O; the application crate loads, edits and renders zones through it.

pub mod error;
pub mod metrics;
pub mod models;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
