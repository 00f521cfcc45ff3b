//! Domain errors

use thiserror::Error;

use crate::types::HISTORY_DAYS;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown zone: {0}")]
    UnknownZone(String),

    #[error("Day {0} is outside the 1-{max} history window", max = HISTORY_DAYS)]
    DayOutOfRange(usize),
}
