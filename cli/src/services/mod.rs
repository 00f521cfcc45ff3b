//! Services backing the interactive menu

pub mod baseline;
pub mod persistence;
pub mod reporting;

pub use baseline::BaselineGenerator;
pub use persistence::{LoadSummary, PersistenceService};
pub use reporting::ReportingService;

use shared::ZoneStore;

/// Where the initial zone data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Loaded(LoadSummary),
    Generated,
}

/// Load the data file, falling back to a synthetic baseline
///
/// A generated baseline is written to the data file straight away so the
/// next start sees the same history. Never fails: a missing, unreadable or
/// empty file and a failed save of the baseline only log a warning.
pub fn initialize_store(persistence: &PersistenceService, seed: Option<u64>) -> (ZoneStore, DataOrigin) {
    let mut store = ZoneStore::new();
    match persistence.load(&mut store) {
        Ok(summary) => (store, DataOrigin::Loaded(summary)),
        Err(e) => {
            tracing::warn!(
                path = %persistence.path().display(),
                error = %e,
                "Zone data unavailable, generating synthetic baseline"
            );
            let mut store = ZoneStore::new();
            BaselineGenerator::new(seed).populate(&mut store);
            if let Err(e) = persistence.save(&store) {
                tracing::warn!(code = e.code(), error = %e, "Synthetic baseline not saved");
            }
            (store, DataOrigin::Generated)
        }
    }
}
