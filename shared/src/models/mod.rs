//! Domain models for the air quality monitor

mod alert;
mod assessment;
mod climate;
mod store;
mod zone;

pub use alert::*;
pub use assessment::*;
pub use climate::*;
pub use store::*;
pub use zone::*;
