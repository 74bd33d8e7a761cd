//! Domain models for the firm simulator

pub mod event;
pub mod firm;
pub mod params;

// Re-exports
pub use event::{Event, EventLog};
pub use firm::{Firm, PeriodInputs, UNIT_COST};
pub use params::{ParameterError, Parameters};
