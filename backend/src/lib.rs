//! Firm Simulator Core - Rust Engine
//!
//! Deterministic per-firm financial resolution for an economic
//! microsimulation: each period a firm reconciles its desired production
//! and investment plan with its liquid assets, credit line, and due debt
//! service, and comes out with a realized plan and an exact credit demand.
//!
//! # Architecture
//!
//! - **models**: Domain types (Parameters, Firm, PeriodInputs, EventLog)
//! - **resolution**: The resolution engine (capacity, feasibility, adjustment)
//! - **draws**: Deterministic generation of exogenous period inputs
//! - **simulation**: Main period loop over many firms
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. Resolution is deterministic and total: every input yields a defined
//!    outcome, including the degenerate cannot-service-debt cases
//! 2. Resolved credit demand never exceeds the credit limit (asserted,
//!    never clamped)
//! 3. All randomness is deterministic (seeded RNG)

// Module declarations
pub mod draws;
pub mod models;
pub mod resolution;
pub mod rng;
pub mod simulation;

// Re-exports for convenience
pub use draws::{DrawConfig, DrawGenerator};
pub use models::{
    event::{Event, EventLog},
    firm::{Firm, PeriodInputs, UNIT_COST},
    params::{ParameterError, Parameters},
};
pub use resolution::{
    allocate_and_resolve, resolve_period, CapacityAllocation, Outcome, PaymentTerms, Resolution,
};
pub use rng::RngManager;
pub use simulation::{
    FirmPeriodResult, PeriodResult, Simulation, SimulationConfig, SimulationError,
};
