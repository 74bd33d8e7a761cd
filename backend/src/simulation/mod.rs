//! Simulation engine
//!
//! Main period loop integrating all components:
//! - Exogenous draws (deterministic generation)
//! - Financial resolution (capacity, feasibility, adjustment)
//! - Event logging (complete simulation history)
//!
//! Each period, every firm receives fresh draws and runs the resolution
//! pipeline independently; firms do not interact. The engine owns the
//! shared RNG, so the draw stream is a single deterministic sequence over
//! firms and periods.
//!
//! # Determinism
//!
//! All randomness flows through one seeded xorshift64* generator.
//! Same seed + same config = identical results (deterministic replay).
//!
//! # Example
//!
//! ```
//! use firm_simulator_core_rs::simulation::{Simulation, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     num_firms: 10,
//!     num_periods: 5,
//!     rng_seed: 12345,
//!     ..SimulationConfig::default()
//! };
//!
//! let mut simulation = Simulation::new(config).unwrap();
//! let results = simulation.run().unwrap();
//!
//! assert_eq!(results.len(), 5);
//! assert_eq!(results[0].firm_results.len(), 10);
//! ```

use crate::draws::{DrawConfig, DrawGenerator};
use crate::models::event::{Event, EventLog};
use crate::models::firm::Firm;
use crate::models::params::{ParameterError, Parameters};
use crate::resolution::{self, Resolution};
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Complete simulation configuration.
///
/// The default reproduces the reference calibration: behavioral parameters
/// from [`Parameters::default`], draw ranges from [`DrawConfig::default`],
/// 10 firms for 10 periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of firms to simulate
    pub num_firms: usize,

    /// Number of periods to run
    pub num_periods: usize,

    /// RNG seed for deterministic simulation
    pub rng_seed: u64,

    /// Behavioral parameters shared by all firms
    pub parameters: Parameters,

    /// Ranges of the exogenous per-period draws
    pub draw_config: DrawConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_firms: 10,
            num_periods: 10,
            rng_seed: 1,
            parameters: Parameters::default(),
            draw_config: DrawConfig::default(),
        }
    }
}

/// Simulation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Behavioral parameters failed validation
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),

    /// All configured periods have already run
    #[error("simulation finished after period {0}")]
    Finished(usize),
}

/// One firm's realized period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirmPeriodResult {
    /// Firm identifier
    pub firm_id: usize,

    /// Final allocation and credit demand
    pub resolution: Resolution,
}

/// Result of a single period across all firms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodResult {
    /// Period number
    pub period: usize,

    /// Per-firm resolutions, in firm-id order
    pub firm_results: Vec<FirmPeriodResult>,

    /// Sum of realized production across firms
    pub total_production: f64,

    /// Sum of realized investment across firms
    pub total_investment: f64,

    /// Sum of credit demand across firms
    pub total_credit_demand: f64,

    /// Number of firms whose period finalized with payment >= 0
    pub num_feasible: usize,
}

/// Main simulation engine owning all state and the period loop.
pub struct Simulation {
    config: SimulationConfig,
    firms: Vec<Firm>,
    generator: DrawGenerator,
    rng: RngManager,
    period: usize,
    event_log: EventLog,
}

impl Simulation {
    /// Create a new simulation from configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidConfig` for zero firms or zero
    /// periods, and `SimulationError::InvalidParameters` when the
    /// behavioral parameters are out of range (for example a combined
    /// debt service rate of one or more).
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;

        let firms = (0..config.num_firms).map(Firm::new).collect();
        let generator = DrawGenerator::new(config.draw_config.clone());
        let rng = RngManager::new(config.rng_seed);

        Ok(Self {
            config,
            firms,
            generator,
            rng,
            period: 0,
            event_log: EventLog::new(),
        })
    }

    fn validate_config(config: &SimulationConfig) -> Result<(), SimulationError> {
        if config.num_firms == 0 {
            return Err(SimulationError::InvalidConfig(
                "num_firms must be > 0".to_string(),
            ));
        }

        if config.num_periods == 0 {
            return Err(SimulationError::InvalidConfig(
                "num_periods must be > 0".to_string(),
            ));
        }

        config.parameters.validate()?;

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current period number (next period to run)
    pub fn current_period(&self) -> usize {
        self.period
    }

    /// True once all configured periods have run
    pub fn is_finished(&self) -> bool {
        self.period >= self.config.num_periods
    }

    /// The simulation's configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The simulated firms, in id order
    pub fn firms(&self) -> &[Firm] {
        &self.firms
    }

    /// Reference to the event log
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Total events logged
    pub fn event_count(&self) -> usize {
        self.event_log.len()
    }

    // ========================================================================
    // Period Loop
    // ========================================================================

    /// Execute one simulation period across all firms.
    ///
    /// For each firm in id order: draw fresh period inputs, allocate
    /// capacity, resolve feasibility, and record the resolution. Logs a
    /// `DrawsGenerated`, `CapacityAllocated`, and `PeriodResolved` event
    /// per firm.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::Finished` when all configured periods
    /// have already run.
    pub fn run_period(&mut self) -> Result<PeriodResult, SimulationError> {
        if self.is_finished() {
            return Err(SimulationError::Finished(self.config.num_periods));
        }

        let period = self.period;
        let params = self.config.parameters;

        self.event_log.log(Event::PeriodStarted {
            period,
            num_firms: self.firms.len(),
        });

        let mut firm_results = Vec::with_capacity(self.firms.len());
        let mut total_production = 0.0;
        let mut total_investment = 0.0;
        let mut total_credit_demand = 0.0;
        let mut num_feasible = 0;

        for firm in &mut self.firms {
            let inputs = self.generator.generate_for_firm(&params, &mut self.rng);

            self.event_log.log(Event::DrawsGenerated {
                period,
                firm_id: firm.id(),
                desired_production: inputs.desired_production,
                desired_investment: inputs.desired_investment,
                liquid_assets: inputs.liquid_assets,
                credit_limit: inputs.credit_limit,
                outstanding_debt: inputs.outstanding_debt,
            });

            let (allocation, resolution) = resolution::allocate_and_resolve(&inputs, &params);
            self.event_log.log(Event::CapacityAllocated {
                period,
                firm_id: firm.id(),
                production: allocation.production,
                investment: allocation.investment,
                remaining_liquid_assets: allocation.remaining_liquid_assets,
                production_loan: allocation.production_loan,
            });

            self.event_log.log(Event::PeriodResolved {
                period,
                firm_id: firm.id(),
                outcome: resolution.outcome,
                production: resolution.production,
                investment: resolution.investment,
                credit_demand: resolution.credit_demand,
                payment: resolution.payment,
            });

            total_production += resolution.production;
            total_investment += resolution.investment;
            total_credit_demand += resolution.credit_demand;
            if resolution.outcome.is_feasible() {
                num_feasible += 1;
            }

            firm.begin_period(inputs);
            firm.record_resolution(resolution.clone());

            firm_results.push(FirmPeriodResult {
                firm_id: firm.id(),
                resolution,
            });
        }

        self.period += 1;

        Ok(PeriodResult {
            period,
            firm_results,
            total_production,
            total_investment,
            total_credit_demand,
            num_feasible,
        })
    }

    /// Run all remaining periods, collecting one result per period.
    pub fn run(&mut self) -> Result<Vec<PeriodResult>, SimulationError> {
        let mut results = Vec::with_capacity(self.config.num_periods - self.period);
        while !self.is_finished() {
            results.push(self.run_period()?);
        }
        Ok(results)
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("current_period", &self.period)
            .field("num_firms", &self.firms.len())
            .field("event_count", &self.event_log.len())
            .finish()
    }
}
