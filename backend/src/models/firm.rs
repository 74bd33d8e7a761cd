//! Firm model
//!
//! Represents one productive firm. Each period the firm receives four
//! exogenous draws (desired production, desired investment, liquid assets,
//! credit limit) plus its outstanding debt, and the resolution engine
//! reconciles the plan with those scarce resources.
//!
//! The per-period exogenous state is kept in an immutable [`PeriodInputs`]
//! value; resolution phases read it and produce explicit outputs rather than
//! rewriting shared fields in place.

use crate::models::params::Parameters;
use crate::resolution::Resolution;
use serde::{Deserialize, Serialize};

/// Unit cost of production in this model (stationary, equal to machine cost)
pub const UNIT_COST: f64 = 1.0;

/// Exogenous inputs for one firm in one period
///
/// All quantities are non-negative reals. `desired_investment` is expressed
/// in investment units and is a whole multiple of the machine size; the cost
/// of one machine is 1.
///
/// # Example
/// ```
/// use firm_simulator_core_rs::{Parameters, PeriodInputs};
///
/// let params = Parameters::default();
/// let inputs = PeriodInputs::new(20.0, 40.0, 100.0, 50.0, 0.0, &params);
/// assert!((inputs.price - 2.2).abs() < 1e-12); // (1 + 1.2) · 1
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodInputs {
    /// Unconstrained production plan for the period
    pub desired_production: f64,

    /// Unconstrained investment plan, whole multiple of the machine size
    pub desired_investment: f64,

    /// Cash on hand at period start
    pub liquid_assets: f64,

    /// Maximum amount borrowable this period
    pub credit_limit: f64,

    /// Carried debt subject to repayment share and interest this period
    pub outstanding_debt: f64,

    /// Price of one unit of output, constant within the period
    pub price: f64,

    /// Unit cost of production, constant within the period
    pub unit_cost: f64,
}

impl PeriodInputs {
    /// Build period inputs from the four exogenous draws plus carried debt.
    ///
    /// Price is set from the parameter markup over the stationary unit cost.
    pub fn new(
        desired_production: f64,
        desired_investment: f64,
        liquid_assets: f64,
        credit_limit: f64,
        outstanding_debt: f64,
        params: &Parameters,
    ) -> Self {
        // The trim loops remove investment in whole machine steps; a
        // partial machine would let realized investment go negative.
        debug_assert!(
            desired_investment % params.machine_size == 0.0,
            "desired_investment {} is not a whole multiple of machine_size {}",
            desired_investment,
            params.machine_size,
        );

        Self {
            desired_production,
            desired_investment,
            liquid_assets,
            credit_limit,
            outstanding_debt,
            price: (1.0 + params.markup) * UNIT_COST,
            unit_cost: UNIT_COST,
        }
    }

    /// Per-unit margin on production, `price - unit_cost`
    pub fn margin(&self) -> f64 {
        self.price - self.unit_cost
    }

    /// Cost of the desired investment in machines (one machine costs 1)
    pub fn desired_investment_cost(&self, params: &Parameters) -> f64 {
        (self.desired_investment / params.machine_size).round()
    }
}

/// One firm participating in the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Firm {
    /// Dense numeric identifier, stable across periods
    id: usize,

    /// Exogenous inputs for the current period (None before the first draw)
    inputs: Option<PeriodInputs>,

    /// Resolution of the most recent period
    last_resolution: Option<Resolution>,
}

impl Firm {
    /// Create a firm with no period state yet.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            inputs: None,
            last_resolution: None,
        }
    }

    /// Firm identifier
    pub fn id(&self) -> usize {
        self.id
    }

    /// Reset the firm for a new period with fresh exogenous draws.
    pub fn begin_period(&mut self, inputs: PeriodInputs) {
        self.inputs = Some(inputs);
        self.last_resolution = None;
    }

    /// Inputs of the current period, if drawn
    pub fn inputs(&self) -> Option<&PeriodInputs> {
        self.inputs.as_ref()
    }

    /// Store the resolved allocation for the current period.
    pub fn record_resolution(&mut self, resolution: Resolution) {
        self.last_resolution = Some(resolution);
    }

    /// Resolution of the most recent period, if resolved
    pub fn last_resolution(&self) -> Option<&Resolution> {
        self.last_resolution.as_ref()
    }
}
