//! Financial resolution engine
//!
//! Reconciles one firm's desired production and investment plan with its
//! liquid assets, credit line, and due debt service, in deterministic
//! phases:
//!
//! 1. **Capacity allocation** (`capacity`): what the plan can reach on
//!    cash + credit, ignoring debt.
//! 2. **Feasibility resolution** (`feasibility`): can the implied cash
//!    position cover the debt due this period; if so, the exact credit
//!    demand and loan split via closed forms.
//! 3. **Adjustment** (`adjustment`): cascading feasibility repair when it
//!    cannot, trimming investment machine by machine and then production
//!    via closed-form breakpoints, down to the loss-minimizing shutdown.
//!
//! Phases communicate through explicit immutable outputs, not a shared
//! mutable record; [`resolve_period`] is the single entry point.

pub mod adjustment;
pub mod capacity;
pub mod feasibility;
pub mod payment;

pub use capacity::CapacityAllocation;
pub use payment::PaymentTerms;

use crate::models::firm::PeriodInputs;
use crate::models::params::Parameters;
use serde::{Deserialize, Serialize};

/// Absolute tolerance when checking the credit demand against the credit
/// limit: closed-form solves may land exactly on the limit up to rounding.
const CREDIT_LIMIT_TOLERANCE: f64 = 1e-9;

/// Which branch of the resolution finalized the period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Internal funds cover the plan and the due debt; no credit needed
    InternalFunds,

    /// A debt-service loan strictly inside the available credit was solved
    /// in closed form; payment is exactly zero at the solution
    DebtLoanSolved,

    /// The whole credit line funds production/investment and the plan still
    /// services the debt
    FullCreditPlan,

    /// Trimming investment machine by machine restored feasibility
    InvestmentTrimmed,

    /// Investment went to zero and production was solved in closed form to
    /// the exact zero of the payment condition
    ProductionSolved,

    /// Payment is non-decreasing in production, so no trim can help; the
    /// firm keeps its achieved production, takes no loan, and bears the
    /// negative payment
    ProductionUnadjustable,

    /// No positive production satisfies the payment condition; the firm
    /// shuts down the period (zero production and investment, no loan) to
    /// minimize the loss
    Shutdown,
}

impl Outcome {
    /// True when the finalized payment condition is guaranteed >= 0.
    pub fn is_feasible(&self) -> bool {
        !matches!(self, Outcome::ProductionUnadjustable | Outcome::Shutdown)
    }
}

/// Final allocation for one firm-period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Realized production plan
    pub production: f64,

    /// Realized investment plan, whole machine units
    pub investment: f64,

    /// Liquid assets left at the end of resolution
    pub remaining_liquid_assets: f64,

    /// Credit funding production and investment
    pub production_loan: f64,

    /// Credit drawn to help service debt
    pub debt_loan: f64,

    /// Total credit requested, `production_loan + debt_loan`
    pub credit_demand: f64,

    /// Payment condition evaluated at this exact allocation
    pub payment: f64,

    /// Which branch finalized the period
    pub outcome: Outcome,
}

/// Build a resolution, deriving credit demand and the payment value from
/// the allocation itself so the recorded oracle value can never drift from
/// the realized arguments.
pub(crate) fn finalize(
    outcome: Outcome,
    terms: &PaymentTerms,
    production: f64,
    investment: f64,
    remaining_liquid_assets: f64,
    production_loan: f64,
    debt_loan: f64,
) -> Resolution {
    let payment = terms.evaluate(production, remaining_liquid_assets, debt_loan, production_loan);
    Resolution {
        production,
        investment,
        remaining_liquid_assets,
        production_loan,
        debt_loan,
        credit_demand: production_loan + debt_loan,
        payment,
        outcome,
    }
}

/// Resolve one firm-period: desired plan in, realized plan and credit
/// demand out.
///
/// Deterministic and total: every input combination yields a defined
/// output, including the degenerate cannot-service-debt outcomes. The
/// parameters must have been validated (`Parameters::validate`).
///
/// # Panics
///
/// Panics if the resolved credit demand exceeds the credit limit. That
/// cannot result from any input; it would indicate a defect in the phase
/// logic and is never clamped.
///
/// # Example
/// ```
/// use firm_simulator_core_rs::{resolve_period, Outcome, Parameters, PeriodInputs};
///
/// let params = Parameters::default();
/// let inputs = PeriodInputs::new(20.0, 40.0, 100.0, 50.0, 0.0, &params);
/// let resolution = resolve_period(&inputs, &params);
///
/// assert_eq!(resolution.outcome, Outcome::InternalFunds);
/// assert_eq!(resolution.credit_demand, 0.0);
/// assert!(resolution.payment >= 0.0);
/// ```
pub fn resolve_period(inputs: &PeriodInputs, params: &Parameters) -> Resolution {
    allocate_and_resolve(inputs, params).1
}

/// Like [`resolve_period`], but also returns the intermediate capacity
/// allocation, for callers that report or log the step 1 outcome. Runs the
/// pipeline once; [`resolve_period`] is this with the allocation dropped.
pub fn allocate_and_resolve(
    inputs: &PeriodInputs,
    params: &Parameters,
) -> (CapacityAllocation, Resolution) {
    let allocation = capacity::allocate(inputs, params);
    let resolution = feasibility::resolve(inputs, params, &allocation);

    assert!(
        resolution.credit_demand <= inputs.credit_limit + CREDIT_LIMIT_TOLERANCE,
        "credit demand {} exceeds credit limit {}: internal inconsistency in the resolution phases",
        resolution.credit_demand,
        inputs.credit_limit,
    );

    (allocation, resolution)
}
