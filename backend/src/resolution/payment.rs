//! Payment condition oracle
//!
//! The payment condition is the firm's expected end-of-period net liquid
//! position after contractual debt service:
//!
//! ```text
//! payment(q, nw, lDebt, lProd) =
//!     (p - c)·q + lDebt·(1 - s - r) + nw - (s + r)·(debt + lProd)
//! ```
//!
//! with `s` the repayment share and `r` the interest rate. A plan is
//! debt-service feasible iff this value is >= 0 at the plan's realized
//! arguments. Every resolution phase uses this as its decision oracle, and
//! the two adjustment phases additionally use the closed-form inversions
//! below to land exactly on the zero of the condition.

use crate::models::firm::PeriodInputs;
use crate::models::params::Parameters;

/// Payment condition for one firm-period, with the closed-form solves
///
/// Binds the period constants (margin, rates, outstanding debt) so the
/// phases only pass the variables they actually move.
#[derive(Debug, Clone, Copy)]
pub struct PaymentTerms {
    /// Per-unit margin on production, `price - unit_cost`
    margin: f64,

    /// `repayment_share + interest_rate`: due per unit of debt and
    /// production loan
    debt_service_rate: f64,

    /// `1 - repayment_share - interest_rate`: kept per unit of debt loan;
    /// strictly positive for any validated parameter set
    retention_rate: f64,

    /// Debt carried into the period
    outstanding_debt: f64,
}

impl PaymentTerms {
    /// Bind the payment condition to one firm-period.
    pub fn new(inputs: &PeriodInputs, params: &Parameters) -> Self {
        Self {
            margin: inputs.margin(),
            debt_service_rate: params.debt_service_rate(),
            retention_rate: params.retention_rate(),
            outstanding_debt: inputs.outstanding_debt,
        }
    }

    /// Evaluate the payment condition.
    ///
    /// Pure and total: defined for every input combination.
    ///
    /// # Arguments
    /// * `production` - hypothetical production level
    /// * `remaining_liquid_assets` - cash left after funding the plan
    /// * `debt_loan` - credit drawn to help service debt
    /// * `production_loan` - credit drawn to fund production/investment
    pub fn evaluate(
        &self,
        production: f64,
        remaining_liquid_assets: f64,
        debt_loan: f64,
        production_loan: f64,
    ) -> f64 {
        self.margin * production + debt_loan * self.retention_rate + remaining_liquid_assets
            - self.debt_service_rate * (self.outstanding_debt + production_loan)
    }

    /// Slope of the payment condition in production when each extra unit is
    /// funded from cash (one unit of production consumes one unit of cash).
    ///
    /// Negative means funds are worth more saved than produced, so trimming
    /// production raises the payment condition; non-negative means no
    /// production trim can help.
    pub fn cash_funded_production_slope(&self) -> f64 {
        self.margin - 1.0
    }

    /// Debt loan for which the payment condition is exactly zero, holding
    /// production, remaining cash, and the production loan fixed.
    ///
    /// Valid whenever the payment condition is negative without a debt loan
    /// and positive with the full available loan: linearity then puts the
    /// zero strictly inside that loan interval.
    pub fn solve_debt_loan(
        &self,
        production: f64,
        remaining_liquid_assets: f64,
        production_loan: f64,
    ) -> f64 {
        (self.debt_service_rate * (self.outstanding_debt + production_loan)
            - self.margin * production
            - remaining_liquid_assets)
            / self.retention_rate
    }

    /// Production level for which the payment condition is exactly zero on
    /// a cash-funded segment: remaining cash is `liquid_assets - q` and the
    /// loan split is `(debt_loan, 0)`.
    ///
    /// Only meaningful when `cash_funded_production_slope() != 0`; the
    /// adjustment phases call it on the strictly decreasing side. A
    /// non-positive result means no production level satisfies the payment
    /// condition.
    pub fn solve_cash_funded_production(&self, liquid_assets: f64, debt_loan: f64) -> f64 {
        (self.debt_service_rate * self.outstanding_debt
            - liquid_assets
            - self.retention_rate * debt_loan)
            / self.cash_funded_production_slope()
    }
}
