//! Economic parameters
//!
//! Process-wide, read-only constants consumed by the allocation engine.
//! Values default to the reference calibration (repayment share one
//! third, 2% interest on debt, unit production cost 1, machines of size 40
//! each costing 1).
//!
//! # Validation
//!
//! `repayment_share + interest_rate < 1` is a hard precondition: every
//! closed-form loan solve divides by `1 - repayment_share - interest_rate`.
//! Malformed configurations are rejected here, at load time, never
//! discovered mid-resolution.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when validating a parameter set
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParameterError {
    #[error("repayment_share must be within [0, 1], got {0}")]
    RepaymentShareOutOfRange(f64),

    #[error("interest_rate must be non-negative and finite, got {0}")]
    InvalidInterestRate(f64),

    #[error(
        "repayment_share + interest_rate must be < 1 (got {total}); \
         the loan solves divide by 1 - repayment_share - interest_rate"
    )]
    DebtServiceRateTooHigh { total: f64 },

    #[error("markup must be > -1 so that price stays positive, got {0}")]
    InvalidMarkup(f64),

    #[error("machine_size must be strictly positive, got {0}")]
    InvalidMachineSize(f64),
}

/// Read-only economic constants for a simulation run
///
/// # Example
/// ```
/// use firm_simulator_core_rs::Parameters;
///
/// let params = Parameters::default();
/// params.validate().unwrap();
/// assert!(params.retention_rate() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Fraction of outstanding debt contractually due each period
    pub repayment_share: f64,

    /// Interest rate on debt (due on both carried debt and new loans)
    pub interest_rate: f64,

    /// Price markup over unit cost: price = (1 + markup) · unit_cost
    pub markup: f64,

    /// Size of one machine in investment units; one machine costs 1
    pub machine_size: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            repayment_share: 0.333333,
            interest_rate: 0.02,
            markup: 1.2,
            machine_size: 40.0,
        }
    }
}

impl Parameters {
    /// Validate the parameter set
    ///
    /// # Errors
    ///
    /// Returns a `ParameterError` describing the first violated constraint.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.repayment_share.is_finite() || !(0.0..=1.0).contains(&self.repayment_share) {
            return Err(ParameterError::RepaymentShareOutOfRange(
                self.repayment_share,
            ));
        }
        if !self.interest_rate.is_finite() || self.interest_rate < 0.0 {
            return Err(ParameterError::InvalidInterestRate(self.interest_rate));
        }
        let total = self.repayment_share + self.interest_rate;
        if total >= 1.0 {
            return Err(ParameterError::DebtServiceRateTooHigh { total });
        }
        if !self.markup.is_finite() || self.markup <= -1.0 {
            return Err(ParameterError::InvalidMarkup(self.markup));
        }
        if !self.machine_size.is_finite() || self.machine_size <= 0.0 {
            return Err(ParameterError::InvalidMachineSize(self.machine_size));
        }
        Ok(())
    }

    /// Fraction of each monetary unit of debt due this period
    /// (`repayment_share + interest_rate`)
    pub fn debt_service_rate(&self) -> f64 {
        self.repayment_share + self.interest_rate
    }

    /// Fraction of a debt-service loan that survives its own servicing
    /// (`1 - repayment_share - interest_rate`); positive for any valid
    /// parameter set
    pub fn retention_rate(&self) -> f64 {
        1.0 - self.repayment_share - self.interest_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_are_valid() {
        assert_eq!(Parameters::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_debt_service_rate_at_or_above_one() {
        let params = Parameters {
            repayment_share: 0.99,
            interest_rate: 0.02,
            ..Parameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParameterError::DebtServiceRateTooHigh { .. })
        ));
    }

    #[test]
    fn rejects_negative_interest_rate() {
        let params = Parameters {
            interest_rate: -0.01,
            ..Parameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParameterError::InvalidInterestRate(-0.01))
        );
    }

    #[test]
    fn rejects_repayment_share_out_of_range() {
        let params = Parameters {
            repayment_share: 1.5,
            interest_rate: 0.0,
            ..Parameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParameterError::RepaymentShareOutOfRange(1.5))
        );
    }

    #[test]
    fn rejects_non_positive_machine_size() {
        let params = Parameters {
            machine_size: 0.0,
            ..Parameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParameterError::InvalidMachineSize(0.0))
        );
    }

    #[test]
    fn derived_rates_sum_to_one() {
        let params = Parameters::default();
        let sum = params.debt_service_rate() + params.retention_rate();
        assert!((sum - 1.0).abs() < 1e-12);
    }
}
