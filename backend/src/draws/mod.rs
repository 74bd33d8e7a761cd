//! Exogenous period-input generation.
//!
//! Each simulated period, every firm receives four fresh draws (desired
//! production, desired investment, liquid assets, credit limit) plus the
//! debt it carries into the period. This module generates those draws
//! deterministically from the shared seeded RNG.
//!
//! # Key Principles
//!
//! 1. **Determinism**: same seed + same config → same draws
//! 2. **Fixed draw order**: past demand, production shortfall, liquid
//!    assets, investment, debt, credit limit — changing the order changes
//!    every subsequent draw of the run
//! 3. **Whole machines**: the investment draw is floored to a multiple of
//!    the machine size
//!
//! # Example
//!
//! ```
//! use firm_simulator_core_rs::draws::{DrawConfig, DrawGenerator};
//! use firm_simulator_core_rs::{Parameters, RngManager};
//!
//! let params = Parameters::default();
//! let generator = DrawGenerator::new(DrawConfig::default());
//! let mut rng = RngManager::new(42);
//!
//! let inputs = generator.generate_for_firm(&params, &mut rng);
//! assert!(inputs.desired_production >= 0.0);
//! assert_eq!(inputs.desired_investment % params.machine_size, 0.0);
//! ```

use crate::models::firm::PeriodInputs;
use crate::models::params::Parameters;
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};

/// Configuration for the per-period exogenous draws.
///
/// Defaults reproduce the reference calibration: demand up to 20 with a
/// shortfall of up to 5, liquid assets uniform on [0, 5), investment up to
/// 400 units, debt uniform on [0, 5), credit limit uniform on [0, 10).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Exclusive upper bound of the integer past-demand draw
    pub max_past_demand: i64,

    /// Exclusive upper bound of the integer shortfall subtracted from past
    /// demand to form desired production
    pub max_demand_shortfall: i64,

    /// Scale of the uniform liquid-asset draw
    pub liquid_assets_scale: f64,

    /// Exclusive upper bound of the integer desired-investment draw, in
    /// investment units before flooring to whole machines
    pub max_investment: i64,

    /// Scale of the uniform outstanding-debt draw
    pub debt_scale: f64,

    /// Scale of the uniform credit-limit draw
    pub credit_limit_scale: f64,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            max_past_demand: 20,
            max_demand_shortfall: 5,
            liquid_assets_scale: 5.0,
            max_investment: 400,
            debt_scale: 5.0,
            credit_limit_scale: 10.0,
        }
    }
}

/// Generator of period inputs for the firms of a simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawGenerator {
    config: DrawConfig,
}

impl DrawGenerator {
    /// Create a generator from a draw configuration.
    pub fn new(config: DrawConfig) -> Self {
        Self { config }
    }

    /// The generator's configuration
    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Generate one firm's period inputs, advancing the shared RNG.
    ///
    /// Desired production is past demand minus a shortfall, clamped at
    /// zero (plans are non-negative reals). Desired investment is floored
    /// to a whole multiple of the machine size.
    pub fn generate_for_firm(&self, params: &Parameters, rng: &mut RngManager) -> PeriodInputs {
        let past_demand = rng.range(0, self.config.max_past_demand) as f64;
        let shortfall = rng.range(0, self.config.max_demand_shortfall) as f64;
        let desired_production = (past_demand - shortfall).max(0.0);

        let liquid_assets = rng.uniform(self.config.liquid_assets_scale);

        let raw_investment = rng.range(0, self.config.max_investment) as f64;
        let desired_investment = (raw_investment / params.machine_size).floor() * params.machine_size;

        let outstanding_debt = rng.uniform(self.config.debt_scale);
        let credit_limit = rng.uniform(self.config.credit_limit_scale);

        PeriodInputs::new(
            desired_production,
            desired_investment,
            liquid_assets,
            credit_limit,
            outstanding_debt,
            params,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_deterministic() {
        let params = Parameters::default();
        let generator = DrawGenerator::new(DrawConfig::default());

        let mut rng1 = RngManager::new(42);
        let mut rng2 = RngManager::new(42);

        for _ in 0..50 {
            let a = generator.generate_for_firm(&params, &mut rng1);
            let b = generator.generate_for_firm(&params, &mut rng2);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_draws_within_configured_ranges() {
        let params = Parameters::default();
        let generator = DrawGenerator::new(DrawConfig::default());
        let mut rng = RngManager::new(7);

        for _ in 0..500 {
            let inputs = generator.generate_for_firm(&params, &mut rng);

            assert!(inputs.desired_production >= 0.0);
            assert!(inputs.desired_production < 20.0);
            assert!((0.0..5.0).contains(&inputs.liquid_assets));
            assert!((0.0..400.0).contains(&inputs.desired_investment));
            assert!((0.0..5.0).contains(&inputs.outstanding_debt));
            assert!((0.0..10.0).contains(&inputs.credit_limit));
        }
    }

    #[test]
    fn test_investment_is_whole_machines() {
        let params = Parameters::default();
        let generator = DrawGenerator::new(DrawConfig::default());
        let mut rng = RngManager::new(99);

        for _ in 0..500 {
            let inputs = generator.generate_for_firm(&params, &mut rng);
            let machines = inputs.desired_investment / params.machine_size;
            assert_eq!(machines, machines.floor());
        }
    }

    #[test]
    fn test_production_clamped_at_zero() {
        // Shortfall bound above the demand bound forces negative raw draws.
        let config = DrawConfig {
            max_past_demand: 2,
            max_demand_shortfall: 10,
            ..DrawConfig::default()
        };
        let params = Parameters::default();
        let generator = DrawGenerator::new(config);
        let mut rng = RngManager::new(5);

        let mut clamped = 0;
        for _ in 0..200 {
            let inputs = generator.generate_for_firm(&params, &mut rng);
            assert!(inputs.desired_production >= 0.0);
            if inputs.desired_production == 0.0 {
                clamped += 1;
            }
        }
        assert!(clamped > 0, "expected some draws to clamp at zero");
    }
}
