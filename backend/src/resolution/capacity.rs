//! Capacity allocation (step 1)
//!
//! Determines how much of the desired production and investment plan can be
//! financed from liquid assets plus the credit line, before any
//! debt-service consideration. Funding is cash first, then credit,
//! sequentially for production and then investment, drawing on the same two
//! pools.
//!
//! This phase is total: it always returns a plan, scaled down to exactly
//! the liquidity + credit envelope when the desired plan does not fit.

use crate::models::firm::PeriodInputs;
use crate::models::params::Parameters;
use serde::{Deserialize, Serialize};

/// Capacity-feasible plan, before the debt-service feasibility check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityAllocation {
    /// Production achievable with current resources, <= desired
    pub production: f64,

    /// Investment achievable with current resources, <= desired, whole
    /// machine units
    pub investment: f64,

    /// Liquid assets left after funding the achieved plan from cash
    pub remaining_liquid_assets: f64,

    /// Portion of the credit limit consumed to fund production and
    /// investment
    pub production_loan: f64,
}

/// Allocate the desired plan against cash and credit.
///
/// Production is funded first: from cash alone if it fits, then topping up
/// from credit, and otherwise scaled down to exactly `cash + credit` with
/// both pools exhausted. Investment repeats the same three-way split on
/// whatever remains, except that a rationed investment is floored to whole
/// machine units (`floor(pool) · machine_size`, one machine costing 1) and
/// the fractional remainder of the pool is left unused.
pub fn allocate(inputs: &PeriodInputs, params: &Parameters) -> CapacityAllocation {
    let mut production = inputs.desired_production;
    let mut investment = inputs.desired_investment;
    let investment_cost = inputs.desired_investment_cost(params);

    let mut cash = inputs.liquid_assets;
    let mut credit = inputs.credit_limit;

    // Production: cash, then credit, then ration.
    if production <= cash {
        cash -= production;
    } else if production <= cash + credit {
        credit -= production - cash;
        cash = 0.0;
    } else {
        production = cash + credit;
        credit = 0.0;
        cash = 0.0;
    }

    // Investment: same three-way split on the remaining pools.
    if investment_cost <= cash {
        cash -= investment_cost;
    } else if investment_cost <= cash + credit {
        credit -= investment_cost - cash;
        cash = 0.0;
    } else {
        investment = (cash + credit).floor() * params.machine_size;
        credit = 0.0;
        cash = 0.0;
    }

    CapacityAllocation {
        production,
        investment,
        remaining_liquid_assets: cash,
        production_loan: inputs.credit_limit - credit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(
        desired_production: f64,
        desired_investment: f64,
        liquid_assets: f64,
        credit_limit: f64,
    ) -> PeriodInputs {
        PeriodInputs::new(
            desired_production,
            desired_investment,
            liquid_assets,
            credit_limit,
            0.0,
            &Parameters::default(),
        )
    }

    #[test]
    fn plan_fully_cash_funded() {
        let params = Parameters::default();
        let alloc = allocate(&inputs(20.0, 40.0, 100.0, 50.0), &params);

        assert_eq!(alloc.production, 20.0);
        assert_eq!(alloc.investment, 40.0);
        // 100 - 20 production - 1 machine
        assert_eq!(alloc.remaining_liquid_assets, 79.0);
        assert_eq!(alloc.production_loan, 0.0);
    }

    #[test]
    fn production_tops_up_from_credit() {
        let params = Parameters::default();
        let alloc = allocate(&inputs(20.0, 0.0, 5.0, 30.0), &params);

        assert_eq!(alloc.production, 20.0);
        assert_eq!(alloc.remaining_liquid_assets, 0.0);
        assert_eq!(alloc.production_loan, 15.0);
    }

    #[test]
    fn production_rationed_to_envelope() {
        let params = Parameters::default();
        let alloc = allocate(&inputs(50.0, 0.0, 5.0, 30.0), &params);

        assert_eq!(alloc.production, 35.0);
        assert_eq!(alloc.investment, 0.0);
        assert_eq!(alloc.remaining_liquid_assets, 0.0);
        // Both pools exhausted by production.
        assert_eq!(alloc.production_loan, 30.0);
    }

    #[test]
    fn investment_rationed_floors_to_whole_machines() {
        let params = Parameters::default(); // machine_size = 40
        // Production takes 10 of 12.5 cash; pool of 2.5 left for 4 machines.
        let alloc = allocate(&inputs(10.0, 160.0, 12.5, 0.0), &params);

        assert_eq!(alloc.production, 10.0);
        // floor(2.5) = 2 machines of size 40
        assert_eq!(alloc.investment, 80.0);
        // Fractional remainder of the pool is not returned.
        assert_eq!(alloc.remaining_liquid_assets, 0.0);
        assert_eq!(alloc.production_loan, 0.0);
    }

    #[test]
    fn investment_splits_across_cash_and_credit() {
        let params = Parameters::default();
        // Production 10 from 10.5 cash; 3 machines cost 3: 0.5 cash + 2.5 credit.
        let alloc = allocate(&inputs(10.0, 120.0, 10.5, 5.0), &params);

        assert_eq!(alloc.production, 10.0);
        assert_eq!(alloc.investment, 120.0);
        assert_eq!(alloc.remaining_liquid_assets, 0.0);
        assert!((alloc.production_loan - 2.5).abs() < 1e-12);
    }

    #[test]
    fn zero_resources_zero_plan() {
        let params = Parameters::default();
        let alloc = allocate(&inputs(20.0, 40.0, 0.0, 0.0), &params);

        assert_eq!(alloc.production, 0.0);
        assert_eq!(alloc.investment, 0.0);
        assert_eq!(alloc.remaining_liquid_assets, 0.0);
        assert_eq!(alloc.production_loan, 0.0);
    }
}
