//! Tests for capacity allocation (step 1)
//!
//! Production is funded before investment, each from cash first and then
//! credit, and a rationed investment is floored to whole machines.

use firm_simulator_core_rs::resolution::capacity;
use firm_simulator_core_rs::{Parameters, PeriodInputs};

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
fn test_ample_cash_leaves_credit_untouched() {
    let params = Parameters::default();
    let alloc = capacity::allocate(&inputs(20.0, 40.0, 100.0, 50.0), &params);

    assert_eq!(alloc.production, 20.0);
    assert_eq!(alloc.investment, 40.0);
    assert_eq!(alloc.remaining_liquid_assets, 79.0);
    assert_eq!(alloc.production_loan, 0.0);
}

#[test]
fn test_production_claims_cash_before_investment() {
    let params = Parameters::default();
    // Cash 3 covers production 3 exactly; the machine must come entirely
    // from credit.
    let alloc = capacity::allocate(&inputs(3.0, 40.0, 3.0, 1.0), &params);

    assert_eq!(alloc.production, 3.0);
    assert_eq!(alloc.investment, 40.0);
    assert_eq!(alloc.remaining_liquid_assets, 0.0);
    assert_eq!(alloc.production_loan, 1.0);
}

#[test]
fn test_production_rationed_exhausts_both_pools() {
    let params = Parameters::default();
    let alloc = capacity::allocate(&inputs(50.0, 40.0, 5.0, 30.0), &params);

    assert_eq!(alloc.production, 35.0);
    assert_eq!(alloc.investment, 0.0);
    assert_eq!(alloc.remaining_liquid_assets, 0.0);
    assert_eq!(alloc.production_loan, 30.0);
}

#[test]
fn test_rationed_investment_floors_to_whole_machines() {
    let params = Parameters::default(); // machine_size = 40
    // Pool of 3.7 after production funds floor(3.7) = 3 machines; the 0.7
    // fractional remainder is not returned to cash.
    let alloc = capacity::allocate(&inputs(10.0, 200.0, 13.7, 0.0), &params);

    assert_eq!(alloc.production, 10.0);
    assert_eq!(alloc.investment, 120.0);
    assert_eq!(alloc.remaining_liquid_assets, 0.0);
    assert_eq!(alloc.production_loan, 0.0);
}

#[test]
fn test_investment_tops_up_from_credit() {
    let params = Parameters::default();
    // Production 10 of 10.5 cash; 3 machines cost 3 = 0.5 cash + 2.5 credit.
    let alloc = capacity::allocate(&inputs(10.0, 120.0, 10.5, 5.0), &params);

    assert_eq!(alloc.production, 10.0);
    assert_eq!(alloc.investment, 120.0);
    assert_eq!(alloc.remaining_liquid_assets, 0.0);
    assert!((alloc.production_loan - 2.5).abs() < 1e-12);
}

#[test]
fn test_no_resources_yields_empty_plan() {
    let params = Parameters::default();
    let alloc = capacity::allocate(&inputs(20.0, 40.0, 0.0, 0.0), &params);

    assert_eq!(alloc.production, 0.0);
    assert_eq!(alloc.investment, 0.0);
    assert_eq!(alloc.remaining_liquid_assets, 0.0);
    assert_eq!(alloc.production_loan, 0.0);
}

#[test]
fn test_achieved_plan_never_exceeds_desired() {
    let params = Parameters::default();
    for (dq, dinv, nw, lbar) in [
        (50.0, 80.0, 5.0, 3.0),
        (0.0, 400.0, 2.5, 0.0),
        (12.0, 0.0, 100.0, 0.0),
        (7.0, 40.0, 6.9, 0.05),
    ] {
        let alloc = capacity::allocate(&inputs(dq, dinv, nw, lbar), &params);
        assert!(alloc.production <= dq);
        assert!(alloc.investment <= dinv);
        assert!(alloc.production_loan <= lbar + 1e-12);
        assert!(alloc.remaining_liquid_assets >= 0.0);
    }
}
