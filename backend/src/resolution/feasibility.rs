//! Feasibility resolution (step 2)
//!
//! Given the capacity-allocated plan, decides whether the implied cash
//! position can cover the debt due this period, and if so computes the
//! exact credit demand and loan split. Infeasible plans are delegated to
//! the adjustment phase that matches how the plan was funded:
//!
//! - cash remained after the plan (the whole credit line is still free)
//!   → trim investment first against a full debt-service loan;
//! - the plan consumed credit → reallocate credit from production funding
//!   to debt service while trimming.

use crate::models::firm::PeriodInputs;
use crate::models::params::Parameters;
use crate::resolution::adjustment;
use crate::resolution::capacity::CapacityAllocation;
use crate::resolution::payment::PaymentTerms;
use crate::resolution::{finalize, Outcome, Resolution};

/// Check the capacity-allocated plan against the payment condition and
/// finalize or delegate to an adjustment.
pub(crate) fn resolve(
    inputs: &PeriodInputs,
    params: &Parameters,
    allocation: &CapacityAllocation,
) -> Resolution {
    let terms = PaymentTerms::new(inputs, params);

    if allocation.remaining_liquid_assets > 0.0 {
        // Case A: cash remains, so the plan was fully cash funded and the
        // whole credit line is still available for debt service.
        debug_assert_eq!(allocation.production_loan, 0.0);

        let without_loan = terms.evaluate(
            allocation.production,
            allocation.remaining_liquid_assets,
            0.0,
            0.0,
        );
        if without_loan >= 0.0 {
            // Expected liquid assets already cover the due debt.
            return finalize(
                Outcome::InternalFunds,
                &terms,
                allocation.production,
                allocation.investment,
                allocation.remaining_liquid_assets,
                0.0,
                0.0,
            );
        }

        let with_full_loan = terms.evaluate(
            allocation.production,
            allocation.remaining_liquid_assets,
            inputs.credit_limit,
            0.0,
        );
        if with_full_loan > 0.0 {
            // A feasible debt loan exists in (0, credit_limit]; linearity
            // gives it in closed form.
            let debt_loan = terms.solve_debt_loan(
                allocation.production,
                allocation.remaining_liquid_assets,
                0.0,
            );
            return finalize(
                Outcome::DebtLoanSolved,
                &terms,
                allocation.production,
                allocation.investment,
                allocation.remaining_liquid_assets,
                0.0,
                debt_loan,
            );
        }

        // Even the whole credit line cannot cover the due debt.
        return adjustment::trim_cash_funded_plan(inputs, params, allocation, &terms);
    }

    // Case B: all cash was used, and possibly some or all of the credit.
    if allocation.production_loan >= inputs.credit_limit {
        // B1: production and investment absorbed the full credit line, so
        // no debt-service loan is possible.
        let expected = terms.evaluate(allocation.production, 0.0, 0.0, allocation.production_loan);
        if expected >= 0.0 {
            return finalize(
                Outcome::FullCreditPlan,
                &terms,
                allocation.production,
                allocation.investment,
                0.0,
                allocation.production_loan,
                0.0,
            );
        }
        return adjustment::reallocate_credit(inputs, params, allocation, &terms);
    }

    // B2: credit partially used; try the whole remaining credit as a debt
    // loan first.
    let headroom = inputs.credit_limit - allocation.production_loan;
    let with_full_loan = terms.evaluate(
        allocation.production,
        0.0,
        headroom,
        allocation.production_loan,
    );
    if with_full_loan > 0.0 {
        // The exact debt loan lies in (0, headroom].
        let debt_loan =
            terms.solve_debt_loan(allocation.production, 0.0, allocation.production_loan);
        return finalize(
            Outcome::DebtLoanSolved,
            &terms,
            allocation.production,
            allocation.investment,
            0.0,
            allocation.production_loan,
            debt_loan,
        );
    }

    // A smaller loan cannot do better; adjust the plan.
    adjustment::reallocate_credit(inputs, params, allocation, &terms)
}
