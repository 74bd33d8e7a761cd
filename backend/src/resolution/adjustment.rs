//! Feasibility repair (adjustment phases)
//!
//! Entered only when the capacity-allocated plan cannot service the due
//! debt even with the credit still available. Both phases exploit the same
//! two facts:
//!
//! - the payment condition is strictly increasing in the debt loan, so the
//!   best starting point sets the debt loan to all credit not funding the
//!   plan;
//! - trimming one machine of investment frees exactly its unit cost, so
//!   feasibility can be repaired in whole machine-unit steps before any
//!   production trim, and production trims admit closed-form zeroes.
//!
//! When the payment condition is non-decreasing in production
//! (margin >= unit production cost), trimming production cannot help:
//! sales are bounded by demand, so the firm keeps its plan, takes no loan,
//! and bears the loss. When it is decreasing, the mean value theorem gives
//! a production level with payment exactly zero; only its sign must be
//! checked, with full shutdown as the loss-minimizing fallback.

use crate::models::firm::PeriodInputs;
use crate::models::params::Parameters;
use crate::resolution::capacity::CapacityAllocation;
use crate::resolution::payment::PaymentTerms;
use crate::resolution::{finalize, Outcome, Resolution};

/// Adjustment for a fully cash-funded plan (entered from case A).
///
/// The plan left cash over, so no credit funds it and the whole credit
/// line backs debt service. Trims investment one machine at a time,
/// crediting each freed unit cost back to cash, and falls through to the
/// production stage if investment runs out.
pub(crate) fn trim_cash_funded_plan(
    inputs: &PeriodInputs,
    params: &Parameters,
    allocation: &CapacityAllocation,
    terms: &PaymentTerms,
) -> Resolution {
    let production = allocation.production;
    let debt_loan = inputs.credit_limit;

    let mut investment = allocation.investment;
    let mut cash = allocation.remaining_liquid_assets;

    while terms.evaluate(production, cash, debt_loan, 0.0) < 0.0 && investment > 0.0 {
        investment -= params.machine_size;
        cash += 1.0; // one machine costs 1
    }

    if terms.evaluate(production, cash, debt_loan, 0.0) >= 0.0 {
        return finalize(
            Outcome::InvestmentTrimmed,
            terms,
            production,
            investment,
            cash,
            0.0,
            debt_loan,
        );
    }

    // Investment is gone and the payment condition still fails.
    resolve_production_stage(inputs, production, terms)
}

/// Adjustment for a plan that consumed credit (entered from case B).
///
/// While trimming investment, each removed machine hands its funding
/// source back to debt capacity: a credit-funded machine moves one unit of
/// credit from the production loan to the debt loan, a cash-funded machine
/// returns its unit cost to cash. The boundary machine may be split
/// between the two sources and is handled fractionally.
pub(crate) fn reallocate_credit(
    inputs: &PeriodInputs,
    params: &Parameters,
    allocation: &CapacityAllocation,
    terms: &PaymentTerms,
) -> Resolution {
    let production = allocation.production;

    let mut investment = allocation.investment;
    let mut cash = allocation.remaining_liquid_assets;
    let mut production_loan = allocation.production_loan;
    let mut debt_loan = (inputs.credit_limit - production_loan).max(0.0);

    while terms.evaluate(production, cash, debt_loan, production_loan) < 0.0 && investment > 0.0 {
        if production_loan > 0.0 {
            if production_loan > 1.0 {
                // Machine fully credit funded: pure reallocation.
                production_loan -= 1.0;
                debt_loan += 1.0;
            } else {
                // Boundary machine, partly credit and partly cash funded:
                // the credit part joins the debt loan, the cash part
                // returns to savings.
                cash += 1.0 - production_loan;
                production_loan = 0.0;
                debt_loan = inputs.credit_limit;
            }
        } else {
            // Machine funded from internal funds.
            cash += 1.0;
        }
        investment -= params.machine_size;
    }

    if terms.evaluate(production, cash, debt_loan, production_loan) >= 0.0 {
        return finalize(
            Outcome::InvestmentTrimmed,
            terms,
            production,
            investment,
            cash,
            production_loan,
            debt_loan,
        );
    }

    // Investment exhausted; adjust through production.
    if production_loan > 0.0 && terms.cash_funded_production_slope() < 0.0 {
        // Part of production is credit funded, so the payment condition has
        // a funding breakpoint at the production level where all credit
        // shifts to debt service (production loan zero, debt loan at the
        // limit). Locate the solution relative to that point.
        let q_break = inputs.desired_production.min(inputs.liquid_assets);
        let at_break = terms.evaluate(
            q_break,
            inputs.liquid_assets - q_break,
            inputs.credit_limit,
            0.0,
        );

        if at_break >= 0.0 {
            // The zero lies at or right of the breakpoint: production keeps
            // a credit-funded part and the whole credit line is drawn.
            let q = terms.solve_cash_funded_production(inputs.liquid_assets, inputs.credit_limit);
            let production_loan = (q - inputs.liquid_assets).max(0.0);
            let debt_loan = inputs.credit_limit - production_loan;
            return finalize(
                Outcome::ProductionSolved,
                terms,
                q,
                0.0,
                (inputs.liquid_assets - q).max(0.0),
                production_loan,
                debt_loan,
            );
        }
        // The zero lies strictly left of the breakpoint, on the cash-funded
        // segment: fall through to the single-segment solve.
    }

    resolve_production_stage(inputs, production, terms)
}

/// Production stage on the cash-funded segment, shared by both adjustments
/// once investment is zero.
///
/// With the debt loan pinned at the credit limit, the payment condition is
/// linear in production with slope `margin - 1`. On the decreasing side the
/// closed form yields the exact zero; a non-positive root means no
/// production level works and the firm shuts the period down. On the
/// non-decreasing side no trim can help, so the plan is kept without any
/// loan.
fn resolve_production_stage(
    inputs: &PeriodInputs,
    achieved_production: f64,
    terms: &PaymentTerms,
) -> Resolution {
    if terms.cash_funded_production_slope() < 0.0 {
        let debt_loan = inputs.credit_limit;
        let q = terms.solve_cash_funded_production(inputs.liquid_assets, debt_loan);

        if q > 0.0 {
            return finalize(
                Outcome::ProductionSolved,
                terms,
                q,
                0.0,
                inputs.liquid_assets - q,
                0.0,
                debt_loan,
            );
        }

        // Not even zero production satisfies the condition; keep all cash
        // in savings and take no loan rather than leverage a lost period.
        return finalize(
            Outcome::Shutdown,
            terms,
            0.0,
            0.0,
            inputs.liquid_assets,
            0.0,
            0.0,
        );
    }

    // Funds are worth no more saved than produced: trimming production only
    // lowers the payment condition. Keep the achieved plan, no loan.
    finalize(
        Outcome::ProductionUnadjustable,
        terms,
        achieved_production,
        0.0,
        (inputs.liquid_assets - achieved_production).max(0.0),
        0.0,
        0.0,
    )
}
