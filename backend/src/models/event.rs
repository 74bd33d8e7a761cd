//! Event logging for simulation replay and auditing.
//!
//! Captures, per firm and per period, the phase decisions of the
//! resolution engine: the exogenous draws, the capacity allocation, and
//! the branch that finalized the period with its key decision variables.
//! The log replaces diagnostic printing; it is queryable per period and
//! per firm after a run.

use crate::resolution::Outcome;
use serde::{Deserialize, Serialize};

/// Simulation event capturing a phase decision.
///
/// All events carry a period number for temporal ordering; events are
/// logged in the order they occur within a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A new period began
    PeriodStarted { period: usize, num_firms: usize },

    /// Exogenous draws populated a firm for the period
    DrawsGenerated {
        period: usize,
        firm_id: usize,
        desired_production: f64,
        desired_investment: f64,
        liquid_assets: f64,
        credit_limit: f64,
        outstanding_debt: f64,
    },

    /// Capacity allocation (step 1) produced an achievable plan
    CapacityAllocated {
        period: usize,
        firm_id: usize,
        production: f64,
        investment: f64,
        remaining_liquid_assets: f64,
        production_loan: f64,
    },

    /// Feasibility resolution finalized the firm's period
    PeriodResolved {
        period: usize,
        firm_id: usize,
        outcome: Outcome,
        production: f64,
        investment: f64,
        credit_demand: f64,
        payment: f64,
    },
}

impl Event {
    /// Period at which this event occurred
    pub fn period(&self) -> usize {
        match self {
            Event::PeriodStarted { period, .. }
            | Event::DrawsGenerated { period, .. }
            | Event::CapacityAllocated { period, .. }
            | Event::PeriodResolved { period, .. } => *period,
        }
    }

    /// Firm this event concerns, if any
    pub fn firm_id(&self) -> Option<usize> {
        match self {
            Event::PeriodStarted { .. } => None,
            Event::DrawsGenerated { firm_id, .. }
            | Event::CapacityAllocated { firm_id, .. }
            | Event::PeriodResolved { firm_id, .. } => Some(*firm_id),
        }
    }

    /// Short type tag for filtering
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::PeriodStarted { .. } => "period_started",
            Event::DrawsGenerated { .. } => "draws_generated",
            Event::CapacityAllocated { .. } => "capacity_allocated",
            Event::PeriodResolved { .. } => "period_resolved",
        }
    }
}

/// Append-only log of simulation events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events, in logging order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events of a specific period
    pub fn events_at_period(&self, period: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.period() == period).collect()
    }

    /// Events concerning a specific firm
    pub fn events_for_firm(&self, firm_id: usize) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.firm_id() == Some(firm_id))
            .collect()
    }

    /// Events of a specific type tag
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
