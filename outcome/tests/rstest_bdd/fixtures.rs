//! Shared fixtures for the `rstest-bdd` behavioural scenarios.

use outcome::Outcome;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::CallLog;

/// Scenario state threading one outcome through the steps of a scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct OutcomeContext {
    /// Outcome produced by the most recent step.
    pub current: Slot<Outcome<i64>>,
    /// Value produced by folding `current`.
    pub folded: Slot<i64>,
    /// Invocations of the fold handler.
    pub fold_calls: Slot<CallLog>,
    /// Invocations of chained steps.
    pub chain_calls: Slot<CallLog>,
}

/// Creates a clean context with fresh call logs.
#[fixture]
pub fn outcome_context() -> OutcomeContext {
    let context = OutcomeContext::default();
    context.fold_calls.set(CallLog::new());
    context.chain_calls.set(CallLog::new());
    context
}
