//! Step definitions for folding and chaining scenarios.

use anyhow::{Result, anyhow, ensure};
use outcome::{Fault, Outcome};
use rstest_bdd::Slot;
use rstest_bdd_macros::{given, then, when};
use test_helpers::{CallLog, RecordingChain, RecordingFold, text};

use crate::fixtures::OutcomeContext;

fn call_log(slot: &Slot<CallLog>) -> Result<CallLog> {
    slot.get().ok_or_else(|| anyhow!("call log missing from scenario state"))
}

fn take_current(context: &OutcomeContext) -> Result<Outcome<i64>> {
    context
        .current
        .take()
        .ok_or_else(|| anyhow!("no outcome has been produced yet"))
}

fn chain_step<F>(context: &OutcomeContext, step: F) -> Result<()>
where
    F: FnOnce(i64) -> Outcome<i64>,
{
    let log = call_log(&context.chain_calls)?;
    let next = take_current(context)?.chain(RecordingChain::new(&log, step));
    context.current.set(next);
    Ok(())
}

#[given("a successful outcome holding {value}")]
fn successful_outcome(outcome_context: &OutcomeContext, value: i64) -> Result<()> {
    ensure!(outcome_context.current.is_empty(), "outcome already initialised");
    outcome_context.current.set(Outcome::success(value));
    Ok(())
}

#[given("a failed outcome with category {category} and message {message}")]
fn failed_outcome(
    outcome_context: &OutcomeContext,
    category: String,
    message: String,
) -> Result<()> {
    ensure!(outcome_context.current.is_empty(), "outcome already initialised");
    let fault = Fault::new(text::category(&category), text::unquote(&message));
    outcome_context.current.set(Outcome::failure(fault));
    Ok(())
}

#[when("the outcome is folded with increment and a fallback of {fallback}")]
fn fold_with_increment(outcome_context: &OutcomeContext, fallback: i64) -> Result<()> {
    let log = call_log(&outcome_context.fold_calls)?;
    let handler = RecordingFold::new(&log, move |_: Fault| fallback, |x: i64| x + 1);
    let folded = take_current(outcome_context)?.fold(handler);
    outcome_context.folded.set(folded);
    Ok(())
}

#[when("the outcome is chained through doubling")]
fn chain_doubling(outcome_context: &OutcomeContext) -> Result<()> {
    chain_step(outcome_context, |x| Outcome::success(x * 2))
}

#[when("the outcome is chained through incrementing")]
fn chain_incrementing(outcome_context: &OutcomeContext) -> Result<()> {
    chain_step(outcome_context, |x| Outcome::success(x + 1))
}

#[when("the outcome is chained through a failure with category {category}")]
fn chain_failure(outcome_context: &OutcomeContext, category: String) -> Result<()> {
    let fault = Fault::new(text::category(&category), "");
    chain_step(outcome_context, |_| Outcome::failure(fault))
}

#[then("the folded value is {expected}")]
fn folded_value(outcome_context: &OutcomeContext, expected: i64) -> Result<()> {
    let folded = outcome_context
        .folded
        .get()
        .ok_or_else(|| anyhow!("the outcome has not been folded"))?;
    ensure!(folded == expected, "expected {expected}, folded {folded}");
    Ok(())
}

#[then("only the success handler ran")]
fn only_success_ran(outcome_context: &OutcomeContext) -> Result<()> {
    call_log(&outcome_context.fold_calls)?.ensure_calls(1, 0)
}

#[then("only the failure handler ran")]
fn only_failure_ran(outcome_context: &OutcomeContext) -> Result<()> {
    call_log(&outcome_context.fold_calls)?.ensure_calls(0, 1)
}

#[then("the outcome failed with category {category}")]
fn failed_with(outcome_context: &OutcomeContext, category: String) -> Result<()> {
    let expected = text::category(&category);
    let seen = take_current(outcome_context)?.fold_with(
        |fault| Ok(fault.category().clone()),
        |value| Err(anyhow!("expected a failure, got success {value}")),
    )?;
    ensure!(seen == expected, "expected category {expected}, saw {seen}");
    Ok(())
}

#[then("the outcome succeeded with {expected}")]
fn succeeded_with(outcome_context: &OutcomeContext, expected: i64) -> Result<()> {
    let value = take_current(outcome_context)?
        .into_result()
        .map_err(|fault| anyhow!("expected a success, got {fault}"))?;
    ensure!(value == expected, "expected {expected}, got {value}");
    Ok(())
}

#[then("{count} chained steps ran")]
fn chained_steps_ran(outcome_context: &OutcomeContext, count: usize) -> Result<()> {
    call_log(&outcome_context.chain_calls)?.ensure_calls(count, 0)
}
