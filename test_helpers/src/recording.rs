//! Handlers that record which dispatch method an outcome invoked.
//!
//! A [`CallLog`] is shared between the test and the handlers it builds. Each
//! handler bumps the matching counter before delegating to its closure, so a
//! test can assert that a fold reached exactly one method or that a chained
//! step never ran.
//!
//! # Examples
//!
//! ```
//! use outcome::Outcome;
//! use outcome_test_helpers::{CallLog, RecordingFold};
//!
//! let log = CallLog::new();
//! let handler = RecordingFold::new(&log, |_: outcome::Fault| -1, |x: i32| x + 1);
//! let folded = Outcome::success(42).fold(handler);
//! assert_eq!(folded, 43);
//! log.ensure_calls(1, 0).expect("one success call");
//! ```

use std::sync::Arc;

use anyhow::{Result, ensure};
use outcome::{Fault, Outcome, ResultHandler, SuccessHandler};
use parking_lot::Mutex;

/// Snapshot of the invocations recorded by a [`CallLog`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Calls {
    /// Number of success-method invocations.
    pub successes: usize,
    /// Number of failure-method invocations.
    pub failures: usize,
}

/// Shared, thread-safe tally of handler invocations.
#[derive(Debug, Default, Clone)]
pub struct CallLog(Arc<Mutex<Calls>>);

impl CallLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the invocations recorded so far.
    #[must_use]
    pub fn snapshot(&self) -> Calls {
        *self.0.lock()
    }

    /// Checks the recorded invocation counts.
    ///
    /// # Errors
    ///
    /// Returns an error describing the mismatch when either count differs.
    pub fn ensure_calls(&self, successes: usize, failures: usize) -> Result<()> {
        let calls = self.snapshot();
        ensure!(
            calls.successes == successes,
            "expected {successes} success call(s), saw {}",
            calls.successes
        );
        ensure!(
            calls.failures == failures,
            "expected {failures} failure call(s), saw {}",
            calls.failures
        );
        Ok(())
    }

    fn record_success(&self) {
        self.0.lock().successes += 1;
    }

    fn record_failure(&self) {
        self.0.lock().failures += 1;
    }
}

/// [`ResultHandler`] that records its invocation before delegating.
pub struct RecordingFold<F, G> {
    log: CallLog,
    on_failure: F,
    on_success: G,
}

impl<F, G> RecordingFold<F, G> {
    /// Wraps a pair of closures, recording into `log`.
    #[must_use]
    pub fn new(log: &CallLog, on_failure: F, on_success: G) -> Self {
        Self {
            log: log.clone(),
            on_failure,
            on_success,
        }
    }
}

impl<S, T, F, G> ResultHandler<S, T> for RecordingFold<F, G>
where
    F: FnOnce(Fault) -> T,
    G: FnOnce(S) -> T,
{
    fn on_failure(self, fault: Fault) -> T {
        self.log.record_failure();
        (self.on_failure)(fault)
    }

    fn on_success(self, value: S) -> T {
        self.log.record_success();
        (self.on_success)(value)
    }
}

/// [`SuccessHandler`] that records its invocation before running the step.
pub struct RecordingChain<F> {
    log: CallLog,
    step: F,
}

impl<F> RecordingChain<F> {
    /// Wraps a chained step, recording into `log`.
    #[must_use]
    pub fn new(log: &CallLog, step: F) -> Self {
        Self {
            log: log.clone(),
            step,
        }
    }
}

impl<S, T, F> SuccessHandler<S, T> for RecordingChain<F>
where
    F: FnOnce(S) -> Outcome<T>,
{
    fn on_success(self, value: S) -> Outcome<T> {
        self.log.record_success();
        (self.step)(value)
    }
}
