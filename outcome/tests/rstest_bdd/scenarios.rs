//! Binds the behavioural feature files to the step registry.

use crate::fixtures::{OutcomeContext, outcome_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/folding.feature",
    fixtures = [outcome_context: OutcomeContext]
);
scenarios!(
    "tests/features/chaining.feature",
    fixtures = [outcome_context: OutcomeContext]
);
