//! `rstest-bdd` behavioural suite for `outcome`.
//!
//! [`fixtures`] holds the shared scenario state, [`steps`] the step
//! implementations, and [`scenarios`] binds the `.feature` files under
//! `tests/features` to them.

mod fixtures;
mod scenarios;
mod steps;
