//! Conformance harness for the quorum decision engine: loads fixture files
//! describing a `calculate`-shaped call and its expected outcome, runs them
//! through `quorum-core`, and reports pass/fail per fixture.

pub mod fixtures;
pub mod runner;
pub mod structured_log;

pub use fixtures::{FixtureCase, FixtureError};
pub use runner::{run_case, CaseResult};
