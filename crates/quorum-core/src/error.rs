//! Core error taxonomy.
//!
//! `quorum-core` never pulls in an error-derive crate: the only failure mode
//! reachable from user input is a single unit variant, and a hand-written
//! `Display` impl is simpler than a dependency for one sentence of text.

use std::fmt;

/// Failure modes the decision engine itself can report.
///
/// Internal consistency violations (arena overflow, impossible counts) are
/// not part of this type — those are programming errors and are asserted,
/// not returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// A vector's own id equals its predecessor id, or a predecessor chain
    /// cycles back on itself within a single record position.
    CyclicReference,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::CyclicReference => {
                write!(f, "vectors must not have cyclic references")
            }
        }
    }
}

impl std::error::Error for CoreError {}
