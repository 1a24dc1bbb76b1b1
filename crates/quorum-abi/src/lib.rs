//! Host interface adapter: the single `calculate` operation, in both
//! synchronous and deferred (worker-thread) execution modes, plus an
//! `extern "C"` boundary for embedding in a native host binding layer.
//!
//! All extern "C" exports accept raw pointers from the host; validation
//! happens before the core ever sees them, so per-function safety docs on
//! each FFI wrapper would restate the same contract — see [`ffi`]'s module
//! docs instead.
#![allow(clippy::missing_safety_doc)]

mod calculate;
pub mod ffi;
mod worker;

pub use calculate::{calculate, CalculateError};
pub use worker::spawn_calculate;
