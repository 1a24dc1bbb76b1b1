//! Validation and buffer-pinning layer standing between an untrusted host
//! and `quorum-core`.
//!
//! `quorum-core` trusts its inputs completely (asserts, doesn't validate);
//! this crate is where caller-supplied numbers and buffers get turned into
//! values the core is allowed to trust, with a human-readable error naming
//! the offending parameter on any violation.

pub mod pin;
pub mod validate;

pub use pin::PinnedBuffers;
pub use validate::{validate, Validated, ValidationError};
