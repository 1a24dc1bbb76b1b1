//! Quorum decision engine.
//!
//! Given a fixed number of replicated sources, each presenting a sequence of
//! equal-sized records, this crate decides — per record position — which
//! source holds the canonical version, how many sources agree with it, how
//! many are behind and need repair, and whether the sources have forked.
//!
//! Every record embeds a 32-byte version vector: a 16-byte id for the
//! record's current version, followed by the 16-byte id of the version it
//! succeeds. The decision engine never looks at the rest of the record.
//!
//! No `unsafe` code is permitted at the crate level.

#![deny(unsafe_code)]

pub mod decision;
pub mod error;
pub mod fast;
pub mod id;
pub mod iterator;
pub mod node_table;
pub mod slow;
pub mod vector;

pub use decision::Decision;
pub use error::CoreError;
pub use id::Id;
pub use iterator::iterate;
pub use vector::Vector;

/// Minimum number of sources a decision can be computed over.
pub const SOURCES_MIN: usize = 1;

/// Maximum number of sources a decision can be computed over.
pub const SOURCES_MAX: usize = 255;

/// Width in bytes of an id.
pub const ID: usize = 16;

/// Width in bytes of a version vector (own id || predecessor id).
pub const VECTOR: usize = 32;
