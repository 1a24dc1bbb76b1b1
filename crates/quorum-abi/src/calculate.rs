//! Synchronous `calculate`: validate, then run the iterator on the caller's
//! thread.

use quorum_core::CoreError;
use quorum_membrane::{validate, ValidationError};

/// Everything that can go wrong in one `calculate` call.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CalculateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Validates `sources`/`quorum`/`target` against the geometry described by
/// `vector_offset`/`object_size`/`source_offset`/`source_size`, then decides
/// and writes a quorum outcome for every record position.
///
/// Runs entirely on the calling thread; see [`crate::spawn_calculate`] for
/// the deferred, worker-thread form of this operation.
#[allow(clippy::too_many_arguments)]
pub fn calculate(
    vector_offset: i64,
    object_size: i64,
    source_offset: i64,
    source_size: i64,
    sources: &[&[u8]],
    quorum: &mut [u8],
    quorum_offset: i64,
    target: &mut [u8],
    target_offset: i64,
) -> Result<(), CalculateError> {
    let validated = validate(
        vector_offset,
        object_size,
        source_offset,
        source_size,
        sources,
        quorum.len(),
        quorum_offset,
        target.len(),
        target_offset,
    )?;
    let quorum = &mut quorum[validated.quorum_offset..];
    let target = &mut target[validated.target_offset..];
    quorum_core::iterate(validated.layout, &validated.sources, quorum, target)?;
    Ok(())
}
