//! Deferred `calculate`: validate on the caller's thread, then run the
//! iterator on a worker thread and report back through a callback.
//!
//! There is no host event loop to hand completion back to here (unlike the
//! upstream N-API addon, which resumes JavaScript on libuv's loop), so this
//! crate models "deferred" the plain standard-library way: a detached
//! `std::thread` that invokes the callback itself when the work is done.

use std::thread::{self, JoinHandle};

use quorum_core::CoreError;
use quorum_membrane::{validate, PinnedBuffers, ValidationError};

/// Validates immediately on the calling thread, then spawns a worker thread
/// that decides every record position and invokes `callback` with the
/// result.
///
/// Validation errors are returned synchronously, before any thread is
/// spawned — only a cyclic-reference error can reach `callback`, the same
/// split the upstream addon makes between its synchronous argument checks
/// and its asynchronous `AsyncWorker::Execute`.
///
/// # Safety
///
/// `sources`, `quorum`, and `target` must stay alive and must not be read or
/// written by anyone else from the moment this function is called until
/// `callback` runs. This is the same contract a host binding layer must
/// uphold when it pins buffer references for a queued async work item; nothing
/// here enforces it.
#[allow(clippy::too_many_arguments)]
pub unsafe fn spawn_calculate(
    vector_offset: i64,
    object_size: i64,
    source_offset: i64,
    source_size: i64,
    sources: &[&[u8]],
    quorum: &mut [u8],
    quorum_offset: i64,
    target: &mut [u8],
    target_offset: i64,
    callback: impl FnOnce(Result<(), CoreError>) + Send + 'static,
) -> Result<JoinHandle<()>, ValidationError> {
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
    let layout = validated.layout;
    let quorum = &mut quorum[validated.quorum_offset..];
    let target = &mut target[validated.target_offset..];

    // SAFETY: forwarding this function's own safety contract.
    let mut pinned = unsafe { PinnedBuffers::new(&validated.sources, quorum, target) };

    Ok(thread::spawn(move || {
        // SAFETY: this closure is the sole owner of `pinned` and calls
        // `borrow` exactly once.
        let (sources, quorum, target) = unsafe { pinned.borrow() };
        let result = quorum_core::iterate(layout, &sources, quorum, target);
        callback(result);
    }))
}
