//! Walks a record stream, deciding and writing quorum metadata and the
//! winning record bytes for each position.

use crate::decision::{self, Decision};
use crate::error::CoreError;
use crate::fast::{self, FastOutcome};
use crate::node_table::NodeTable;
use crate::slow;
use crate::vector::Vector;

/// Geometry shared by every source in one `iterate` call.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// Byte offset of the version vector within each record.
    pub vector_offset: usize,
    /// Size in bytes of a single record.
    pub object_size: usize,
    /// Size in bytes of one source (a whole multiple of `object_size`).
    pub source_size: usize,
}

impl Layout {
    /// Number of record positions implied by this layout.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.source_size / self.object_size
    }
}

/// Walks every record position across `sources`, deciding a leader for
/// each and writing the four-byte decision into `quorum` and the leader's
/// record bytes (or zeros, on no quorum) into `target`.
///
/// `quorum` must be at least `layout.record_count() * 4` bytes; `target`
/// must be at least `layout.source_size` bytes. Bounds are asserted, not
/// checked: validating caller-supplied geometry is `quorum-membrane`'s job.
///
/// On a cyclic-reference error, outputs for positions before the failing
/// one are fully written and valid; outputs from the failing position
/// onward are left as whatever `quorum`/`target` already contained.
pub fn iterate(
    layout: Layout,
    sources: &[&[u8]],
    quorum: &mut [u8],
    target: &mut [u8],
) -> Result<(), CoreError> {
    assert!(layout.object_size >= layout.vector_offset + 32);
    assert!(layout.source_size >= layout.object_size);
    assert_eq!(layout.source_size % layout.object_size, 0);
    assert!(!sources.is_empty() && sources.len() <= 255);
    assert!(quorum.len() >= layout.record_count() * decision::SIZE);
    assert!(target.len() >= layout.source_size);

    let mut nodes = NodeTable::new();
    let mut vectors = Vec::with_capacity(sources.len());

    let mut record_offset = 0;
    while record_offset < layout.source_size {
        let base = record_offset + layout.vector_offset;
        vectors.clear();
        for source in sources {
            vectors.push(Vector::from_bytes(&source[base..base + 32]));
        }

        let decision = decide(&vectors, &mut nodes)?;

        let quorum_offset = (record_offset / layout.object_size) * decision::SIZE;
        quorum[quorum_offset..quorum_offset + decision::SIZE]
            .copy_from_slice(&decision.to_bytes());

        let record = &mut target[record_offset..record_offset + layout.object_size];
        if decision.length > 0 {
            let leader = sources[decision.leader as usize];
            record.copy_from_slice(&leader[record_offset..record_offset + layout.object_size]);
        } else {
            record.fill(0);
        }

        record_offset += layout.object_size;
    }

    Ok(())
}

/// Decides one record position: the fast path handles the common shapes,
/// delegating to the slow path only when a predecessor relationship or a
/// third distinct id is observed.
fn decide(vectors: &[Vector], nodes: &mut NodeTable) -> Result<Decision, CoreError> {
    match fast::decide(vectors)? {
        FastOutcome::Decided(decision) => Ok(decision),
        FastOutcome::Delegate => slow::decide(vectors, nodes),
    }
}
