//! Fast decider: an O(n) scan that decides the overwhelmingly common case —
//! at most two distinct versions among the current sources — without
//! building a dependency graph.

use crate::decision::Decision;
use crate::error::CoreError;
use crate::id;
use crate::vector::Vector;

/// What the fast decider did with a given set of vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastOutcome {
    /// The decision was fully resolved without needing the slow path.
    Decided(Decision),
    /// A predecessor relationship (or a third distinct id) was observed;
    /// the slow decider must build a dependency graph to resolve this.
    Delegate,
}

/// A single candidate version observed during the scan, with the count of
/// sources presenting it and the index of the first source that did.
#[derive(Debug, Clone, Copy)]
struct Chain {
    exemplar: Vector,
    index: u8,
    count: u8,
}

/// Scans `vectors` (one per source, in source order) and either resolves
/// the decision directly or signals that the slow path is needed.
///
/// Rejects immediately with [`CoreError::CyclicReference`] if any vector is
/// a self-cycle — this check happens inline, so a cyclic vector later in
/// the scan is only caught once the scan reaches it.
pub fn decide(vectors: &[Vector]) -> Result<FastOutcome, CoreError> {
    let mut a: Option<Chain> = None;
    let mut b: Option<Chain> = None;

    for (index, vector) in vectors.iter().enumerate() {
        if vector.is_self_cycle() {
            return Err(CoreError::CyclicReference);
        }
        let index = index as u8;

        let Some(chain_a) = a.as_mut() else {
            a = Some(Chain {
                exemplar: *vector,
                index,
                count: 1,
            });
            continue;
        };

        if id::equal(&vector.own_id, &chain_a.exemplar.own_id) {
            chain_a.count += 1;
            continue;
        }
        if id::equal(&vector.own_id, &chain_a.exemplar.predecessor_id)
            || id::equal(&chain_a.exemplar.own_id, &vector.predecessor_id)
        {
            // A partial order exists between the two versions: only the
            // slow path folds predecessor counts correctly.
            return Ok(FastOutcome::Delegate);
        }

        let Some(chain_b) = b.as_mut() else {
            b = Some(Chain {
                exemplar: *vector,
                index,
                count: 1,
            });
            continue;
        };

        if id::equal(&vector.own_id, &chain_b.exemplar.own_id) {
            chain_b.count += 1;
        } else {
            // A third distinct id: more than two chains are in play.
            return Ok(FastOutcome::Delegate);
        }
    }

    // At least one vector is guaranteed by the caller (sources_length >= 1).
    let a = a.expect("decide_fast called with no vectors");
    let decision = match b {
        None => Decision {
            leader: a.index,
            length: a.count,
            repair: 0,
            forked: false,
        },
        Some(b) if b.count == a.count => Decision {
            leader: 0,
            length: 0,
            repair: 0,
            forked: true,
        },
        Some(b) if a.count > b.count => Decision {
            leader: a.index,
            length: a.count,
            repair: 0,
            forked: false,
        },
        Some(b) => Decision {
            leader: b.index,
            length: b.count,
            repair: 0,
            forked: false,
        },
    };
    Ok(FastOutcome::Decided(decision))
}
