//! Slow decider: builds a dependency graph over the observed ids, then
//! performs an iterative depth-first traversal that folds predecessor
//! counts into their successors and detects cycles.

use crate::decision::Decision;
use crate::error::CoreError;
use crate::node_table::{self, NodeTable, DEPENDENT, PERMANENT, TEMPORARY};
use crate::vector::Vector;

/// Running best decision seen so far during the traversal.
///
/// Modeled as an option rather than a zero-initialized triple: a
/// zero-count placeholder node visited before any real dependent node must
/// never spuriously win or fork the decision, and `None` makes that
/// impossible by construction instead of relying on a sentinel count.
struct Best {
    leader: u8,
    length: u8,
    repair: u8,
}

/// Builds the node table for one record position's vectors, then resolves
/// the decision by a topological fold over the resulting graph.
pub fn decide(vectors: &[Vector], nodes: &mut NodeTable) -> Result<Decision, CoreError> {
    nodes.clear();
    build(vectors, nodes);

    let mut best: Option<Best> = None;
    let mut forked = false;

    let mut offset = 0;
    while offset < nodes.len() {
        if !nodes.test(offset, TEMPORARY) && !nodes.test(offset, PERMANENT) {
            visit(nodes, offset, &mut best, &mut forked)?;
        }
        offset += 1;
    }

    Ok(match best {
        Some(_) if forked => Decision {
            leader: 0,
            length: 0,
            repair: 0,
            forked: true,
        },
        Some(b) => Decision {
            leader: b.leader,
            length: b.length,
            repair: b.repair,
            forked: false,
        },
        None => Decision::NONE,
    })
}

/// Inserts every vector's own id (always dependent, incrementing on repeat)
/// and predecessor id (a placeholder, inserted only the first time it's
/// seen and otherwise left untouched) into the table.
fn build(vectors: &[Vector], nodes: &mut NodeTable) {
    for (index, vector) in vectors.iter().enumerate() {
        let index = index as u8;

        match nodes.find_or_reserve(&vector.own_id) {
            node_table::Lookup::Reserved(offset) => {
                nodes.init(offset, DEPENDENT, index, 1, vector.own_id);
                nodes.set_dependent(offset, vector.predecessor_id);
            }
            node_table::Lookup::Found(offset) => {
                nodes.increment_count(offset);
                if !nodes.test(offset, DEPENDENT) {
                    nodes.set_dependent(offset, vector.predecessor_id);
                }
            }
        }

        if let node_table::Lookup::Reserved(offset) = nodes.find_or_reserve(&vector.predecessor_id)
        {
            nodes.init(offset, 0, 0, 0, vector.predecessor_id);
        }
    }
}

/// Resolves the node at `start`, and every unresolved node on its
/// predecessor chain, in one pass — each node has at most one predecessor,
/// so the dependency graph is a forest of chains and an explicit stack
/// following one link at a time is equivalent to (and bounded the same as)
/// native recursion, without relying on the call stack.
fn visit(
    nodes: &mut NodeTable,
    start: usize,
    best: &mut Option<Best>,
    forked: &mut bool,
) -> Result<(), CoreError> {
    let mut chain = Vec::new();
    let mut current = start;

    let mut resolved = loop {
        let entry = *nodes.get(current);
        if entry.flags & PERMANENT != 0 {
            break entry.count;
        }
        if entry.flags & TEMPORARY != 0 {
            return Err(CoreError::CyclicReference);
        }
        nodes.mark(current, TEMPORARY);
        chain.push(current);
        if entry.flags & DEPENDENT != 0 {
            current = nodes
                .find(&entry.predecessor_id)
                .expect("predecessor id was not found in the node table");
        } else {
            break entry.count;
        }
    };

    for offset in chain.into_iter().rev() {
        if nodes.test(offset, DEPENDENT) {
            nodes.fold_carried(offset, resolved);
        }
        nodes.mark(offset, PERMANENT);
        let entry = nodes.get(offset);
        resolved = entry.count;
        update_best(best, forked, entry.source_index, entry.count, entry.carried);
    }

    Ok(())
}

fn update_best(best: &mut Option<Best>, forked: &mut bool, leader: u8, length: u8, repair: u8) {
    match best {
        None => {
            *best = Some(Best {
                leader,
                length,
                repair,
            });
            *forked = false;
        }
        Some(b) if length > b.length => {
            *best = Some(Best {
                leader,
                length,
                repair,
            });
            *forked = false;
        }
        Some(b) if length == b.length => {
            *forked = true;
        }
        Some(_) => {}
    }
}
