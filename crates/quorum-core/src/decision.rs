//! The four-byte quorum decision emitted per record position.

/// Byte offset of the `leader` field within an encoded decision.
pub const LEADER_OFFSET: usize = 0;
/// Byte offset of the `length` field within an encoded decision.
pub const LENGTH_OFFSET: usize = 1;
/// Byte offset of the `repair` field within an encoded decision.
pub const REPAIR_OFFSET: usize = 2;
/// Byte offset of the `forked` field within an encoded decision.
pub const FORKED_OFFSET: usize = 3;
/// Size in bytes of an encoded decision.
pub const SIZE: usize = 4;

/// The outcome of a quorum decision for a single record position.
///
/// When `forked` is true, `leader`, `length`, and `repair` are always zero:
/// a tie between two distinct versions means no leader is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decision {
    /// Index of the winning source, or 0 when there is no quorum.
    pub leader: u8,
    /// Count of sources endorsing the leader's version, including
    /// transitive endorsements from predecessors.
    pub length: u8,
    /// Count of sources whose version is a predecessor of the leader's.
    pub repair: u8,
    /// True if two distinct versions tied for the maximum endorsement count.
    pub forked: bool,
}

impl Decision {
    /// A decision with no leader, no endorsements, and no fork: the
    /// starting point for the slow decider before any node has resolved.
    pub const NONE: Decision = Decision {
        leader: 0,
        length: 0,
        repair: 0,
        forked: false,
    };

    /// Encodes this decision into the four-byte wire form.
    #[must_use]
    pub fn to_bytes(self) -> [u8; SIZE] {
        if self.forked {
            return [0, 0, 0, 1];
        }
        [self.leader, self.length, self.repair, 0]
    }
}
