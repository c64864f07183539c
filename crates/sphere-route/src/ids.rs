//! Graph node identifier.

use std::fmt;

/// Position of a node in a [`WeightedGraph`](crate::WeightedGraph).
///
/// Ids are handed out densely from 0 as points are added, so comparing two
/// ids compares when their points were first seen.  Dijkstra relies on this
/// to settle equal-cost nodes in a fixed order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// Marks "no predecessor" in routing tables; never issued to a node.
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Id for the node at `index`, or `None` if `index` does not fit below
    /// [`NodeId::INVALID`].
    pub fn from_index(index: usize) -> Option<NodeId> {
        u32::try_from(index).ok().map(NodeId).filter(|id| *id != Self::INVALID)
    }

    /// Slot of this node in per-node vectors.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}
