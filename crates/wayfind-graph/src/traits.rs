use std::fmt;
use std::hash::Hash;

/// Requirements on node identifiers: cheap to clone, hash and compare.
///
/// Identifiers need no total order; the search breaks cost ties by frontier
/// insertion order instead. Blanket-implemented for every conforming type.
pub trait NodeId: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> NodeId for T {}

/// Minimal discovery interface: enumerates a node's outgoing edges.
pub trait Expand<I: NodeId> {
    /// Append every `(neighbor, cost)` pair leaving `id` into `buf`. The
    /// caller clears `buf` before calling. Costs must be >= 0.
    fn neighbors(&self, id: &I, buf: &mut Vec<(I, i64)>);
}

/// An [`Expand`] with an admissible remaining-cost estimate.
pub trait Estimate<I: NodeId>: Expand<I> {
    /// Estimate of the remaining distance from `id` to the search goal.
    /// Must never overestimate the true cost (admissible) and must be >= 0.
    fn estimate(&self, id: &I) -> i64;
}
