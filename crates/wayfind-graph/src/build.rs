//! Graph construction by reachability sweep.

use std::collections::HashMap;
use std::fmt;

use crate::graph::{Edge, Graph, Node};
use crate::traits::{Estimate, Expand, NodeId};

/// Contract violation reported during graph construction.
///
/// Negative costs and negative estimates void the shortest-path guarantee,
/// so the build fails instead of producing a graph that searches wrongly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError<I> {
    /// The expander produced an edge with a negative cost.
    NegativeCost { src: I, dst: I, cost: i64 },
    /// The heuristic returned a negative remaining-cost estimate.
    NegativeEstimate { id: I, estimate: i64 },
}

impl<I: fmt::Debug> fmt::Display for BuildError<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeCost { src, dst, cost } => {
                write!(f, "negative edge cost {} on {:?} -> {:?}", cost, src, dst)
            }
            Self::NegativeEstimate { id, estimate } => {
                write!(
                    f,
                    "negative remaining-cost estimate {} at {:?}",
                    estimate, id
                )
            }
        }
    }
}

impl<I: fmt::Debug> std::error::Error for BuildError<I> {}

impl<I: NodeId> Graph<I> {
    /// Materialize every node reachable from `start`, without a heuristic.
    ///
    /// All estimates are 0, so a later [`solve`](Graph::solve) degrades to
    /// plain Dijkstra.
    pub fn build<E: Expand<I>>(start: I, expand: &E) -> Result<Self, BuildError<I>> {
        Self::sweep(start, expand, |_| 0)
    }

    /// Materialize every node reachable from `start`, attaching the
    /// expander's remaining-cost estimate to each node as it is discovered.
    pub fn build_astar<E: Estimate<I>>(start: I, expand: &E) -> Result<Self, BuildError<I>> {
        Self::sweep(start, expand, |id| expand.estimate(id))
    }

    /// Iterative depth-first discovery with an explicit stack.
    ///
    /// `neighbors` runs exactly once per node, when the node is popped for
    /// materialization. The sweep ends when the stack drains, i.e. after
    /// visiting exactly the set reachable from `start`.
    fn sweep<E: Expand<I>>(
        start: I,
        expand: &E,
        estimate: impl Fn(&I) -> i64,
    ) -> Result<Self, BuildError<I>> {
        let mut nodes: HashMap<I, Node<I>> = HashMap::new();
        let mut stack = vec![start];
        let mut nbuf: Vec<(I, i64)> = Vec::new();

        while let Some(id) = stack.pop() {
            if nodes.contains_key(&id) {
                continue;
            }

            nbuf.clear();
            expand.neighbors(&id, &mut nbuf);

            let mut edges = Vec::with_capacity(nbuf.len());
            for (dst, cost) in nbuf.drain(..) {
                if cost < 0 {
                    return Err(BuildError::NegativeCost { src: id, dst, cost });
                }
                if !nodes.contains_key(&dst) {
                    stack.push(dst.clone());
                }
                edges.push(Edge {
                    src: id.clone(),
                    dst,
                    cost,
                });
            }

            let est = estimate(&id);
            if est < 0 {
                return Err(BuildError::NegativeEstimate { id, estimate: est });
            }

            nodes.insert(
                id.clone(),
                Node {
                    id,
                    edges,
                    estimate: est,
                },
            );
        }

        let graph = Graph { nodes };
        log::debug!(
            "built graph: {} nodes, {} edges",
            graph.len(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
