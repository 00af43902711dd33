use std::collections::HashMap;

use crate::traits::NodeId;

/// A directed edge with a non-negative cost, keyed by endpoint ids.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<I> {
    pub src: I,
    pub dst: I,
    pub cost: i64,
}

/// A materialized node: its outgoing edges plus the remaining-cost estimate
/// fixed at construction time (0 when built without a heuristic).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<I> {
    pub id: I,
    /// Outgoing edges, in discovery order. Every `src` equals `id`.
    pub edges: Vec<Edge<I>>,
    /// Admissible estimate of the remaining cost to the search goal.
    pub estimate: i64,
}

impl<I: NodeId> Node<I> {
    /// Ids of this node's direct successors, in edge order.
    pub fn neighbor_ids(&self) -> impl Iterator<Item = &I> {
        self.edges.iter().map(|e| &e.dst)
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An id-keyed directed graph, structurally immutable once built.
///
/// Construction goes through [`Graph::build`] / [`Graph::build_astar`],
/// which materialize exactly the set of nodes reachable from a start id.
/// Searches borrow the graph read-only; per-run mutable state lives inside
/// the run, so one graph can serve many searches.
#[derive(Debug, Clone)]
pub struct Graph<I> {
    pub(crate) nodes: HashMap<I, Node<I>>,
}

impl<I: NodeId> Graph<I> {
    /// Look up a node by id.
    #[inline]
    pub fn node(&self, id: &I) -> Option<&Node<I>> {
        self.nodes.get(id)
    }

    /// Whether `id` was materialized, i.e. is reachable from the build start.
    #[inline]
    pub fn contains(&self, id: &I) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of materialized nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes, in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<I>> {
        self.nodes.values()
    }

    /// Total number of edges across all nodes.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.edges.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Expand;

    struct Ring(usize);

    impl Expand<usize> for Ring {
        fn neighbors(&self, id: &usize, buf: &mut Vec<(usize, i64)>) {
            buf.push(((id + 1) % self.0, 1));
        }
    }

    #[test]
    fn lookup_and_counts() {
        let g = Graph::build(0usize, &Ring(4)).unwrap();
        assert_eq!(g.len(), 4);
        assert_eq!(g.edge_count(), 4);
        assert!(!g.is_empty());
        assert!(g.contains(&3));
        assert!(!g.contains(&4));

        let n = g.node(&2).unwrap();
        assert_eq!(n.id, 2);
        assert_eq!(n.neighbor_ids().collect::<Vec<_>>(), vec![&3]);
        assert_eq!(n.estimate, 0);
    }

    #[test]
    fn edges_record_both_endpoints() {
        let g = Graph::build(0usize, &Ring(2)).unwrap();
        let n = g.node(&1).unwrap();
        assert_eq!(
            n.edges,
            vec![Edge {
                src: 1,
                dst: 0,
                cost: 1
            }]
        );
    }
}
