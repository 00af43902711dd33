//! Best-first search over a built graph.

use std::collections::{BinaryHeap, HashMap};

use crate::graph::Graph;
use crate::traits::NodeId;

/// Sentinel distance meaning "not reached". Compares greater than every
/// finite distance, and saturating addition keeps it infinite.
pub const UNREACHABLE: i64 = i64::MAX;

// ---------------------------------------------------------------------------
// Per-run state
// ---------------------------------------------------------------------------

/// Mutable search state for one node. Lives in the run, not in the graph,
/// so concurrent runs can share one graph read-only.
struct NodeState<I> {
    /// Best known distance from the start.
    dist: i64,
    /// Predecessor on the best known path.
    parent: Option<I>,
    /// Whether the node sits in the frontier (selected nodes turn false).
    open: bool,
}

impl<I> Default for NodeState<I> {
    fn default() -> Self {
        Self {
            dist: UNREACHABLE,
            parent: None,
            open: false,
        }
    }
}

/// Frontier entry keyed by `(f, seq)` so that `BinaryHeap` (a max-heap)
/// pops the smallest f first and breaks ties by insertion order.
struct OpenEntry<I> {
    f: i64,
    seq: u64,
    id: I,
}

impl<I> PartialEq for OpenEntry<I> {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl<I> Eq for OpenEntry<I> {}

impl<I> Ord for OpenEntry<I> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        (other.f, other.seq).cmp(&(self.f, self.seq))
    }
}

impl<I> PartialOrd for OpenEntry<I> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Solution
// ---------------------------------------------------------------------------

/// Outcome of one search run: a per-node distance map plus, when a goal was
/// given and reached, the reconstructed start-to-goal path.
#[derive(Debug, Clone)]
pub struct Solution<I> {
    dist: HashMap<I, i64>,
    path: Option<Vec<I>>,
}

impl<I: NodeId> PartialEq for Solution<I> {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist && self.path == other.path
    }
}

impl<I: NodeId> Eq for Solution<I> {}

impl<I: NodeId> Solution<I> {
    /// Best known distance from the start to `id`.
    ///
    /// Returns [`UNREACHABLE`] for ids the search never reached, including
    /// ids absent from the graph altogether.
    #[inline]
    pub fn dist(&self, id: &I) -> i64 {
        self.dist.get(id).copied().unwrap_or(UNREACHABLE)
    }

    /// The start-to-goal path, if a goal was specified and reached.
    ///
    /// The slice begins with the start id and ends with the goal id; a
    /// start equal to the goal yields a single-element path.
    pub fn path(&self) -> Option<&[I]> {
        self.path.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

impl<I: NodeId> Graph<I> {
    /// Best-first search from `start`.
    ///
    /// With a goal this is A* over the estimates fixed at build time: the
    /// run stops as soon as the goal is selected, at which point its
    /// distance is final (costs are non-negative and estimates admissible).
    /// With `goal = None` the run exhausts the frontier and computes the
    /// shortest distance from `start` to every reachable node.
    ///
    /// Unreachability is a normal outcome, not an error: the solution then
    /// has no path and reports [`UNREACHABLE`] for the nodes in question.
    /// A `start` missing from the graph yields an all-unreachable solution.
    pub fn solve(&self, start: &I, goal: Option<&I>) -> Solution<I> {
        let mut state: HashMap<I, NodeState<I>> = self
            .nodes
            .keys()
            .map(|id| (id.clone(), NodeState::default()))
            .collect();
        let mut open: BinaryHeap<OpenEntry<I>> = BinaryHeap::new();
        let mut seq: u64 = 0;

        if let (Some(node), Some(st)) = (self.nodes.get(start), state.get_mut(start)) {
            st.dist = 0;
            st.open = true;
            open.push(OpenEntry {
                f: node.estimate,
                seq,
                id: start.clone(),
            });
            seq += 1;
        }

        let mut found: Option<I> = None;
        let mut expanded: usize = 0;

        while let Some(OpenEntry { id, .. }) = open.pop() {
            let Some(st) = state.get_mut(&id) else {
                continue;
            };
            // Entries superseded by a later improvement are skipped here.
            if !st.open {
                continue;
            }

            // A selected goal is final: stop before expanding it.
            if goal == Some(&id) {
                found = Some(id);
                break;
            }

            st.open = false;
            let dist = st.dist;

            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            expanded += 1;

            for edge in &node.edges {
                let Some(next) = self.nodes.get(&edge.dst) else {
                    continue;
                };
                let Some(nst) = state.get_mut(&edge.dst) else {
                    continue;
                };
                let cand = dist.saturating_add(edge.cost);
                if cand >= nst.dist {
                    continue;
                }
                nst.dist = cand;
                nst.parent = Some(id.clone());
                nst.open = true;
                open.push(OpenEntry {
                    f: cand.saturating_add(next.estimate),
                    seq,
                    id: edge.dst.clone(),
                });
                seq += 1;
            }
        }

        let path = found.map(|goal_id| {
            // Walk parent ids back to the start, then reverse.
            let mut rev = Vec::new();
            let mut cur = goal_id;
            loop {
                rev.push(cur.clone());
                match state.get(&cur).and_then(|st| st.parent.clone()) {
                    Some(parent) => cur = parent,
                    None => break,
                }
            }
            rev.reverse();
            rev
        });

        match (&goal, &path) {
            (Some(_), Some(p)) => log::debug!(
                "goal reached after {} expansions; path has {} nodes",
                expanded,
                p.len()
            ),
            (Some(_), None) => log::debug!("goal unreachable after {} expansions", expanded),
            (None, _) => log::debug!("flooded {} of {} nodes", expanded, self.len()),
        }

        let dist = state.into_iter().map(|(id, st)| (id, st.dist)).collect();
        Solution { dist, path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Estimate, Expand};

    /// Expander over a fixed edge list.
    struct Net(Vec<(char, char, i64)>);

    impl Net {
        fn new(edges: &[(char, char, i64)]) -> Self {
            Self(edges.to_vec())
        }
    }

    impl Expand<char> for Net {
        fn neighbors(&self, id: &char, buf: &mut Vec<(char, i64)>) {
            for &(src, dst, cost) in &self.0 {
                if src == *id {
                    buf.push((dst, cost));
                }
            }
        }
    }

    /// A `Net` with a per-node remaining-cost table.
    struct NetH {
        net: Net,
        est: HashMap<char, i64>,
    }

    impl Expand<char> for NetH {
        fn neighbors(&self, id: &char, buf: &mut Vec<(char, i64)>) {
            self.net.neighbors(id, buf);
        }
    }

    impl Estimate<char> for NetH {
        fn estimate(&self, id: &char) -> i64 {
            self.est.get(id).copied().unwrap_or(0)
        }
    }

    /// Brute-force reference: |V| - 1 rounds of full relaxation.
    fn bellman_ford(g: &Graph<char>, start: char) -> HashMap<char, i64> {
        let mut dist: HashMap<char, i64> = g.nodes().map(|n| (n.id, UNREACHABLE)).collect();
        if g.contains(&start) {
            dist.insert(start, 0);
        }
        for _ in 1..g.len() {
            for node in g.nodes() {
                let d = dist[&node.id];
                if d == UNREACHABLE {
                    continue;
                }
                for e in &node.edges {
                    let cand = d + e.cost;
                    if cand < dist[&e.dst] {
                        dist.insert(e.dst, cand);
                    }
                }
            }
        }
        dist
    }

    /// Endpoints, edge existence and cost sum of the reported path.
    fn assert_valid_path(g: &Graph<char>, sol: &Solution<char>, start: char, goal: char) {
        let path = sol.path().expect("expected a path");
        assert_eq!(path[0], start);
        assert_eq!(path[path.len() - 1], goal);

        let mut total = 0;
        for pair in path.windows(2) {
            let node = g.node(&pair[0]).unwrap();
            let edge = node
                .edges
                .iter()
                .filter(|e| e.dst == pair[1])
                .min_by_key(|e| e.cost)
                .expect("consecutive path nodes must share an edge");
            total += edge.cost;
        }
        assert_eq!(total, sol.dist(&goal));
    }

    fn diamond_net() -> Net {
        // Two equal-cost routes from a to d.
        Net::new(&[('a', 'b', 1), ('a', 'c', 1), ('b', 'd', 1), ('c', 'd', 1)])
    }

    #[test]
    fn distances_match_bellman_ford() {
        // The direct a -> e edge and the b -> d shortcut are both traps.
        let net = Net::new(&[
            ('a', 'b', 1),
            ('a', 'c', 4),
            ('b', 'c', 1),
            ('c', 'd', 1),
            ('b', 'd', 10),
            ('d', 'e', 0),
            ('a', 'e', 9),
        ]);
        let g = Graph::build('a', &net).unwrap();
        let sol = g.solve(&'a', None);
        let want = bellman_ford(&g, 'a');

        for id in ['a', 'b', 'c', 'd', 'e'] {
            assert_eq!(sol.dist(&id), want[&id], "distance to {id:?}");
        }
        assert_eq!(sol.dist(&'e'), 3);
    }

    #[test]
    fn goal_path_is_valid_and_optimal() {
        let net = Net::new(&[
            ('a', 'b', 1),
            ('a', 'c', 4),
            ('b', 'c', 1),
            ('c', 'd', 1),
            ('b', 'd', 10),
            ('d', 'e', 0),
            ('a', 'e', 9),
        ]);
        let g = Graph::build('a', &net).unwrap();
        let sol = g.solve(&'a', Some(&'e'));

        assert_eq!(sol.dist(&'e'), 3);
        assert_valid_path(&g, &sol, 'a', 'e');
        assert_eq!(sol.path().unwrap(), ['a', 'b', 'c', 'd', 'e']);
    }

    #[test]
    fn astar_agrees_with_dijkstra() {
        let edges = [('a', 'b', 2), ('b', 'd', 2), ('a', 'c', 3), ('c', 'd', 2)];
        let net = NetH {
            net: Net::new(&edges),
            // Admissible: never above the true remaining cost to d.
            est: HashMap::from([('a', 3), ('b', 2), ('c', 2), ('d', 0)]),
        };

        let plain = Graph::build('a', &net).unwrap();
        let astar = Graph::build_astar('a', &net).unwrap();

        let plain_sol = plain.solve(&'a', Some(&'d'));
        let astar_sol = astar.solve(&'a', Some(&'d'));

        assert_eq!(plain_sol.dist(&'d'), 4);
        assert_eq!(astar_sol.dist(&'d'), 4);
        assert_valid_path(&astar, &astar_sol, 'a', 'd');
    }

    #[test]
    fn equal_cost_ties_resolve_by_insertion_order() {
        let g = Graph::build('a', &diamond_net()).unwrap();
        let sol = g.solve(&'a', Some(&'d'));

        // b enters the frontier before c, so the b route wins the tie.
        assert_eq!(sol.path().unwrap(), ['a', 'b', 'd']);
        assert_eq!(sol.dist(&'d'), 2);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let g = Graph::build('a', &diamond_net()).unwrap();
        assert_eq!(g.solve(&'a', Some(&'d')), g.solve(&'a', Some(&'d')));
        assert_eq!(g.solve(&'a', None), g.solve(&'a', None));
    }

    #[test]
    fn zero_cost_cycles_terminate() {
        let net = Net::new(&[('a', 'b', 0), ('b', 'a', 0), ('b', 'c', 1)]);
        let g = Graph::build('a', &net).unwrap();
        let sol = g.solve(&'a', Some(&'c'));

        assert_eq!(sol.dist(&'b'), 0);
        assert_eq!(sol.dist(&'c'), 1);
        assert_eq!(sol.path().unwrap(), ['a', 'b', 'c']);
    }

    #[test]
    fn all_nodes_mode_reaches_every_node() {
        let net = Net::new(&[('a', 'b', 2), ('b', 'c', 2), ('c', 'd', 2), ('a', 'd', 5)]);
        let g = Graph::build('a', &net).unwrap();
        let sol = g.solve(&'a', None);

        assert!(sol.path().is_none());
        for node in g.nodes() {
            assert_ne!(sol.dist(&node.id), UNREACHABLE);
        }
        assert_eq!(sol.dist(&'d'), 5);
    }

    #[test]
    fn absent_goal_yields_no_path() {
        let net = Net::new(&[('a', 'b', 1)]);
        let g = Graph::build('a', &net).unwrap();
        let sol = g.solve(&'a', Some(&'z'));

        assert!(sol.path().is_none());
        assert_eq!(sol.dist(&'z'), UNREACHABLE);
        // The run still finished as a full sweep.
        assert_eq!(sol.dist(&'b'), 1);
    }

    #[test]
    fn absent_start_yields_empty_solution() {
        let net = Net::new(&[('a', 'b', 1)]);
        let g = Graph::build('a', &net).unwrap();
        let sol = g.solve(&'z', Some(&'b'));

        assert!(sol.path().is_none());
        assert_eq!(sol.dist(&'a'), UNREACHABLE);
        assert_eq!(sol.dist(&'b'), UNREACHABLE);
        assert_eq!(sol.dist(&'z'), UNREACHABLE);
    }

    #[test]
    fn start_equals_goal() {
        let net = Net::new(&[('a', 'b', 1)]);
        let g = Graph::build('a', &net).unwrap();
        let sol = g.solve(&'a', Some(&'a'));

        assert_eq!(sol.path().unwrap(), ['a']);
        assert_eq!(sol.dist(&'a'), 0);
    }

    #[test]
    fn solving_from_a_downstream_start() {
        // Built from a, queried from b: a is upstream and stays unreachable.
        let net = Net::new(&[('a', 'b', 1), ('b', 'c', 1)]);
        let g = Graph::build('a', &net).unwrap();
        let sol = g.solve(&'b', None);

        assert_eq!(sol.dist(&'a'), UNREACHABLE);
        assert_eq!(sol.dist(&'b'), 0);
        assert_eq!(sol.dist(&'c'), 1);
    }

    #[test]
    fn huge_costs_saturate_instead_of_overflowing() {
        let net = Net::new(&[('a', 'b', i64::MAX - 1), ('b', 'c', 5)]);
        let g = Graph::build('a', &net).unwrap();
        let sol = g.solve(&'a', None);

        assert_eq!(sol.dist(&'b'), i64::MAX - 1);
        // b -> c saturates to the sentinel, so c never leaves "unreached".
        assert_eq!(sol.dist(&'c'), UNREACHABLE);
    }
}
