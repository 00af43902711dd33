//! Best-first search over lazily discovered weighted graphs.
//!
//! This crate splits shortest-path work into two phases:
//!
//! - **Build**: [`Graph::build`] / [`Graph::build_astar`] walk outward from a
//!   start id and materialize exactly the reachable nodes, asking an
//!   [`Expand`] implementation for each node's outgoing edges once.
//! - **Solve**: [`Graph::solve`] runs a deterministic best-first search
//!   (A* when the graph carries estimates, Dijkstra otherwise) toward a
//!   goal, or floods the whole graph when no goal is given.
//!
//! The graph is structurally immutable after the build; every search keeps
//! its mutable state to itself, so one graph can serve repeated and
//! concurrent queries.
//!
//! Node identifiers are any cheap-to-clone hashable type (grid locations,
//! integers, interned strings); see [`NodeId`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Expand`] | graph construction; Dijkstra searches |
//! | [`Estimate`] : [`Expand`] | A* searches |

mod build;
mod graph;
mod search;
mod traits;

pub use build::BuildError;
pub use graph::{Edge, Graph, Node};
pub use search::{Solution, UNREACHABLE};
pub use traits::{Estimate, Expand, NodeId};
