//! Grid-maze parsing and shortest-path solving.
//!
//! Mazes are ASCII rectangles: `#` walls, space for floor, one `S` start
//! and one `F` finish. [`Maze::solve`] finds a shortest start-to-finish
//! path with A*; [`Maze::solve_all`] computes the distance to every
//! reachable cell. Solved paths render back onto the grid as `.` markers.
//!
//! The searching itself lives in [`wayfind_graph`]; this crate supplies the
//! grid model and its [`Expand`](wayfind_graph::Expand) /
//! [`Estimate`](wayfind_graph::Estimate) implementations.

mod loc;
mod maze;

pub use loc::{Loc, manhattan};
pub use maze::{FINISH, Maze, MazeError, OPEN, PATH, START, WALL};
