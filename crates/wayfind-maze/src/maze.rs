//! Grid mazes built from text.
//!
//! A [`Maze`] parses an ASCII grid into walls and walkable cells with one
//! start and one finish, feeds the search engine through [`Expand`] /
//! [`Estimate`], and renders solved paths back onto the grid.

use std::fmt;

use wayfind_graph::{BuildError, Estimate, Expand, Graph, Solution, UNREACHABLE};

use crate::loc::{Loc, manhattan};

/// Wall cell.
pub const WALL: char = '#';
/// Walkable cell.
pub const OPEN: char = ' ';
/// Walkable cell on a solved path. Output only; rejected in input.
pub const PATH: char = '.';
/// Start cell (walkable).
pub const START: char = 'S';
/// Finish cell (walkable).
pub const FINISH: char = 'F';

/// A rectangular grid maze with one start and one finish.
///
/// Cells are stored row-major. Walls block movement; every other cell is
/// walkable and each cardinal step costs 1.
#[derive(Debug, Clone)]
pub struct Maze {
    cells: Vec<char>,
    rows: i32,
    cols: i32,
    start: Loc,
    finish: Loc,
}

impl Maze {
    /// Parse a maze from text.
    ///
    /// Blank lines are skipped; the remaining lines become the grid rows
    /// and must all be the same length. The only characters allowed are
    /// [`WALL`], [`OPEN`], and exactly one [`START`] and one [`FINISH`].
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let mut cells: Vec<char> = Vec::new();
        let mut rows: i32 = 0;
        let mut cols: usize = 0;
        let mut start: Option<Loc> = None;
        let mut finish: Option<Loc> = None;

        for line in text.lines() {
            if line.is_empty() {
                continue;
            }
            let row: Vec<char> = line.chars().collect();
            if rows == 0 {
                cols = row.len();
            } else if row.len() != cols {
                return Err(MazeError::UnevenRow {
                    row: rows,
                    want: cols,
                    got: row.len(),
                });
            }
            for (c, &ch) in row.iter().enumerate() {
                let loc = Loc::new(rows, c as i32);
                match ch {
                    WALL | OPEN => {}
                    START => {
                        if start.replace(loc).is_some() {
                            return Err(MazeError::DuplicateStart(loc));
                        }
                    }
                    FINISH => {
                        if finish.replace(loc).is_some() {
                            return Err(MazeError::DuplicateFinish(loc));
                        }
                    }
                    _ => return Err(MazeError::InvalidChar { ch, loc }),
                }
            }
            cells.extend(row);
            rows += 1;
        }

        if cells.is_empty() {
            return Err(MazeError::Empty);
        }
        let start = start.ok_or(MazeError::MissingStart)?;
        let finish = finish.ok_or(MazeError::MissingFinish)?;

        let maze = Self {
            cells,
            rows,
            cols: cols as i32,
            start,
            finish,
        };
        log::debug!(
            "parsed {}x{} maze, start {}, finish {}",
            maze.rows,
            maze.cols,
            maze.start,
            maze.finish
        );
        Ok(maze)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Loc {
        self.start
    }

    /// The finish cell.
    #[inline]
    pub fn finish(&self) -> Loc {
        self.finish
    }

    /// Whether `loc` lies on the grid.
    #[inline]
    pub fn in_bounds(&self, loc: Loc) -> bool {
        loc.row >= 0 && loc.col >= 0 && loc.row < self.rows && loc.col < self.cols
    }

    /// The character at `loc`, or `None` when out of bounds.
    pub fn at(&self, loc: Loc) -> Option<char> {
        self.idx(loc).map(|i| self.cells[i])
    }

    /// Whether `loc` can be stepped on: on the grid and not a wall.
    pub fn is_walkable(&self, loc: Loc) -> bool {
        matches!(self.at(loc), Some(ch) if ch != WALL)
    }

    /// Flat index of `loc`, or `None` when out of bounds.
    #[inline]
    fn idx(&self, loc: Loc) -> Option<usize> {
        if !self.in_bounds(loc) {
            return None;
        }
        Some(loc.row as usize * self.cols as usize + loc.col as usize)
    }

    /// Shortest path from start to finish, found by A* over Manhattan
    /// estimates.
    ///
    /// Unreachability is a normal outcome: the solution then carries no
    /// path and reports [`UNREACHABLE`] for the finish.
    pub fn solve(&self) -> Result<Solution<Loc>, BuildError<Loc>> {
        let graph = Graph::build_astar(self.start, self)?;
        Ok(graph.solve(&self.start, Some(&self.finish)))
    }

    /// Shortest distance from the start to every reachable cell (Dijkstra).
    pub fn solve_all(&self) -> Result<Solution<Loc>, BuildError<Loc>> {
        let graph = Graph::build(self.start, self)?;
        Ok(graph.solve(&self.start, None))
    }

    /// Copy of the grid with `path` overlaid.
    ///
    /// Path cells other than the start and finish are marked with [`PATH`];
    /// everything else is left as parsed.
    pub fn render(&self, path: &[Loc]) -> String {
        let mut cells = self.cells.clone();
        for loc in path {
            if let Some(i) = self.idx(*loc) {
                if cells[i] != START && cells[i] != FINISH {
                    cells[i] = PATH;
                }
            }
        }
        self.grid_string(&cells)
    }

    /// Distance table for a solution: one five-column field per cell,
    /// right-aligned, with `X` for cells the search never reached.
    pub fn render_dists(&self, solution: &Solution<Loc>) -> String {
        let mut out = String::new();
        for r in 0..self.rows {
            for c in 0..self.cols {
                let d = solution.dist(&Loc::new(r, c));
                if d == UNREACHABLE {
                    out.push_str("    X");
                } else {
                    out.push_str(&format!("{d:>5}"));
                }
            }
            out.push('\n');
        }
        out
    }

    fn grid_string(&self, cells: &[char]) -> String {
        cells
            .chunks(self.cols as usize)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grid_string(&self.cells))
    }
}

impl Expand<Loc> for Maze {
    fn neighbors(&self, loc: &Loc, buf: &mut Vec<(Loc, i64)>) {
        for n in loc.neighbors_4() {
            if self.is_walkable(n) {
                buf.push((n, 1));
            }
        }
    }
}

impl Estimate<Loc> for Maze {
    /// Manhattan distance to the finish, admissible on a unit-cost grid.
    fn estimate(&self, loc: &Loc) -> i64 {
        manhattan(*loc, self.finish)
    }
}

/// Errors that can occur when parsing a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The text contains no grid rows at all.
    Empty,
    /// A row's length differs from the first row's.
    UnevenRow { row: i32, want: usize, got: usize },
    /// A character outside the maze alphabet.
    InvalidChar { ch: char, loc: Loc },
    /// No start cell.
    MissingStart,
    /// A second start cell, reported by its location.
    DuplicateStart(Loc),
    /// No finish cell.
    MissingFinish,
    /// A second finish cell, reported by its location.
    DuplicateFinish(Loc),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze has no cells"),
            Self::UnevenRow { row, want, got } => {
                write!(f, "maze row {row} is {got} cells wide, expected {want}")
            }
            Self::InvalidChar { ch, loc } => {
                write!(f, "maze contains invalid character {ch:?} at {loc}")
            }
            Self::MissingStart => write!(f, "maze has no start ({START:?}) cell"),
            Self::DuplicateStart(loc) => write!(f, "maze has a second start cell at {loc}"),
            Self::MissingFinish => write!(f, "maze has no finish ({FINISH:?}) cell"),
            Self::DuplicateFinish(loc) => write!(f, "maze has a second finish cell at {loc}"),
        }
    }
}

impl std::error::Error for MazeError {}
