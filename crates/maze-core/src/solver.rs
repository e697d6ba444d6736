//! Depth-first escape finder.
//!
//! The solver never touches the maze it was built from: it works on a copy
//! of the printable grid and rebuilds its own full-resolution cell graph, so
//! it handles loaded mazes exactly like generated ones.

use crate::{Direction, Grid, Lattice, Maze, Position, Symbol};

/// Outcome of a solve request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    path: Option<Vec<Position>>,
    grid: Grid,
}

impl Solution {
    pub fn path_found(&self) -> bool {
        self.path.is_some()
    }

    /// Path cells from entrance to exit
    pub fn path(&self) -> Option<&[Position]> {
        self.path.as_deref()
    }

    /// The grid with the path overlaid, or the untouched copy when there is none
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn render(&self) -> Vec<String> {
        self.grid.render_rows()
    }
}

/// Maze solver working on a snapshot of a maze's printable grid
pub struct Solver {
    grid: Grid,
    cells: Lattice,
    start: Position,
    exit: Position,
}

impl Solver {
    /// Build a solver from a copy of the maze's grid
    pub fn new(maze: &Maze) -> Self {
        Self::from_grid(maze.grid().clone())
    }

    /// Build a solver that owns `grid`
    pub fn from_grid(grid: Grid) -> Self {
        let mut cells = Lattice::from_fn(grid.height(), grid.width(), |pos| !grid.is_free(pos));
        link_open_cells(&mut cells);

        let last_col = grid.width().saturating_sub(1);
        let start_row = grid.free_rows_in_col(0).next().unwrap_or_else(|| {
            log::warn!("no entrance on the left border, starting from row 0");
            0
        });
        let exit_row = grid.free_rows_in_col(last_col).next().unwrap_or_else(|| {
            log::warn!("no exit on the right border, aiming for row 0");
            0
        });

        Self {
            grid,
            cells,
            start: Position::new(start_row, 0),
            exit: Position::new(exit_row, last_col),
        }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    /// Search for a path from the entrance to the exit
    pub fn solve(mut self) -> Solution {
        let Some(path) = self.search() else {
            log::info!("there is no way out of this maze");
            return Solution {
                path: None,
                grid: self.grid,
            };
        };

        for &pos in &path {
            self.grid.set(pos, Symbol::Path);
        }
        log::debug!("escape found, {} cells long", path.len());
        Solution {
            path: Some(path),
            grid: self.grid,
        }
    }

    /// Iterative DFS with explicit backtracking. Returns the final stack.
    fn search(&mut self) -> Option<Vec<Position>> {
        let mut stack = Vec::new();
        let cell = self.cells.get_mut(self.start)?;
        cell.set_visited(true);
        cell.set_on_path(true);
        stack.push(self.start);

        while let Some(&current) = stack.last() {
            if current == self.exit {
                return Some(stack);
            }
            match self.next_step(current) {
                Some(next) => {
                    if let Some(cell) = self.cells.get_mut(next) {
                        cell.set_visited(true);
                        cell.set_on_path(true);
                    }
                    stack.push(next);
                }
                None => {
                    stack.pop();
                    if let Some(cell) = self.cells.get_mut(current) {
                        cell.set_on_path(false);
                    }
                }
            }
        }
        None
    }

    /// First open neighbor in right, down, up, left order not yet explored
    fn next_step(&self, current: Position) -> Option<Position> {
        let cell = self.cells.get(current)?;
        cell.neighbors()
            .filter_map(|dir| self.cells.neighbor(current, dir))
            .find(|next| !next.is_visited() && !next.is_on_path())
            .map(|next| next.position())
    }
}

/// Connect every open cell to its open up/down/left/right neighbors
fn link_open_cells(cells: &mut Lattice) {
    let mut edges = Vec::new();
    for cell in cells.iter().filter(|c| !c.is_wall()) {
        let pos = cell.position();
        for dir in [Direction::Down, Direction::Up, Direction::Right, Direction::Left] {
            if let Some(next) = cells.neighbor(pos, dir) {
                if !next.is_wall() {
                    edges.push((pos, next.position()));
                }
            }
        }
    }
    for (a, b) in edges {
        cells.add_neighbor(a, b);
    }
}

/// Solve a maze without keeping the solver around
pub fn solve(maze: &Maze) -> Solution {
    Solver::new(maze).solve()
}
