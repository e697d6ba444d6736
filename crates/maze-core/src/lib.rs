//! Maze engine: randomized depth-first generation, text persistence, and
//! depth-first solving over a rectangular grid.
//!
//! ```
//! use maze_core::{solve, Generator, Maze};
//!
//! let mut generator = Generator::with_seed(42);
//! let maze = Maze::create(9, &mut generator).unwrap();
//! let reloaded = Maze::load(&maze.serialize()).unwrap();
//! assert!(solve(&reloaded).path_found());
//! ```

mod cell;
mod error;
mod generator;
mod grid;
mod maze;
mod solver;

pub use cell::{Cell, Direction, Lattice, Position};
pub use error::{MazeError, Result};
pub use generator::{carve, render_lattice, Generator, GeneratorConfig};
pub use grid::{Grid, Symbol, FREE, PATH, WALL};
pub use maze::{Maze, MIN_SIZE};
pub use solver::{solve, Solution, Solver};
