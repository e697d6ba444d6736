use crate::error::{MazeError, Result};
use crate::{Generator, Grid, Lattice};
use std::fmt;

/// Smallest size accepted by [`Maze::create`]
pub const MIN_SIZE: usize = 5;

/// A maze: printable grid plus, for generated mazes, the lattice it was carved from
#[derive(Debug, Clone)]
pub struct Maze {
    height: usize,
    width: usize,
    cell_height: usize,
    cell_width: usize,
    lattice: Option<Lattice>,
    grid: Grid,
}

impl Maze {
    /// Generate a square maze of `size × size` printable cells
    pub fn create(size: usize, generator: &mut Generator) -> Result<Self> {
        if size < MIN_SIZE {
            return Err(MazeError::SizeTooSmall {
                size,
                min: MIN_SIZE,
            });
        }
        Ok(generator.generate(size, size))
    }

    /// Generate a maze with explicit printable dimensions. Any size is accepted.
    pub fn with_dimensions(height: usize, width: usize, generator: &mut Generator) -> Self {
        generator.generate(height, width)
    }

    /// Load a maze from its persisted text form
    pub fn load(text: &str) -> Result<Self> {
        let grid = Grid::from_text(text)?;
        log::debug!("loaded {}x{} maze", grid.height(), grid.width());
        Ok(Self::from_parts(None, grid))
    }

    pub(crate) fn from_parts(lattice: Option<Lattice>, grid: Grid) -> Self {
        let (height, width) = (grid.height(), grid.width());
        Self {
            height,
            width,
            cell_height: height.saturating_sub(1) / 2,
            cell_width: width.saturating_sub(1) / 2,
            lattice,
            grid,
        }
    }

    /// Printable rows for display
    pub fn render(&self) -> Vec<String> {
        self.grid.render_rows()
    }

    /// Text blob for persistence
    pub fn serialize(&self) -> String {
        self.grid.to_text()
    }

    /// Printable `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn cell_height(&self) -> usize {
        self.cell_height
    }

    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The carved lattice; `None` for mazes loaded from text
    pub fn lattice(&self) -> Option<&Lattice> {
        self.lattice.as_ref()
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
