use crate::{Direction, Grid, Lattice, Maze, Position, Symbol};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Neighbor order examined while carving
const CARVE_ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Up,
    Direction::Right,
    Direction::Left,
];

/// Configuration for maze generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Chance of opening each remainder cell when a printable dimension is even
    pub extra_passage_chance: f64,
    /// Resample the exit row until it differs from the entrance row
    pub distinct_openings: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            extra_passage_chance: 0.5,
            distinct_openings: true,
        }
    }
}

impl GeneratorConfig {
    /// Never open remainder cells on even dimensions
    pub fn without_extra_passages() -> Self {
        Self {
            extra_passage_chance: 0.0,
            ..Self::default()
        }
    }
}

/// Maze generator: randomized backtracking carve over a cell lattice
pub struct Generator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator seeded from the OS
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a maze with the given printable dimensions
    pub fn generate(&mut self, height: usize, width: usize) -> Maze {
        let cell_height = height.saturating_sub(1) / 2;
        let cell_width = width.saturating_sub(1) / 2;
        let mut lattice = Lattice::new(cell_height, cell_width);

        if !lattice.is_empty() {
            let start = Position::new(self.rng.gen_range(0..cell_height), 0);
            carve(&mut lattice, start, &mut self.rng);
            log::debug!(
                "carved {}x{} lattice from row {} with {} passages",
                cell_height,
                cell_width,
                start.row,
                lattice.edge_count()
            );
        }

        let mut grid = render_lattice(&lattice, height, width);
        self.open_remainder(&mut grid, &lattice);
        if let Some((entrance, exit)) = self.insert_openings(&mut grid, &lattice) {
            log::debug!("entrance at row {}, exit at row {}", entrance, exit);
        }

        Maze::from_parts(Some(lattice), grid)
    }

    /// Open extra cells along the remainder row/column left by even dimensions
    fn open_remainder(&mut self, grid: &mut Grid, lattice: &Lattice) {
        let chance = self.config.extra_passage_chance.clamp(0.0, 1.0);
        let (height, width) = (grid.height(), grid.width());

        if height % 2 == 0 {
            if let Some(col) = width.checked_sub(2) {
                for i in 0..lattice.rows() {
                    if self.rng.gen_bool(chance) {
                        grid.set(Position::new(2 * i + 1, col), Symbol::Free);
                    }
                }
            }
        }
        if width % 2 == 0 {
            if let Some(row) = height.checked_sub(2) {
                for j in 0..lattice.cols() {
                    if self.rng.gen_bool(chance) {
                        grid.set(Position::new(row, 2 * j + 1), Symbol::Free);
                    }
                }
            }
        }
    }

    /// Open the entrance on the left border and the exit on the right border.
    ///
    /// Returns the chosen lattice rows, or `None` for an empty lattice.
    fn insert_openings(&mut self, grid: &mut Grid, lattice: &Lattice) -> Option<(usize, usize)> {
        if lattice.is_empty() {
            return None;
        }
        let rows = lattice.rows();
        let width = grid.width();

        let entrance = self.rng.gen_range(0..rows);
        let mut exit = self.rng.gen_range(0..rows);
        if self.config.distinct_openings && rows > 1 {
            while exit == entrance {
                exit = self.rng.gen_range(0..rows);
            }
        }

        grid.set(Position::new(2 * entrance + 1, 0), Symbol::Free);
        grid.set(Position::new(2 * exit + 1, width - 1), Symbol::Free);
        if width % 2 == 0 {
            grid.set(Position::new(2 * exit + 1, width - 2), Symbol::Free);
        }
        Some((entrance, exit))
    }
}

/// Carve a spanning tree into `lattice` with randomized iterative backtracking.
///
/// Every cell reachable from `start` ends up visited and connected; no
/// cycles are created. Wall cells and visited cells are never entered.
pub fn carve<R: Rng + ?Sized>(lattice: &mut Lattice, start: Position, rng: &mut R) {
    let Some(cell) = lattice.get_mut(start) else {
        return;
    };
    cell.set_visited(true);

    let mut stack = vec![start];
    while let Some(current) = stack.pop() {
        let candidates: Vec<Position> = CARVE_ORDER
            .iter()
            .filter_map(|&dir| lattice.neighbor(current, dir))
            .filter(|cell| !cell.is_visited() && !cell.is_wall())
            .map(|cell| cell.position())
            .collect();
        if candidates.is_empty() {
            continue;
        }

        let chosen = candidates[rng.gen_range(0..candidates.len())];
        lattice.add_neighbor(current, chosen);
        if let Some(cell) = lattice.get_mut(chosen) {
            cell.set_visited(true);
        }
        stack.push(current);
        stack.push(chosen);
    }
}

/// Translate a carved lattice into a printable grid.
///
/// Lattice cell `(i, j)` lands on `(2i+1, 2j+1)`; the cells to its right and
/// below are opened when the matching passage exists. Everything else is wall.
pub fn render_lattice(lattice: &Lattice, height: usize, width: usize) -> Grid {
    let mut grid = Grid::new(height, width);
    for cell in lattice.iter() {
        let pos = cell.position();
        let (row, col) = (2 * pos.row + 1, 2 * pos.col + 1);
        grid.set(Position::new(row, col), Symbol::Free);
        if cell.has_right_neighbor() {
            grid.set(Position::new(row, col + 1), Symbol::Free);
        }
        if cell.has_lower_neighbor() {
            grid.set(Position::new(row + 1, col), Symbol::Free);
        }
    }
    grid
}
