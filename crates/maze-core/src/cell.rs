use serde::{Deserialize, Serialize};

/// A row/column coordinate in a lattice or printable grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// One step in `direction`, or `None` when that would leave the first row/column
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Position::new(row, col))
    }

    /// Direction leading from `self` to `other` if they are grid-adjacent
    pub fn direction_to(self, other: Position) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.step(dir) == Some(other))
    }

    /// Check if the two positions differ by exactly one in exactly one coordinate
    pub fn is_adjacent(self, other: Position) -> bool {
        self.direction_to(other).is_some()
    }
}

/// The four lattice directions, listed in solver priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Down,
    Up,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Up,
        Direction::Left,
    ];

    /// Row/column delta for one step
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::Right => 0b0001,
            Direction::Down => 0b0010,
            Direction::Up => 0b0100,
            Direction::Left => 0b1000,
        }
    }
}

/// A node of the maze graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    visited: bool,
    wall: bool,
    on_path: bool,
    /// Bitmask of directions with a carved passage
    neighbors: u8,
}

impl Cell {
    pub fn new(position: Position, wall: bool) -> Self {
        Self {
            position,
            visited: false,
            wall,
            on_path: false,
            neighbors: 0,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Record one side of an edge. Use [`Lattice::add_neighbor`] to keep both ends in sync.
    pub fn add_neighbor(&mut self, direction: Direction) {
        self.neighbors |= direction.bit();
    }

    pub fn has_neighbor(&self, direction: Direction) -> bool {
        self.neighbors & direction.bit() != 0
    }

    pub fn has_right_neighbor(&self) -> bool {
        self.has_neighbor(Direction::Right)
    }

    pub fn has_lower_neighbor(&self) -> bool {
        self.has_neighbor(Direction::Down)
    }

    pub fn has_upper_neighbor(&self) -> bool {
        self.has_neighbor(Direction::Up)
    }

    pub fn has_left_neighbor(&self) -> bool {
        self.has_neighbor(Direction::Left)
    }

    /// Directions with a neighbor, in priority order
    pub fn neighbors(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&dir| self.has_neighbor(dir))
    }

    pub fn neighbor_count(&self) -> usize {
        self.neighbors.count_ones() as usize
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    pub fn is_wall(&self) -> bool {
        self.wall
    }

    /// Whether the cell is part of the path currently being explored
    pub fn is_on_path(&self) -> bool {
        self.on_path
    }

    pub fn set_on_path(&mut self, on_path: bool) {
        self.on_path = on_path;
    }
}

/// Arena of cells indexed by position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Lattice {
    /// Create a lattice of unvisited, non-wall cells
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |_| false)
    }

    /// Create a lattice, asking `is_wall` for every position
    pub fn from_fn(rows: usize, cols: usize, mut is_wall: impl FnMut(Position) -> bool) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let pos = Position::new(row, col);
                cells.push(Cell::new(pos, is_wall(pos)));
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        if self.contains(pos) {
            Some(&self.cells[pos.row * self.cols + pos.col])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if self.contains(pos) {
            Some(&mut self.cells[pos.row * self.cols + pos.col])
        } else {
            None
        }
    }

    /// The in-bounds cell one step away in `direction`
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<&Cell> {
        pos.step(direction).and_then(|next| self.get(next))
    }

    /// Connect two grid-adjacent cells with a symmetric edge.
    ///
    /// Returns `false` and leaves the lattice untouched when either position
    /// is out of bounds or the two are not adjacent. Adding an existing edge
    /// is a no-op.
    pub fn add_neighbor(&mut self, a: Position, b: Position) -> bool {
        let Some(direction) = a.direction_to(b) else {
            return false;
        };
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        if let Some(cell) = self.get_mut(a) {
            cell.add_neighbor(direction);
        }
        if let Some(cell) = self.get_mut(b) {
            cell.add_neighbor(direction.opposite());
        }
        true
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.cells.iter().map(Cell::neighbor_count).sum::<usize>() / 2
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_and_direction() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.step(Direction::Right), Some(Position::new(1, 2)));
        assert_eq!(pos.step(Direction::Up), Some(Position::new(0, 1)));
        assert_eq!(Position::new(0, 0).step(Direction::Up), None);
        assert_eq!(Position::new(0, 0).step(Direction::Left), None);

        assert_eq!(pos.direction_to(Position::new(2, 1)), Some(Direction::Down));
        assert_eq!(pos.direction_to(Position::new(2, 2)), None);
        assert!(!pos.is_adjacent(pos));
    }

    #[test]
    fn test_add_neighbor_is_symmetric() {
        let mut lattice = Lattice::new(2, 2);
        let a = Position::new(0, 0);
        let b = Position::new(0, 1);
        assert!(lattice.add_neighbor(a, b));

        let cell_a = lattice.get(a).unwrap();
        let cell_b = lattice.get(b).unwrap();
        assert!(cell_a.has_right_neighbor());
        assert!(cell_b.has_left_neighbor());
        assert!(!cell_a.has_lower_neighbor());
        assert_eq!(lattice.edge_count(), 1);
    }

    #[test]
    fn test_add_neighbor_idempotent() {
        let mut lattice = Lattice::new(2, 2);
        let a = Position::new(0, 0);
        let b = Position::new(1, 0);
        lattice.add_neighbor(a, b);
        lattice.add_neighbor(b, a);
        lattice.add_neighbor(a, b);

        assert_eq!(lattice.get(a).unwrap().neighbor_count(), 1);
        assert_eq!(lattice.get(b).unwrap().neighbor_count(), 1);
        assert!(lattice.get(a).unwrap().has_lower_neighbor());
        assert!(lattice.get(b).unwrap().has_upper_neighbor());
    }

    #[test]
    fn test_add_neighbor_rejects_non_adjacent() {
        let mut lattice = Lattice::new(3, 3);
        assert!(!lattice.add_neighbor(Position::new(0, 0), Position::new(1, 1)));
        assert!(!lattice.add_neighbor(Position::new(0, 0), Position::new(0, 2)));
        assert!(!lattice.add_neighbor(Position::new(2, 2), Position::new(2, 3)));
        assert_eq!(lattice.edge_count(), 0);
    }

    #[test]
    fn test_at_most_four_neighbors() {
        let mut lattice = Lattice::new(3, 3);
        let center = Position::new(1, 1);
        for dir in Direction::ALL {
            let other = center.step(dir).unwrap();
            lattice.add_neighbor(center, other);
        }
        let cell = lattice.get(center).unwrap();
        assert_eq!(cell.neighbor_count(), 4);
        assert_eq!(cell.neighbors().collect::<Vec<_>>(), Direction::ALL.to_vec());
    }

    #[test]
    fn test_flags() {
        let mut cell = Cell::new(Position::new(0, 0), false);
        assert!(!cell.is_visited());
        assert!(!cell.is_on_path());
        assert!(!cell.is_wall());

        cell.set_visited(true);
        cell.set_on_path(true);
        assert!(cell.is_visited());
        assert!(cell.is_on_path());

        cell.set_on_path(false);
        assert!(!cell.is_on_path());
        assert!(Cell::new(Position::new(0, 0), true).is_wall());
    }

    #[test]
    fn test_from_fn_marks_walls() {
        let lattice = Lattice::from_fn(2, 3, |pos| pos.col == 1);
        assert_eq!(lattice.iter().filter(|c| c.is_wall()).count(), 2);
        assert!(lattice.get(Position::new(1, 1)).unwrap().is_wall());
        assert!(lattice.get(Position::new(2, 0)).is_none());
    }

    #[test]
    fn test_position_serde() {
        let pos = Position::new(3, 7);
        let json = serde_json::to_string(&pos).unwrap();
        assert_eq!(json, r#"{"row":3,"col":7}"#);
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pos);
    }
}
