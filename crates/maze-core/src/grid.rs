use crate::error::{MazeError, Result};
use crate::Position;
use std::fmt;

/// Glyph printed for walls
pub const WALL: &str = "\u{2588}\u{2588}";
/// Glyph printed for open floor
pub const FREE: &str = "  ";
/// Glyph overlaid on solved-path cells, never written to files by the generator
pub const PATH: &str = "//";

/// One cell of the printable grid, always two characters wide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Wall,
    Free,
    Path,
    /// Unrecognised glyph kept verbatim from a loaded file
    Other([char; 2]),
}

impl Symbol {
    /// Parse a two-character chunk
    pub fn from_chars(chars: [char; 2]) -> Self {
        match chars {
            ['\u{2588}', '\u{2588}'] => Symbol::Wall,
            [' ', ' '] => Symbol::Free,
            ['/', '/'] => Symbol::Path,
            _ => Symbol::Other(chars),
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, Symbol::Free)
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Symbol::Wall)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Wall => f.write_str(WALL),
            Symbol::Free => f.write_str(FREE),
            Symbol::Path => f.write_str(PATH),
            Symbol::Other([a, b]) => write!(f, "{}{}", a, b),
        }
    }
}

/// The full-resolution printable maze grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    symbols: Vec<Symbol>,
}

impl Grid {
    /// Create a grid filled with walls
    pub fn new(height: usize, width: usize) -> Self {
        Self::filled(height, width, Symbol::Wall)
    }

    pub fn filled(height: usize, width: usize, symbol: Symbol) -> Self {
        Self {
            height,
            width,
            symbols: vec![symbol; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    pub fn get(&self, pos: Position) -> Option<Symbol> {
        if self.contains(pos) {
            Some(self.symbols[pos.row * self.width + pos.col])
        } else {
            None
        }
    }

    /// Set a symbol. Out-of-bounds writes are ignored.
    pub fn set(&mut self, pos: Position, symbol: Symbol) {
        if self.contains(pos) {
            self.symbols[pos.row * self.width + pos.col] = symbol;
        }
    }

    pub fn is_free(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|s| s.is_free())
    }

    /// Symbols of one row
    pub fn row(&self, row: usize) -> &[Symbol] {
        &self.symbols[row * self.width..(row + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Symbol]> {
        (0..self.height).map(move |row| self.row(row))
    }

    /// Rows whose cell in `col` is free, top to bottom
    pub fn free_rows_in_col(&self, col: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.height).filter(move |&row| self.is_free(Position::new(row, col)))
    }

    pub fn count(&self, symbol: Symbol) -> usize {
        self.symbols.iter().filter(|&&s| s == symbol).count()
    }

    /// Each row rendered as a string of glyphs
    pub fn render_rows(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(Symbol::to_string).collect())
            .collect()
    }

    /// Serialize to the persisted text form: one line per row, newline-terminated
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.height * (self.width * 2 + 1));
        for line in self.render_rows() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Parse the persisted text form.
    ///
    /// The width is inferred from the first line (characters / 2) and the
    /// height from the number of lines. Unknown glyphs are kept as
    /// [`Symbol::Other`].
    pub fn from_text(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        let Some(first) = lines.first() else {
            return Err(MazeError::MalformedInput {
                line: 1,
                reason: "no rows found".to_string(),
            });
        };
        let width = first.chars().count() / 2;
        let height = lines.len();

        let mut symbols = Vec::with_capacity(height * width);
        for (idx, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() % 2 != 0 {
                return Err(MazeError::MalformedInput {
                    line: idx + 1,
                    reason: format!("odd number of characters ({})", chars.len()),
                });
            }
            if chars.len() / 2 != width {
                return Err(MazeError::MalformedInput {
                    line: idx + 1,
                    reason: format!("expected {} symbols, found {}", width, chars.len() / 2),
                });
            }
            for pair in chars.chunks_exact(2) {
                let symbol = Symbol::from_chars([pair[0], pair[1]]);
                if let Symbol::Other(_) = symbol {
                    log::warn!("unknown glyph {:?} at line {}", symbol.to_string(), idx + 1);
                }
                symbols.push(symbol);
            }
        }

        Ok(Self {
            height,
            width,
            symbols,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for symbol in row {
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_parsing() {
        assert_eq!(Symbol::from_chars(['\u{2588}', '\u{2588}']), Symbol::Wall);
        assert_eq!(Symbol::from_chars([' ', ' ']), Symbol::Free);
        assert_eq!(Symbol::from_chars(['/', '/']), Symbol::Path);
        assert_eq!(Symbol::from_chars(['#', '#']), Symbol::Other(['#', '#']));
        assert_eq!(Symbol::Other(['a', 'b']).to_string(), "ab");
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(3, 4);
        assert_eq!(grid.count(Symbol::Wall), 12);

        grid.set(Position::new(1, 2), Symbol::Free);
        assert_eq!(grid.get(Position::new(1, 2)), Some(Symbol::Free));
        assert!(grid.is_free(Position::new(1, 2)));

        // Out of bounds is ignored
        grid.set(Position::new(5, 5), Symbol::Free);
        assert_eq!(grid.get(Position::new(5, 5)), None);
        assert_eq!(grid.count(Symbol::Free), 1);
    }

    #[test]
    fn test_to_text() {
        let mut grid = Grid::new(2, 2);
        grid.set(Position::new(0, 1), Symbol::Free);
        let text = grid.to_text();
        assert_eq!(text, format!("{WALL}{FREE}\n{WALL}{WALL}\n"));
        assert_eq!(text, grid.to_string());
    }

    #[test]
    fn test_from_text_infers_dimensions() {
        let text = format!("{WALL}{WALL}{WALL}\n{FREE}{FREE}{FREE}\n");
        let grid = Grid::from_text(&text).unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.free_rows_in_col(0).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_from_text_accepts_crlf_and_unknown_glyphs() {
        let text = format!("{WALL}##\r\n{FREE}{FREE}\r\n");
        let grid = Grid::from_text(&text).unwrap();
        assert_eq!(grid.get(Position::new(0, 1)), Some(Symbol::Other(['#', '#'])));
        assert_eq!(grid.height(), 2);
    }

    #[test]
    fn test_from_text_rejects_empty() {
        assert!(matches!(
            Grid::from_text(""),
            Err(MazeError::MalformedInput { line: 1, .. })
        ));
    }

    #[test]
    fn test_from_text_rejects_inconsistent_rows() {
        let text = format!("{WALL}{WALL}{WALL}\n{FREE}{FREE}\n");
        assert!(matches!(
            Grid::from_text(&text),
            Err(MazeError::MalformedInput { line: 2, .. })
        ));

        let odd = format!("{WALL}{WALL}x\n");
        assert!(matches!(
            Grid::from_text(&odd),
            Err(MazeError::MalformedInput { line: 1, .. })
        ));
    }

    #[test]
    fn test_text_round_trip() {
        let mut grid = Grid::new(3, 3);
        grid.set(Position::new(1, 0), Symbol::Free);
        grid.set(Position::new(1, 1), Symbol::Free);
        let back = Grid::from_text(&grid.to_text()).unwrap();
        assert_eq!(back, grid);
    }
}
