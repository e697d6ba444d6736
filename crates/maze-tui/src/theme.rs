use crossterm::style::Color;
use maze_core::Symbol;

/// Color theme for the terminal output
#[derive(Debug, Clone)]
pub struct Theme {
    /// Wall blocks
    pub wall: Color,
    /// Open floor (only visible when the terminal shades spaces)
    pub free: Color,
    /// Solved path marker
    pub path: Color,
    /// Glyphs loaded from a file that are neither wall nor floor
    pub unknown: Color,
    /// Menu and prompt text
    pub info: Color,
    /// Error messages
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            wall: Color::Rgb { r: 130, g: 140, b: 170 },
            free: Color::Rgb { r: 230, g: 230, b: 240 },
            path: Color::Rgb { r: 90, g: 255, b: 130 },
            unknown: Color::Rgb { r: 255, g: 210, b: 100 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
        }
    }

    /// High contrast theme using the basic palette
    pub fn high_contrast() -> Self {
        Self {
            wall: Color::White,
            free: Color::White,
            path: Color::Green,
            unknown: Color::Yellow,
            info: Color::Grey,
            error: Color::Red,
        }
    }

    /// Foreground color for a grid symbol
    pub fn symbol_color(&self, symbol: Symbol) -> Color {
        match symbol {
            Symbol::Wall => self.wall,
            Symbol::Free => self.free,
            Symbol::Path => self.path,
            Symbol::Other(_) => self.unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_colors() {
        let theme = Theme::high_contrast();
        assert_eq!(theme.symbol_color(Symbol::Path), Color::Green);
        assert_eq!(theme.symbol_color(Symbol::Wall), Color::White);
        assert_eq!(theme.symbol_color(Symbol::Other(['?', '?'])), Color::Yellow);
    }
}
