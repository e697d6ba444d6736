use crate::theme::Theme;
use crossterm::{
    queue,
    style::{Print, ResetColor, SetForegroundColor},
};
use maze_core::Grid;
use std::io::{self, Write};

/// Print a grid row by row, colored when a theme is given
pub fn render_grid<W: Write>(out: &mut W, grid: &Grid, theme: Option<&Theme>) -> io::Result<()> {
    for row in grid.rows() {
        match theme {
            Some(theme) => {
                for &symbol in row {
                    queue!(out, SetForegroundColor(theme.symbol_color(symbol)), Print(symbol))?;
                }
                queue!(out, ResetColor)?;
            }
            None => {
                for symbol in row {
                    write!(out, "{}", symbol)?;
                }
            }
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Print an informational line
pub fn render_info<W: Write>(out: &mut W, text: &str, theme: Option<&Theme>) -> io::Result<()> {
    match theme {
        Some(theme) => queue!(out, SetForegroundColor(theme.info), Print(text), ResetColor)?,
        None => write!(out, "{}", text)?,
    }
    writeln!(out)
}

/// Print an error line
pub fn render_error<W: Write>(out: &mut W, text: &str, theme: Option<&Theme>) -> io::Result<()> {
    match theme {
        Some(theme) => queue!(out, SetForegroundColor(theme.error), Print(text), ResetColor)?,
        None => write!(out, "{}", text)?,
    }
    writeln!(out)
}
