use crate::render::{render_error, render_grid, render_info};
use crate::settings::Settings;
use crate::storage::{read_maze, write_maze};
use crate::theme::Theme;
use maze_core::{solve, Generator, Maze, MazeError};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Result of handling a menu option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// Interactive menu state
pub struct App {
    /// Maze currently loaded or generated
    pub maze: Option<Maze>,
    generator: Generator,
    settings: Settings,
    theme: Option<Theme>,
}

impl App {
    pub fn new(generator: Generator, settings: Settings, theme: Option<Theme>) -> Self {
        Self {
            maze: None,
            generator,
            settings,
            theme,
        }
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        loop {
            self.print_menu(out)?;
            let Some(line) = read_line(input)? else {
                break;
            };
            let action = self.handle_option(line.trim(), input, out)?;
            writeln!(out)?;
            if action == AppAction::Quit {
                break;
            }
        }
        writeln!(out, "Bye!")?;
        out.flush()
    }

    fn print_menu<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let theme = self.theme.as_ref();
        render_info(out, "=== Menu ===", theme)?;
        render_info(out, "1. Generate a new maze", theme)?;
        render_info(out, "2. Load a maze", theme)?;
        if self.maze.is_some() {
            render_info(out, "3. Save the maze", theme)?;
            render_info(out, "4. Display the maze", theme)?;
            render_info(out, "5. Find the escape", theme)?;
        }
        render_info(out, "0. Exit", theme)?;
        out.flush()
    }

    /// Dispatch one menu option
    pub fn handle_option<R: BufRead, W: Write>(
        &mut self,
        option: &str,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<AppAction> {
        match (option, self.maze.is_some()) {
            ("1", _) => self.generate(input, out)?,
            ("2", _) => self.load(input, out)?,
            ("3", true) => self.save(input, out)?,
            ("4", true) => self.display(out)?,
            ("5", true) => self.find_escape(out)?,
            ("0", _) => return Ok(AppAction::Quit),
            _ => render_error(out, "Incorrect option. Please try again", self.theme.as_ref())?,
        }
        Ok(AppAction::Continue)
    }

    fn generate<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        let theme = self.theme.as_ref();
        match self.settings.last_size {
            Some(size) => render_info(out, &format!("Enter the size of a new maze [{}]", size), theme)?,
            None => render_info(out, "Enter the size of a new maze", theme)?,
        }
        let answer = read_line(input)?.unwrap_or_default();
        let answer = answer.trim();
        let size = if answer.is_empty() {
            self.settings.last_size
        } else {
            answer.parse::<usize>().ok()
        };
        let Some(size) = size else {
            return render_error(out, "ERROR: The size must be a whole number.", theme);
        };

        match Maze::create(size, &mut self.generator) {
            Ok(maze) => {
                render_grid(out, maze.grid(), theme)?;
                self.maze = Some(maze);
                self.settings.remember_size(size);
                Ok(())
            }
            Err(MazeError::SizeTooSmall { min, .. }) => render_error(
                out,
                &format!("ERROR: The maze must have a minimum size of {}.", min),
                theme,
            ),
            Err(e) => render_error(out, &e.to_string(), theme),
        }
    }

    fn load<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        let Some(path) = self.prompt_file(input, out, "Please, Enter file name")? else {
            return Ok(());
        };
        match read_maze(&path) {
            Ok(maze) => {
                self.maze = Some(maze);
                self.settings.remember_file(&path);
                Ok(())
            }
            Err(e) => {
                log::warn!("cannot load {}: {}", path.display(), e);
                render_error(out, "Cannot load the maze!!!", self.theme.as_ref())
            }
        }
    }

    fn save<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        let Some(path) = self.prompt_file(input, out, "Enter file name:")? else {
            return Ok(());
        };
        let Some(maze) = &self.maze else {
            return Ok(());
        };
        match write_maze(&path, maze) {
            Ok(()) => {
                self.settings.remember_file(&path);
                Ok(())
            }
            Err(e) => {
                log::warn!("cannot save {}: {}", path.display(), e);
                render_error(out, "Cannot save the maze!!!", self.theme.as_ref())
            }
        }
    }

    fn display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match &self.maze {
            Some(maze) => render_grid(out, maze.grid(), self.theme.as_ref()),
            None => Ok(()),
        }
    }

    fn find_escape<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let Some(maze) = &self.maze else {
            return Ok(());
        };
        let solution = solve(maze);
        if solution.path_found() {
            render_grid(out, solution.grid(), self.theme.as_ref())
        } else {
            render_error(out, "There is no way out of this maze", self.theme.as_ref())
        }
    }

    /// Ask for a file name; an empty answer reuses the last file
    fn prompt_file<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
        prompt: &str,
    ) -> io::Result<Option<PathBuf>> {
        let theme = self.theme.as_ref();
        match &self.settings.last_file {
            Some(last) => render_info(out, &format!("{} [{}]", prompt, last.display()), theme)?,
            None => render_info(out, prompt, theme)?,
        }
        let answer = read_line(input)?.unwrap_or_default();
        let answer = answer.trim();
        if answer.is_empty() {
            if self.settings.last_file.is_none() {
                render_error(out, "No file name given", theme)?;
            }
            return Ok(self.settings.last_file.clone());
        }
        Ok(Some(PathBuf::from(answer)))
    }
}

/// Read one line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
