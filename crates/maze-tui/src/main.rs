mod app;
mod render;
mod settings;
mod storage;
mod theme;

use app::App;
use clap::{ArgAction, Parser, Subcommand};
use maze_core::{solve, Generator, Maze, MazeError};
use settings::Settings;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use theme::Theme;

/// Generate, save, load, and solve text mazes
#[derive(Parser, Debug)]
#[command(name = "maze", version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Random seed for reproducible mazes
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    plain: bool,

    /// Use the high contrast palette
    #[arg(long, global = true, conflicts_with = "plain")]
    high_contrast: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a maze and print it
    Generate {
        /// Maze size (height and width in printable cells)
        #[arg(short, long, default_value_t = 15)]
        size: usize,

        /// Save the maze to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the escape path
        #[arg(long)]
        solve: bool,
    },
    /// Load a maze file and print its escape path
    Solve {
        /// Maze file to solve
        file: PathBuf,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let theme = if args.plain {
        None
    } else if args.high_contrast {
        Some(Theme::high_contrast())
    } else {
        Some(Theme::dark())
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("using seed {}", seed);
    let generator = Generator::with_seed(seed);

    let result = match args.command {
        None => run_interactive(generator, theme),
        Some(Command::Generate { size, output, solve }) => {
            run_generate(generator, size, output, solve, theme.as_ref())
        }
        Some(Command::Solve { file }) => run_solve(&file, theme.as_ref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run_interactive(generator: Generator, theme: Option<Theme>) -> Result<(), MazeError> {
    let mut app = App::new(generator, Settings::load(), theme);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout().lock();
    app.run(&mut input, &mut stdout)?;
    Ok(())
}

fn run_generate(
    mut generator: Generator,
    size: usize,
    output: Option<PathBuf>,
    with_solution: bool,
    theme: Option<&Theme>,
) -> Result<(), MazeError> {
    let maze = Maze::create(size, &mut generator)?;
    let mut stdout = io::stdout().lock();
    render::render_grid(&mut stdout, maze.grid(), theme)?;

    if with_solution {
        writeln!(stdout)?;
        print_solution(&mut stdout, &maze, theme)?;
    }
    if let Some(path) = output {
        storage::write_maze(&path, &maze)?;
    }
    Ok(())
}

fn run_solve(file: &Path, theme: Option<&Theme>) -> Result<(), MazeError> {
    let maze = storage::read_maze(file)?;
    let mut stdout = io::stdout().lock();
    print_solution(&mut stdout, &maze, theme)?;
    Ok(())
}

fn print_solution<W: Write>(out: &mut W, maze: &Maze, theme: Option<&Theme>) -> io::Result<()> {
    let solution = solve(maze);
    if solution.path_found() {
        render::render_grid(out, solution.grid(), theme)
    } else {
        render::render_error(out, "There is no way out of this maze", theme)
    }
}
