use maze_core::{Maze, Result};
use std::fs;
use std::path::Path;

/// Read and parse a maze file
pub fn read_maze(path: &Path) -> Result<Maze> {
    let text = fs::read_to_string(path)?;
    let maze = Maze::load(&text)?;
    let (height, width) = maze.dimensions();
    log::info!("loaded {}x{} maze from {}", height, width, path.display());
    Ok(maze)
}

/// Write a maze in its text form
pub fn write_maze(path: &Path, maze: &Maze) -> Result<()> {
    fs::write(path, maze.serialize())?;
    log::info!("saved maze to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{Generator, MazeError};

    #[test]
    fn test_write_then_read() {
        let path = std::env::temp_dir().join(format!("maze-tui-{}-storage.txt", std::process::id()));
        let mut generator = Generator::with_seed(13);
        let maze = Maze::create(8, &mut generator).unwrap();

        write_maze(&path, &maze).unwrap();
        let loaded = read_maze(&path).unwrap();
        assert_eq!(loaded.render(), maze.render());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("/definitely/not/here/maze.txt");
        assert!(matches!(read_maze(path), Err(MazeError::Io(_))));
    }
}
