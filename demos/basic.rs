//! Basic example of using the maze engine

use maze_core::{solve, Generator, Maze};

fn main() {
    // Generate a maze
    println!("Generating a 15x15 maze...\n");
    let mut generator = Generator::with_seed(2024);
    let maze = match Maze::create(15, &mut generator) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    println!("Generated maze:");
    println!("{}", maze);

    let (height, width) = maze.dimensions();
    println!("Printable size: {}x{}", height, width);
    println!("Rooms: {}x{}\n", maze.cell_height(), maze.cell_width());

    // Solve it
    println!("Solving...\n");
    let solution = solve(&maze);
    if let Some(path) = solution.path() {
        println!("Escape ({} cells):", path.len());
        for row in solution.render() {
            println!("{}", row);
        }
    } else {
        println!("There is no way out of this maze");
    }

    // Parse a maze from its text form
    println!("\n--- Reloading the maze from text ---\n");
    let text = maze.serialize();
    match Maze::load(&text) {
        Ok(reloaded) => {
            println!("Reloaded maze matches: {}", reloaded.render() == maze.render());
        }
        Err(e) => println!("Failed to reload: {}", e),
    }
}
