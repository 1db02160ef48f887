//! Example demonstrating basic maze generation.
//!
//! This example shows how to:
//! - Create a `MazeGenerator` for a layout
//! - Generate a random or seeded maze
//! - Display the maze, its seed and a few statistics
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_maze
//! ```
//!
//! Choose the size:
//!
//! ```sh
//! cargo run --example generate_maze -- --rows 20 --columns 40
//! ```
//!
//! Reproduce a maze from an integer or a 64-digit hex seed:
//!
//! ```sh
//! cargo run --example generate_maze -- --seed 42
//! ```

use std::process;

use clap::Parser;
use mazewalk_core::{CellGrid, Direction, Layout};
use mazewalk_generator::{GeneratedMaze, MazeGenerator, MazeSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of rows.
    #[arg(long, value_name = "COUNT", default_value_t = 10)]
    rows: usize,

    /// Number of columns.
    #[arg(long, value_name = "COUNT", default_value_t = 16)]
    columns: usize,

    /// Seed as an integer or 64 hex digits. Random when omitted.
    #[arg(long, value_name = "SEED", value_parser = parse_seed)]
    seed: Option<MazeSeed>,
}

fn parse_seed(s: &str) -> Result<MazeSeed, String> {
    if let Ok(value) = s.parse::<u64>() {
        return Ok(MazeSeed::from(value));
    }
    s.parse().map_err(|e| format!("{e}"))
}

fn main() {
    let args = Args::parse();
    let layout = match Layout::with_size(args.rows, args.columns) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Invalid size: {e}");
            process::exit(2);
        }
    };

    let generator = MazeGenerator::new(layout);
    let maze = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    print_maze(&maze);
}

fn dead_ends(grid: &CellGrid) -> usize {
    grid.positions()
        .filter(|&pos| {
            Direction::ALL
                .into_iter()
                .filter(|&dir| grid.is_open(pos, dir))
                .count()
                == 1
        })
        .count()
}

fn print_maze(maze: &GeneratedMaze) {
    println!("Seed:");
    println!("  {}", maze.seed);
    println!();

    println!("Maze:");
    for line in maze.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Stats:");
    println!("  size: {}x{}", maze.grid.columns(), maze.grid.rows());
    println!("  passages: {}", maze.grid.open_passage_count());
    println!("  dead ends: {}", dead_ends(&maze.grid));
}
