//! Maze sessions: generate a perfect maze and walk it from entrance to exit.
//!
//! [`Maze`] ties together the generator and the solver behind a small surface:
//! constructing a maze carves it, and [`Maze::solve`] searches it. Both report
//! their progress to the [`Renderer`](mazewalk_core::Renderer) the maze was
//! created with.
//!
//! # Examples
//!
//! ```
//! use mazewalk::{Maze, MazeConfig};
//!
//! let mut maze = Maze::new(MazeConfig::new(10, 15).seed(42))?;
//! assert!(maze.solve());
//!
//! let stats = maze.last_solve_stats().unwrap();
//! assert!(stats.forward_moves >= stats.undo_moves);
//! # Ok::<(), mazewalk_core::LayoutError>(())
//! ```

pub use self::{config::MazeConfig, maze::Maze};

mod config;
mod maze;
