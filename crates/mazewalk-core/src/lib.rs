//! Core data structures for maze generation and solving.
//!
//! This crate provides the grid model shared by the generator, the solver and
//! any front end that draws mazes.
//!
//! # Overview
//!
//! 1. **Coordinates** - [`Position`] (column, row) and [`Direction`].
//! 2. **Geometry** - [`Layout`] validates maze dimensions and maps cells to
//!    pixel rectangles ([`Rect`], [`Point`]).
//! 3. **Cells** - [`Cell`] holds four [`Walls`] and a visited flag;
//!    [`CellGrid`] owns all cells and removes shared walls in pairs.
//! 4. **Rendering** - the [`Renderer`] capability through which algorithms
//!    report visual changes, with [`NoopRenderer`], [`Paced`] and
//!    [`RecordingRenderer`] implementations.
//!
//! # Examples
//!
//! ```
//! use mazewalk_core::{CellGrid, Direction, Layout, Position};
//!
//! let mut grid = CellGrid::new(Layout::with_size(2, 2)?);
//! grid.remove_wall(Position::new(0, 0), Direction::Right);
//!
//! // Shared walls are removed on both sides
//! assert!(!grid[Position::new(1, 0)].has_left_wall());
//! assert_eq!(grid.open_passage_count(), 1);
//! # Ok::<(), mazewalk_core::LayoutError>(())
//! ```

pub mod cell;
pub mod grid;
pub mod layout;
pub mod position;
pub mod render;

// Re-export commonly used types
pub use self::{
    cell::{Cell, Walls},
    grid::{CellGrid, GridParseError},
    layout::{Layout, LayoutError, Point, Rect},
    position::{Direction, Position},
    render::{MoveStyle, NoopRenderer, Paced, RecordingRenderer, RenderEvent, Renderer},
};
