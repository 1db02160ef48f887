//! Depth-first maze solving.
//!
//! [`DfsSolver`] walks from the entrance of a [`CellGrid`](mazewalk_core::CellGrid)
//! towards its exit, trying directions in a fixed order and retracting on dead
//! ends. Every step is reported to a [`Renderer`](mazewalk_core::Renderer) as a
//! forward or undo move, so the search can be animated.

pub use self::dfs_solver::*;

mod dfs_solver;

#[cfg(test)]
mod testing;
