use std::fmt::{self, Display};

use mazewalk_core::{CellGrid, LayoutError, NoopRenderer, Position, Renderer};
use mazewalk_generator::{GeneratedMaze, MazeGenerator, MazeSeed};
use mazewalk_solver::{DfsSolver, SolveStats};

use crate::MazeConfig;

/// A generated maze bound to the renderer that displays it.
///
/// Construction generates the maze: every cell is drawn, the entrance and exit
/// are opened and passages are carved, all through the renderer. Afterwards
/// [`solve`](Self::solve) may be called to search from the entrance to the
/// exit.
///
/// # Examples
///
/// ```
/// use mazewalk::{Maze, MazeConfig};
/// use mazewalk_core::RecordingRenderer;
///
/// let config = MazeConfig::new(1, 2).seed(42);
/// let mut maze = Maze::with_renderer(config, RecordingRenderer::new())?;
/// assert_eq!(maze.renderer().cell_draws(), 2 + 2 + 2);
///
/// assert!(maze.solve());
/// assert_eq!(maze.renderer().moves().count(), 1);
/// # Ok::<(), mazewalk_core::LayoutError>(())
/// ```
#[derive(Debug)]
pub struct Maze<R = NoopRenderer> {
    seed: MazeSeed,
    grid: CellGrid,
    renderer: R,
    last_solve_stats: Option<SolveStats>,
}

impl Maze {
    /// Generates a maze without drawing anything.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the configuration is invalid.
    pub fn new(config: MazeConfig) -> Result<Self, LayoutError> {
        Self::with_renderer(config, NoopRenderer)
    }
}

impl<R> Maze<R>
where
    R: Renderer,
{
    /// Generates a maze, drawing every step on `renderer`.
    ///
    /// Uses the configured seed, or a random one if none was set.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the configuration is invalid. Nothing is
    /// drawn in that case.
    pub fn with_renderer(config: MazeConfig, mut renderer: R) -> Result<Self, LayoutError> {
        let layout = config.layout()?;
        let seed = config.seed_value().unwrap_or_else(MazeSeed::random);
        let GeneratedMaze { seed, grid } =
            MazeGenerator::new(layout).generate_with_renderer(seed, &mut renderer);
        log::debug!(
            "generated {}x{} maze, seed {seed}",
            grid.columns(),
            grid.rows()
        );
        Ok(Self {
            seed,
            grid,
            renderer,
            last_solve_stats: None,
        })
    }

    /// Searches from the entrance to the exit, drawing the walk.
    ///
    /// Returns whether the exit was reached. Cells visited by an earlier
    /// solve stay visited; call [`reset_visited`](Self::reset_visited) to
    /// search again from scratch.
    pub fn solve(&mut self) -> bool {
        self.find_path().is_some()
    }

    /// Like [`solve`](Self::solve), but returns the path found from entrance
    /// to exit inclusive.
    pub fn find_path(&mut self) -> Option<Vec<Position>> {
        let (path, stats) = DfsSolver::new().find_path(&mut self.grid, &mut self.renderer);
        log::debug!(
            "{} after {} forward and {} undo moves",
            if path.is_some() { "solved" } else { "no path" },
            stats.forward_moves,
            stats.undo_moves
        );
        self.last_solve_stats = Some(stats);
        path
    }
}

impl<R> Maze<R> {
    /// Returns the seed the maze was generated from.
    #[must_use]
    pub fn seed(&self) -> MazeSeed {
        self.seed
    }

    /// Returns the maze grid.
    #[must_use]
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Clears the visited flags left by a previous solve.
    pub fn reset_visited(&mut self) {
        self.grid.reset_visited();
    }

    /// Returns the statistics of the most recent solve, if any.
    #[must_use]
    pub fn last_solve_stats(&self) -> Option<SolveStats> {
        self.last_solve_stats
    }

    /// Returns the renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the renderer mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consumes the maze and returns its renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl<R> Display for Maze<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.grid, f)
    }
}

#[cfg(test)]
mod tests {
    use mazewalk_core::{Direction, MoveStyle, RecordingRenderer, RenderEvent};
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_single_cell_maze_solves_immediately() {
        let mut maze = Maze::with_renderer(MazeConfig::new(1, 1), RecordingRenderer::new())
            .unwrap();
        let entrance = maze.grid().entrance();
        assert_eq!(entrance, maze.grid().exit());
        assert!(!maze.grid()[entrance].has_top_wall());
        assert!(!maze.grid()[entrance].has_bottom_wall());

        maze.renderer_mut().clear();
        assert!(maze.solve());
        assert_eq!(maze.renderer().events(), [RenderEvent::Flush]);
    }

    #[test]
    fn test_two_by_one_seed_42() {
        let config = MazeConfig::new(1, 2).seed(42);
        let mut maze = Maze::with_renderer(config, RecordingRenderer::new()).unwrap();
        assert!(maze.grid().is_open(Position::ORIGIN, Direction::Right));

        maze.renderer_mut().clear();
        assert!(maze.solve());
        let moves: Vec<_> = maze.renderer().moves().collect();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].2, MoveStyle::Forward);

        let stats = maze.last_solve_stats().unwrap();
        assert_eq!((stats.forward_moves, stats.undo_moves), (1, 0));
    }

    #[test]
    fn test_solve_keeps_visited_flags() {
        let mut maze = Maze::new(MazeConfig::new(3, 3).seed(1)).unwrap();
        assert!(maze.solve());
        // Cells on the first path stay visited, cutting the entrance off from the exit
        assert!(!maze.solve());

        maze.reset_visited();
        assert!(maze.solve());
    }

    #[test]
    fn test_find_path_runs_entrance_to_exit() {
        let mut maze = Maze::new(MazeConfig::new(6, 9).seed(11)).unwrap();
        let path = maze.find_path().unwrap();
        assert_eq!(path.first(), Some(&maze.grid().entrance()));
        assert_eq!(path.last(), Some(&maze.grid().exit()));
        assert_eq!(
            maze.last_solve_stats().map(|stats| stats.net_moves()),
            Some(path.len() - 1)
        );
    }

    #[test]
    fn test_invalid_config_draws_nothing() {
        let mut recorder = RecordingRenderer::new();
        let result = Maze::with_renderer(MazeConfig::new(0, 4), &mut recorder);
        assert_eq!(result.err(), Some(LayoutError::NoRows));
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_random_seed_is_reported() {
        let maze = Maze::new(MazeConfig::new(5, 5)).unwrap();
        let again = Maze::new(MazeConfig::new(5, 5).seed_with(maze.seed())).unwrap();
        assert_eq!(maze.grid(), again.grid());
        assert_eq!(maze.to_string(), again.to_string());
    }

    proptest! {
        #[test]
        fn test_generated_maze_is_solvable(
            rows in 1usize..10,
            columns in 1usize..10,
            seed in any::<u64>(),
        ) {
            let mut maze = Maze::new(MazeConfig::new(rows, columns).seed(seed)).unwrap();
            prop_assert!(maze.grid().is_spanning_tree());
            prop_assert!(maze.solve());
        }

        #[test]
        fn test_same_seed_same_walls(
            rows in 1usize..10,
            columns in 1usize..10,
            seed in any::<u64>(),
        ) {
            let a = Maze::new(MazeConfig::new(rows, columns).seed(seed)).unwrap();
            let b = Maze::new(MazeConfig::new(rows, columns).seed(seed)).unwrap();
            prop_assert_eq!(a.grid(), b.grid());
        }
    }
}
