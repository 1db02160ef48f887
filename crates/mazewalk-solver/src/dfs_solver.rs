use mazewalk_core::{CellGrid, Direction, NoopRenderer, Position, Renderer};

/// Statistics collected during a depth-first solve.
///
/// # Examples
///
/// ```
/// use mazewalk_core::CellGrid;
/// use mazewalk_solver::DfsSolver;
///
/// let mut grid: CellGrid = "
///     +  +--+--+
///     |        |
///     +--+--+  +
/// ".parse()?;
///
/// let (solved, stats) = DfsSolver::new().solve_headless(&mut grid);
/// assert!(solved);
/// assert_eq!(stats.forward_moves, 2);
/// assert_eq!(stats.undo_moves, 0);
/// # Ok::<(), mazewalk_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Number of cells entered, including the start.
    pub visited_cells: usize,
    /// Number of forward moves drawn.
    pub forward_moves: usize,
    /// Number of moves retracted after a dead end.
    pub undo_moves: usize,
}

impl SolveStats {
    /// Creates a new empty statistics object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of moves that were not retracted.
    ///
    /// After a successful solve this is the length of the path in steps.
    #[must_use]
    pub fn net_moves(&self) -> usize {
        self.forward_moves - self.undo_moves
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    pos: Position,
    next_dir: usize,
}

impl Frame {
    fn new(pos: Position) -> Self {
        Self { pos, next_dir: 0 }
    }
}

/// A depth-first maze solver.
///
/// From each cell the solver tries [`Direction::ALL`] in order (left, right,
/// up, down) and enters a neighbor when no wall separates them and the
/// neighbor is not yet visited. Entering a cell draws a forward move; when a
/// neighbor's whole branch fails to reach the target, the move into it is
/// redrawn as an undo move and the next direction is tried. The first
/// successful branch wins.
///
/// The solver relies on the grid's visited flags and does not clear them
/// first: callers reset them with [`CellGrid::reset_visited`] before solving.
/// A frame is flushed each time a cell is entered.
///
/// The search keeps its own stack, so grid size is not limited by the call
/// stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsSolver;

impl DfsSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Searches from the entrance to the exit of `grid`, drawing on `renderer`.
    ///
    /// Returns whether the exit was reached, along with search statistics.
    pub fn solve<R>(&self, grid: &mut CellGrid, renderer: &mut R) -> (bool, SolveStats)
    where
        R: Renderer + ?Sized,
    {
        let (path, stats) = self.find_path(grid, renderer);
        (path.is_some(), stats)
    }

    /// Like [`solve`](Self::solve), without drawing anything.
    pub fn solve_headless(&self, grid: &mut CellGrid) -> (bool, SolveStats) {
        self.solve(grid, &mut NoopRenderer)
    }

    /// Searches from the entrance to the exit of `grid` and returns the path
    /// found, from entrance to exit inclusive.
    pub fn find_path<R>(
        &self,
        grid: &mut CellGrid,
        renderer: &mut R,
    ) -> (Option<Vec<Position>>, SolveStats)
    where
        R: Renderer + ?Sized,
    {
        let (start, target) = (grid.entrance(), grid.exit());
        self.find_path_between(grid, start, target, renderer)
    }

    /// Searches from `start` to `target` and returns the path found.
    ///
    /// `start` is entered even if it is already marked visited.
    ///
    /// # Panics
    ///
    /// Panics if `start` lies outside the grid.
    pub fn find_path_between<R>(
        &self,
        grid: &mut CellGrid,
        start: Position,
        target: Position,
        renderer: &mut R,
    ) -> (Option<Vec<Position>>, SolveStats)
    where
        R: Renderer + ?Sized,
    {
        let mut stats = SolveStats::new();
        let mut stack = vec![Frame::new(start)];
        enter(grid, start, renderer, &mut stats);

        let found = loop {
            if stack.last().is_some_and(|frame| frame.pos == target) {
                break true;
            }
            let Some(frame) = stack.last_mut() else {
                break false;
            };

            let Some(&dir) = Direction::ALL.get(frame.next_dir) else {
                // Every direction failed: retract the move into this cell.
                let dead_end = frame.pos;
                stack.pop();
                if let Some(parent) = stack.last() {
                    log::trace!("dead end at {dead_end}, backing up to {}", parent.pos);
                    grid.draw_move(parent.pos, dead_end, true, renderer);
                    stats.undo_moves += 1;
                }
                continue;
            };
            frame.next_dir += 1;

            let pos = frame.pos;
            if grid[pos].has_wall(dir) {
                continue;
            }
            let Some(next) = grid.neighbor(pos, dir) else {
                continue;
            };
            if grid.is_visited(next) {
                continue;
            }

            grid.draw_move(pos, next, false, renderer);
            stats.forward_moves += 1;
            enter(grid, next, renderer, &mut stats);
            stack.push(Frame::new(next));
        };

        log::debug!(
            "search from {start} to {target} {}: {stats:?}",
            if found { "succeeded" } else { "failed" }
        );

        let path = found.then(|| stack.iter().map(|frame| frame.pos).collect());
        (path, stats)
    }
}

fn enter<R>(grid: &mut CellGrid, pos: Position, renderer: &mut R, stats: &mut SolveStats)
where
    R: Renderer + ?Sized,
{
    renderer.flush();
    grid.mark_visited(pos);
    stats.visited_cells += 1;
}

#[cfg(test)]
mod tests {
    use mazewalk_core::{Layout, MoveStyle, RecordingRenderer, RenderEvent};
    use mazewalk_generator::{MazeGenerator, MazeSeed};
    use proptest::prelude::*;

    use super::*;
    use crate::testing::SolveTester;

    #[test]
    fn test_single_cell_is_solved_immediately() {
        SolveTester::from_str(
            "
            +  +
            |  |
            +  +
            ",
        )
        .solve()
        .assert_solved()
        .assert_moves(0, 0)
        .assert_path(&[(0, 0)]);
    }

    #[test]
    fn test_two_by_one_single_forward_move() {
        SolveTester::from_str(
            "
            +  +--+
            |     |
            +--+  +
            ",
        )
        .solve()
        .assert_solved()
        .assert_moves(1, 0)
        .assert_path(&[(0, 0), (1, 0)]);
    }

    #[test]
    fn test_dead_end_is_undone() {
        // Down from (0, 0) is tried only after right, which dead-ends at (1, 0).
        SolveTester::from_str(
            "
            +  +--+
            |     |
            +  +--+
            |     |
            +--+  +
            ",
        )
        .solve()
        .assert_solved()
        .assert_moves(3, 1)
        .assert_undone(&[((0, 0), (1, 0))])
        .assert_path(&[(0, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_direction_order_is_left_right_up_down() {
        // From (1, 0) the left and right branches dead-end before the move
        // down reaches the exit.
        SolveTester::from_str(
            "
            +--+  +--+
            |        |
            +--+  +--+
            |  |     |
            +--+--+  +
            ",
        )
        .solve_from(1, 0)
        .assert_solved()
        .assert_undone(&[((1, 0), (0, 0)), ((1, 0), (2, 0))])
        .assert_path(&[(1, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_disconnected_maze_is_unsolvable() {
        SolveTester::from_str(
            "
            +  +--+--+
            |     |  |
            +--+--+  +
            ",
        )
        .solve()
        .assert_unsolved()
        .assert_moves(1, 1);
    }

    #[test]
    fn test_fully_visited_grid_is_unsolvable() {
        let mut grid: CellGrid = "
            +  +--+
            |     |
            +--+  +
        "
        .parse()
        .unwrap();
        grid.mark_all_visited();
        let (solved, stats) = DfsSolver::new().solve_headless(&mut grid);
        assert!(!solved);
        assert_eq!(stats.forward_moves, 0);
        assert_eq!(stats.visited_cells, 1);
    }

    #[test]
    fn test_flush_precedes_each_entered_cell() {
        let mut grid: CellGrid = "
            +  +--+
            |     |
            +--+  +
        "
        .parse()
        .unwrap();
        let mut recorder = RecordingRenderer::new();
        DfsSolver::new().solve(&mut grid, &mut recorder);
        let layout = *grid.layout();
        let a = layout.cell_bounds(Position::new(0, 0)).center();
        let b = layout.cell_bounds(Position::new(1, 0)).center();
        assert_eq!(
            recorder.events(),
            [
                RenderEvent::Flush,
                RenderEvent::Move {
                    from: a,
                    to: b,
                    style: MoveStyle::Forward
                },
                RenderEvent::Flush,
            ]
        );
    }

    #[test]
    fn test_long_corridor_does_not_exhaust_stack() {
        let generator = MazeGenerator::new(Layout::with_size(1, 100_000).unwrap());
        let mut maze = generator.generate_with_seed(MazeSeed::from(1_u64));
        let (path, stats) = DfsSolver::new().find_path(&mut maze.grid, &mut NoopRenderer);
        assert_eq!(path.map(|path| path.len()), Some(100_000));
        assert_eq!(stats.forward_moves, 99_999);
    }

    proptest! {
        #[test]
        fn test_generated_mazes_are_solvable(
            rows in 1usize..12,
            columns in 1usize..12,
            seed in any::<u64>(),
        ) {
            let generator = MazeGenerator::new(Layout::with_size(rows, columns).unwrap());
            let maze = generator.generate_with_seed(MazeSeed::from(seed));
            let tester = SolveTester::new(maze.grid).solve().assert_solved();
            tester.assert_replayed_path_is_valid();
        }
    }
}
