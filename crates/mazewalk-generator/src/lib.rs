//! Perfect maze generation with a randomized recursive backtracker.
//!
//! [`MazeGenerator`] builds a [`CellGrid`] for a [`Layout`], opens the entrance
//! and exit, and carves a spanning tree of passages starting from the top-left
//! cell. Every maze is determined by its [`MazeSeed`]: generating twice with the
//! same seed and layout yields identical walls.
//!
//! # Examples
//!
//! ```
//! use mazewalk_core::Layout;
//! use mazewalk_generator::{MazeGenerator, MazeSeed};
//!
//! let generator = MazeGenerator::new(Layout::with_size(8, 12)?);
//! let maze = generator.generate_with_seed(MazeSeed::from(7_u64));
//!
//! assert!(maze.grid.is_spanning_tree());
//! assert_eq!(maze.grid.open_passage_count(), 8 * 12 - 1);
//! # Ok::<(), mazewalk_core::LayoutError>(())
//! ```

use mazewalk_core::{CellGrid, Direction, Layout, NoopRenderer, Position, Renderer};
use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use tinyvec::ArrayVec;

pub use self::seed::{MazeSeed, SeedParseError};

mod seed;

/// A generated maze together with the seed that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedMaze {
    /// Seed the maze was generated from.
    pub seed: MazeSeed,
    /// The carved grid. All visited flags are cleared.
    pub grid: CellGrid,
}

/// Generates perfect mazes for a fixed layout.
#[derive(Debug, Clone, Copy)]
pub struct MazeGenerator {
    layout: Layout,
}

impl MazeGenerator {
    /// Creates a generator for mazes of the given layout.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// Generates a maze from a random seed.
    ///
    /// The seed is returned in [`GeneratedMaze::seed`] so the maze can be
    /// reproduced.
    #[must_use]
    pub fn generate(&self) -> GeneratedMaze {
        self.generate_with_seed(MazeSeed::random())
    }

    /// Generates the maze determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: MazeSeed) -> GeneratedMaze {
        self.generate_with_renderer(seed, &mut NoopRenderer)
    }

    /// Generates the maze determined by `seed`, drawing progress on `renderer`.
    ///
    /// The renderer sees, in order:
    ///
    /// 1. every cell drawn once, fully walled, in column-major order;
    /// 2. the entrance and exit cells redrawn with their outer wall removed;
    /// 3. each cell redrawn in its final state when carving leaves it for the
    ///    last time.
    ///
    /// A frame is flushed after every cell draw.
    pub fn generate_with_renderer<R>(&self, seed: MazeSeed, renderer: &mut R) -> GeneratedMaze
    where
        R: Renderer + ?Sized,
    {
        log::debug!(
            "generating {}x{} maze with seed {seed}",
            self.layout.columns(),
            self.layout.rows()
        );

        let mut grid = CellGrid::new(self.layout);
        for pos in grid.positions() {
            draw_frame(&mut grid, pos, renderer);
        }

        break_entrance_and_exit(&mut grid, renderer);

        let mut rng = Pcg64::from_seed(seed.into());
        let entrance = grid.entrance();
        carve(&mut grid, entrance, &mut rng, renderer);
        grid.reset_visited();

        debug_assert!(grid.is_spanning_tree());
        debug_assert!(grid.has_symmetric_walls());

        GeneratedMaze { seed, grid }
    }
}

fn draw_frame<R>(grid: &mut CellGrid, pos: Position, renderer: &mut R)
where
    R: Renderer + ?Sized,
{
    grid.draw_cell(pos, renderer);
    renderer.flush();
}

/// Removes the top wall of the entrance and the bottom wall of the exit.
///
/// For a single-cell grid both walls belong to the same cell.
pub fn break_entrance_and_exit<R>(grid: &mut CellGrid, renderer: &mut R)
where
    R: Renderer + ?Sized,
{
    let entrance = grid.entrance();
    grid.remove_wall(entrance, Direction::Up);
    draw_frame(grid, entrance, renderer);

    let exit = grid.exit();
    grid.remove_wall(exit, Direction::Down);
    draw_frame(grid, exit, renderer);
}

/// Carves passages from `start` with a randomized depth-first backtracker.
///
/// Starting at `start`, each step picks uniformly at random among the
/// unvisited neighbors (considered in the order left, up, right, down), removes
/// the wall towards it and continues from there. A cell with no unvisited
/// neighbor is drawn in its final state and the walk backs up to the previous
/// cell. The traversal keeps its own stack, so grid size is not limited by
/// the call stack.
///
/// Cells already marked visited are treated as carved and never entered. On an
/// unvisited grid the result is a spanning tree over all cells.
pub fn carve<G, R>(grid: &mut CellGrid, start: Position, rng: &mut G, renderer: &mut R)
where
    G: Rng,
    R: Renderer + ?Sized,
{
    grid.mark_visited(start);
    let mut stack = vec![start];
    let mut carved = 0_usize;

    while let Some(&current) = stack.last() {
        let candidates = unvisited_neighbors(grid, current);
        if candidates.is_empty() {
            draw_frame(grid, current, renderer);
            stack.pop();
            continue;
        }

        let (dir, next) = candidates[rng.random_range(0..candidates.len())];
        log::trace!("carving {dir} from {current} to {next}");
        grid.remove_wall(current, dir);
        grid.mark_visited(next);
        stack.push(next);
        carved += 1;
    }

    log::debug!("carved {carved} passages from {start}");
}

/// Unvisited in-bounds neighbors, with the direction leading to each, in the
/// order left, up, right, down.
fn unvisited_neighbors(grid: &CellGrid, pos: Position) -> ArrayVec<[(Direction, Position); 4]> {
    [Direction::Left, Direction::Up, Direction::Right, Direction::Down]
        .into_iter()
        .filter_map(|dir| grid.neighbor(pos, dir).map(|next| (dir, next)))
        .filter(|&(_, next)| !grid.is_visited(next))
        .collect()
}
