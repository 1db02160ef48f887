use mazewalk_core::{Layout, LayoutError, Point};
use mazewalk_generator::MazeSeed;

/// Construction parameters for a [`Maze`](crate::Maze).
///
/// Values are checked only when the maze is built, through [`layout`](Self::layout).
///
/// # Examples
///
/// ```
/// use mazewalk::MazeConfig;
///
/// let config = MazeConfig::new(4, 6).origin(10.0, 20.0).cell_size(8.0, 8.0).seed(3);
/// let layout = config.layout()?;
/// assert_eq!(layout.cell_count(), 24);
///
/// assert!(MazeConfig::new(0, 6).layout().is_err());
/// # Ok::<(), mazewalk_core::LayoutError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeConfig {
    rows: usize,
    columns: usize,
    origin: Point,
    cell_width: f64,
    cell_height: f64,
    seed: Option<MazeSeed>,
}

impl MazeConfig {
    /// Default width and height of a cell.
    pub const DEFAULT_CELL_SIZE: f64 = 1.0;

    /// Creates a configuration for a grid of `rows` by `columns` cells.
    ///
    /// The origin defaults to `(0, 0)`, cells to [`DEFAULT_CELL_SIZE`](Self::DEFAULT_CELL_SIZE)
    /// squares, and the seed to a fresh random one.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            origin: Point::default(),
            cell_width: Self::DEFAULT_CELL_SIZE,
            cell_height: Self::DEFAULT_CELL_SIZE,
            seed: None,
        }
    }

    /// Sets the top-left corner of the grid.
    #[must_use]
    pub fn origin(mut self, x: f64, y: f64) -> Self {
        self.origin = Point::new(x, y);
        self
    }

    /// Sets the width and height of every cell.
    #[must_use]
    pub fn cell_size(mut self, width: f64, height: f64) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    /// Sets the seed from an integer.
    #[must_use]
    pub fn seed(self, seed: u64) -> Self {
        self.seed_with(MazeSeed::from(seed))
    }

    /// Sets the seed.
    #[must_use]
    pub fn seed_with(mut self, seed: MazeSeed) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn seed_value(&self) -> Option<MazeSeed> {
        self.seed
    }

    /// Validates the dimensions and returns the layout they describe.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if either dimension is zero, a cell size is not
    /// a positive finite number, or the origin is not finite.
    pub fn layout(&self) -> Result<Layout, LayoutError> {
        Layout::new(
            self.origin,
            self.rows,
            self.columns,
            self.cell_width,
            self.cell_height,
        )
    }
}
