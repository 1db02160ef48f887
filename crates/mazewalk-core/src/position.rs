//! Grid coordinates and the four movement directions.

use std::fmt::{self, Display};

use crate::Walls;

/// A cell coordinate in a maze grid.
///
/// `x` is the column index and `y` is the row index, both counted from the
/// top-left cell `(0, 0)`.
///
/// # Examples
///
/// ```
/// use mazewalk_core::{Direction, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.x(), 2);
/// assert_eq!(pos.y(), 3);
///
/// assert_eq!(pos.offset(Direction::Left), Some(Position::new(1, 3)));
/// assert_eq!(Position::new(0, 0).offset(Direction::Up), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// The top-left cell, where carving and solving start.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a position from a column and a row index.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the column index.
    #[must_use]
    pub const fn x(self) -> usize {
        self.x
    }

    /// Returns the row index.
    #[must_use]
    pub const fn y(self) -> usize {
        self.y
    }

    /// Returns the position one step away in `dir`.
    ///
    /// Returns `None` if the step would leave the non-negative quadrant. Upper
    /// bounds are checked by [`CellGrid::neighbor`](crate::CellGrid::neighbor).
    #[must_use]
    pub fn offset(self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Self::new(x, y))
    }

    /// Returns the direction leading from `self` to an adjacent `other`.
    ///
    /// Returns `None` if the two positions are not grid-adjacent.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazewalk_core::{Direction, Position};
    ///
    /// let a = Position::new(1, 1);
    /// assert_eq!(a.direction_to(Position::new(1, 2)), Some(Direction::Down));
    /// assert_eq!(a.direction_to(Position::new(2, 2)), None);
    /// ```
    #[must_use]
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.offset(dir) == Some(other))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four grid directions.
///
/// "Up" decreases the row index and "down" increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum Direction {
    /// Towards column `x - 1`.
    #[default]
    Left,
    /// Towards column `x + 1`.
    Right,
    /// Towards row `y - 1`.
    Up,
    /// Towards row `y + 1`.
    Down,
}

impl Direction {
    /// All directions in the order the solver tries them: left, right, up, down.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Returns the wall a cell has on this side.
    #[must_use]
    pub const fn wall(self) -> Walls {
        match self {
            Self::Left => Walls::LEFT,
            Self::Right => Walls::RIGHT,
            Self::Up => Walls::TOP,
            Self::Down => Walls::BOTTOM,
        }
    }

    /// Returns the `(dx, dy)` step of this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };
        f.write_str(s)
    }
}
