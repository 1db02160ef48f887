//! Maze dimensions and the pixel geometry of its cells.

use crate::Position;

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate, growing downwards.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle given by its top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x0: f64,
    /// Top edge.
    pub y0: f64,
    /// Right edge.
    pub x1: f64,
    /// Bottom edge.
    pub y1: f64,
}

impl Rect {
    /// Creates a rectangle from its corners.
    #[must_use]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Returns the center of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }
}

/// Error returned when a [`Layout`] is built from invalid parameters.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    /// The maze must have at least one row.
    #[display("row count must be positive")]
    NoRows,
    /// The maze must have at least one column.
    #[display("column count must be positive")]
    NoColumns,
    /// Cell width is zero, negative, or not finite.
    #[display("invalid cell width: {_0}")]
    InvalidCellWidth(#[error(not(source))] f64),
    /// Cell height is zero, negative, or not finite.
    #[display("invalid cell height: {_0}")]
    InvalidCellHeight(#[error(not(source))] f64),
    /// The origin has a non-finite coordinate.
    #[display("invalid origin: ({}, {})", _0.x, _0.y)]
    InvalidOrigin(#[error(not(source))] Point),
}

/// Validated maze dimensions and cell geometry.
///
/// A layout describes a grid of `columns × rows` cells whose top-left corner
/// sits at `origin`, each cell being `cell_width × cell_height` pixels.
///
/// # Examples
///
/// ```
/// use mazewalk_core::{Layout, Point, Position, Rect};
///
/// let layout = Layout::new(Point::new(10.0, 20.0), 3, 4, 5.0, 6.0)?;
/// assert_eq!(layout.rows(), 3);
/// assert_eq!(layout.columns(), 4);
/// assert_eq!(
///     layout.cell_bounds(Position::new(1, 2)),
///     Rect::new(15.0, 32.0, 20.0, 38.0),
/// );
/// # Ok::<(), mazewalk_core::LayoutError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    origin: Point,
    rows: usize,
    columns: usize,
    cell_width: f64,
    cell_height: f64,
}

impl Layout {
    /// Creates a layout, rejecting degenerate configurations.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if `rows` or `columns` is zero, if a cell
    /// dimension is not a positive finite number, or if the origin is not
    /// finite.
    pub fn new(
        origin: Point,
        rows: usize,
        columns: usize,
        cell_width: f64,
        cell_height: f64,
    ) -> Result<Self, LayoutError> {
        if !origin.x.is_finite() || !origin.y.is_finite() {
            return Err(LayoutError::InvalidOrigin(origin));
        }
        if rows == 0 {
            return Err(LayoutError::NoRows);
        }
        if columns == 0 {
            return Err(LayoutError::NoColumns);
        }
        if !(cell_width.is_finite() && cell_width > 0.0) {
            return Err(LayoutError::InvalidCellWidth(cell_width));
        }
        if !(cell_height.is_finite() && cell_height > 0.0) {
            return Err(LayoutError::InvalidCellHeight(cell_height));
        }
        Ok(Self {
            origin,
            rows,
            columns,
            cell_width,
            cell_height,
        })
    }

    /// Creates a layout with unit cells at the origin.
    ///
    /// Convenient when the maze is never drawn.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if `rows` or `columns` is zero.
    pub fn with_size(rows: usize, columns: usize) -> Result<Self, LayoutError> {
        Self::new(Point::default(), rows, columns, 1.0, 1.0)
    }

    /// Returns the top-left corner of the maze.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Returns the width of one cell.
    #[must_use]
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Returns the height of one cell.
    #[must_use]
    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x() < self.columns && pos.y() < self.rows
    }

    /// Returns the entrance cell, `(0, 0)`.
    #[must_use]
    pub fn entrance(&self) -> Position {
        Position::ORIGIN
    }

    /// Returns the exit cell, the bottom-right corner.
    #[must_use]
    pub fn exit(&self) -> Position {
        Position::new(self.columns - 1, self.rows - 1)
    }

    /// Returns the pixel rectangle covered by the cell at `pos`.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn cell_bounds(&self, pos: Position) -> Rect {
        let x0 = self.origin.x + pos.x() as f64 * self.cell_width;
        let y0 = self.origin.y + pos.y() as f64 * self.cell_height;
        let x1 = self.origin.x + (pos.x() + 1) as f64 * self.cell_width;
        let y1 = self.origin.y + (pos.y() + 1) as f64 * self.cell_height;
        Rect::new(x0, y0, x1, y1)
    }

    /// Returns the cell containing the point, if any.
    ///
    /// Useful for mapping renderer coordinates back to the grid.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn position_at(&self, point: Point) -> Option<Position> {
        let fx = (point.x - self.origin.x) / self.cell_width;
        let fy = (point.y - self.origin.y) / self.cell_height;
        if !(fx >= 0.0 && fy >= 0.0) {
            return None;
        }
        let pos = Position::new(fx.floor() as usize, fy.floor() as usize);
        self.contains(pos).then_some(pos)
    }

    /// Returns all positions in column-major, row-minor order.
    ///
    /// Column 0 rows `0..R` come first, then column 1, and so on.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let rows = self.rows;
        (0..self.columns).flat_map(move |x| (0..rows).map(move |y| Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_degenerate_layouts() {
        let origin = Point::default();
        assert_eq!(
            Layout::new(origin, 0, 3, 1.0, 1.0),
            Err(LayoutError::NoRows)
        );
        assert_eq!(
            Layout::new(origin, 3, 0, 1.0, 1.0),
            Err(LayoutError::NoColumns)
        );
        assert_eq!(
            Layout::new(origin, 3, 3, 0.0, 1.0),
            Err(LayoutError::InvalidCellWidth(0.0))
        );
        assert_eq!(
            Layout::new(origin, 3, 3, 1.0, -2.0),
            Err(LayoutError::InvalidCellHeight(-2.0))
        );
        assert!(matches!(
            Layout::new(origin, 3, 3, f64::NAN, 1.0),
            Err(LayoutError::InvalidCellWidth(_))
        ));
        assert!(matches!(
            Layout::new(Point::new(f64::INFINITY, 0.0), 3, 3, 1.0, 1.0),
            Err(LayoutError::InvalidOrigin(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(LayoutError::NoRows.to_string(), "row count must be positive");
        assert_eq!(
            LayoutError::InvalidCellWidth(-1.0).to_string(),
            "invalid cell width: -1"
        );
    }

    #[test]
    fn test_entrance_and_exit() {
        let layout = Layout::with_size(3, 5).unwrap();
        assert_eq!(layout.entrance(), Position::new(0, 0));
        assert_eq!(layout.exit(), Position::new(4, 2));
        assert_eq!(layout.cell_count(), 15);
    }

    #[test]
    fn test_positions_are_column_major() {
        let layout = Layout::with_size(2, 3).unwrap();
        let positions: Vec<_> = layout.positions().collect();
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(2, 0),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_position_at_inverts_cell_bounds() {
        let layout = Layout::new(Point::new(50.0, 50.0), 4, 6, 20.0, 10.0).unwrap();
        for pos in layout.positions() {
            let center = layout.cell_bounds(pos).center();
            assert_eq!(layout.position_at(center), Some(pos));
        }
        assert_eq!(layout.position_at(Point::new(0.0, 0.0)), None);
        assert_eq!(layout.position_at(Point::new(500.0, 55.0)), None);
    }
}
