//! A single maze cell: its four walls and visitation state.

use crate::{Direction, MoveStyle, Rect, Renderer};

bitflags::bitflags! {
    /// The set of walls a cell currently has.
    ///
    /// A freshly created cell has [`Walls::all()`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Walls: u8 {
        /// Wall on the top side, shared with the cell above.
        const TOP = 1 << 0;
        /// Wall on the bottom side, shared with the cell below.
        const BOTTOM = 1 << 1;
        /// Wall on the left side, shared with the cell to the left.
        const LEFT = 1 << 2;
        /// Wall on the right side, shared with the cell to the right.
        const RIGHT = 1 << 3;
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::all()
    }
}

/// One cell of a maze grid.
///
/// Cells start with all four walls and unvisited. Wall removal between two
/// cells always goes through [`CellGrid`](crate::CellGrid) so that shared walls
/// stay consistent on both sides.
///
/// A cell remembers the rectangle it was last drawn in; [`Cell::draw_move`]
/// uses it to connect cell centers.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    walls: Walls,
    visited: bool,
    bounds: Rect,
}

impl Cell {
    /// Creates a walled, unvisited cell occupying `bounds`.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            walls: Walls::all(),
            visited: false,
            bounds,
        }
    }

    /// Returns the walls the cell currently has.
    #[must_use]
    pub fn walls(&self) -> Walls {
        self.walls
    }

    /// Returns `true` if the cell has a wall on the `dir` side.
    #[must_use]
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls.contains(dir.wall())
    }

    /// Returns `true` if the top wall is present.
    #[must_use]
    pub fn has_top_wall(&self) -> bool {
        self.walls.contains(Walls::TOP)
    }

    /// Returns `true` if the bottom wall is present.
    #[must_use]
    pub fn has_bottom_wall(&self) -> bool {
        self.walls.contains(Walls::BOTTOM)
    }

    /// Returns `true` if the left wall is present.
    #[must_use]
    pub fn has_left_wall(&self) -> bool {
        self.walls.contains(Walls::LEFT)
    }

    /// Returns `true` if the right wall is present.
    #[must_use]
    pub fn has_right_wall(&self) -> bool {
        self.walls.contains(Walls::RIGHT)
    }

    /// Returns `true` if the cell has been visited by the running traversal.
    #[must_use]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Returns the rectangle the cell was last drawn in.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    pub(crate) fn remove_wall(&mut self, dir: Direction) {
        self.walls.remove(dir.wall());
    }

    pub(crate) fn set_wall(&mut self, dir: Direction, present: bool) {
        self.walls.set(dir.wall(), present);
    }

    /// Draws the cell's current walls inside `bounds`.
    ///
    /// The bounds are remembered for later [`draw_move`](Self::draw_move)
    /// calls. Drawing again reflects the current wall state.
    pub fn draw<R>(&mut self, bounds: Rect, renderer: &mut R)
    where
        R: Renderer + ?Sized,
    {
        self.bounds = bounds;
        renderer.draw_cell(bounds, self.walls);
    }

    /// Draws a path segment from this cell's center to `to`'s center.
    ///
    /// With `undo` set the segment is drawn in the backtrack style.
    pub fn draw_move<R>(&self, to: &Cell, undo: bool, renderer: &mut R)
    where
        R: Renderer + ?Sized,
    {
        let style = if undo {
            MoveStyle::Undo
        } else {
            MoveStyle::Forward
        };
        renderer.draw_move(self.bounds.center(), to.bounds.center(), style);
    }
}
