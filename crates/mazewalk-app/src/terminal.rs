//! A [`Renderer`] that draws mazes as text.
//!
//! Every cell occupies a 3×2 block of characters in the same form as the
//! [`Display`](std::fmt::Display) output of [`CellGrid`](mazewalk_core::CellGrid):
//! `+--` above and `|  ` beside. Solver moves are drawn inside cells and
//! through the openings between them, `*` for forward moves and `.` for
//! undone ones.

use std::{
    fmt::{self, Display},
    io::{self, Write},
};

use mazewalk_core::{Layout, MoveStyle, Point, Position, Rect, Renderer, Walls};

const CELL_WIDTH: usize = 3;
const CELL_HEIGHT: usize = 2;

const ESC_CLEAR: &str = "\x1b[2J";
const ESC_HOME: &str = "\x1b[H";

/// A character canvas for a maze layout.
///
/// Renderer coordinates are mapped back to cells through the layout, so any
/// origin and cell size can be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCanvas {
    layout: Layout,
    width: usize,
    chars: Vec<char>,
}

impl TextCanvas {
    /// Creates a blank canvas for `layout`.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        let width = layout.columns() * CELL_WIDTH + 1;
        let height = layout.rows() * CELL_HEIGHT + 1;
        Self {
            layout,
            width,
            chars: vec![' '; width * height],
        }
    }

    fn set(&mut self, column: usize, line: usize, ch: char) {
        self.chars[line * self.width + column] = ch;
    }

    fn cell_at(&self, point: Point) -> Option<Position> {
        let pos = self.layout.position_at(point);
        if pos.is_none() {
            log::warn!("ignoring drawing outside the maze at ({}, {})", point.x, point.y);
        }
        pos
    }

    /// Draws the walls of the cell at `bounds`.
    pub fn draw_cell(&mut self, bounds: Rect, walls: Walls) {
        let Some(pos) = self.cell_at(bounds.center()) else {
            return;
        };
        let (left, top) = (pos.x() * CELL_WIDTH, pos.y() * CELL_HEIGHT);
        let (right, bottom) = (left + CELL_WIDTH, top + CELL_HEIGHT);

        for line in [top, bottom] {
            self.set(left, line, '+');
            self.set(right, line, '+');
        }
        for (line, wall) in [(top, Walls::TOP), (bottom, Walls::BOTTOM)] {
            let ch = if walls.contains(wall) { '-' } else { ' ' };
            for column in left + 1..right {
                self.set(column, line, ch);
            }
        }
        for (column, wall) in [(left, Walls::LEFT), (right, Walls::RIGHT)] {
            let ch = if walls.contains(wall) { '|' } else { ' ' };
            self.set(column, top + 1, ch);
        }
    }

    /// Marks the step between the cells containing `from` and `to`.
    ///
    /// A forward move marks both cells and the opening between them. An undo
    /// move marks only the cell backed out of and the opening, so the cell the
    /// solver returns to keeps its forward mark.
    pub fn draw_move(&mut self, from: Point, to: Point, style: MoveStyle) {
        let (Some(from), Some(to)) = (self.cell_at(from), self.cell_at(to)) else {
            return;
        };
        let ch = match style {
            MoveStyle::Forward => '*',
            MoveStyle::Undo => '.',
        };
        if style.is_forward() {
            self.mark_cell(from, ch);
        }
        self.mark_cell(to, ch);

        if from.y() == to.y() && from.x().abs_diff(to.x()) == 1 {
            let column = from.x().max(to.x()) * CELL_WIDTH;
            self.set(column, from.y() * CELL_HEIGHT + 1, ch);
        } else if from.x() == to.x() && from.y().abs_diff(to.y()) == 1 {
            let line = from.y().max(to.y()) * CELL_HEIGHT;
            let left = from.x() * CELL_WIDTH;
            for column in left + 1..left + CELL_WIDTH {
                self.set(column, line, ch);
            }
        }
    }

    fn mark_cell(&mut self, pos: Position, ch: char) {
        let (left, line) = (pos.x() * CELL_WIDTH, pos.y() * CELL_HEIGHT + 1);
        for column in left + 1..left + CELL_WIDTH {
            self.set(column, line, ch);
        }
    }
}

impl Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.chars.chunks(self.width) {
            for ch in line {
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A renderer that keeps a [`TextCanvas`] and optionally redraws it on a
/// terminal at every frame.
///
/// When animating, each flush moves the cursor home and writes the whole
/// canvas; the screen is cleared before the first frame. Write errors stop
/// further output and are kept for [`take_error`](Self::take_error), since
/// the [`Renderer`] methods cannot fail.
#[derive(Debug)]
pub struct TerminalRenderer<W> {
    canvas: TextCanvas,
    out: W,
    animate: bool,
    frames: usize,
    error: Option<io::Error>,
}

impl<W> TerminalRenderer<W>
where
    W: Write,
{
    /// Creates a renderer for `layout` writing frames to `out`.
    ///
    /// With `animate` unset nothing is written; the final picture is
    /// available from [`canvas`](Self::canvas).
    pub fn new(layout: Layout, out: W, animate: bool) -> Self {
        Self {
            canvas: TextCanvas::new(layout),
            out,
            animate,
            frames: 0,
            error: None,
        }
    }

    /// Returns the canvas drawn so far.
    pub fn canvas(&self) -> &TextCanvas {
        &self.canvas
    }

    /// Returns the number of frames flushed.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Returns the first write error, if any, and clears it.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Consumes the renderer and returns the output.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self) -> io::Result<()> {
        if self.frames == 1 {
            self.out.write_all(ESC_CLEAR.as_bytes())?;
        }
        write!(self.out, "{ESC_HOME}{}", self.canvas)?;
        self.out.flush()
    }
}

impl<W> Renderer for TerminalRenderer<W>
where
    W: Write,
{
    fn draw_cell(&mut self, bounds: Rect, walls: Walls) {
        self.canvas.draw_cell(bounds, walls);
    }

    fn draw_move(&mut self, from: Point, to: Point, style: MoveStyle) {
        self.canvas.draw_move(from, to, style);
    }

    fn flush(&mut self) {
        self.frames += 1;
        if !self.animate || self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_frame() {
            log::error!("failed to write frame: {e}");
            self.error = Some(e);
        }
    }
}
