//! The rendering capability maze algorithms report their progress through.
//!
//! Generation and solving never draw anything themselves. They call a
//! [`Renderer`] whenever a cell's walls change or the solver moves, and call
//! [`Renderer::flush`] at frame boundaries. [`NoopRenderer`] ignores
//! everything, so headless runs pay nothing; [`Paced`] adds a per-frame delay
//! for animation; [`RecordingRenderer`] keeps the event stream for inspection.

use std::{thread, time::Duration};

use crate::{Point, Rect, Walls};

/// Visual style of a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum MoveStyle {
    /// The solver stepped into a cell.
    Forward,
    /// The solver retracted a step after a dead end.
    Undo,
}

/// A drawing surface for maze progress.
///
/// All methods are called synchronously from the generating or solving thread.
pub trait Renderer {
    /// Draws a cell occupying `bounds` with the given walls.
    ///
    /// Sides missing from `walls` are open and should be drawn as such, since
    /// the same cell is redrawn as walls are removed.
    fn draw_cell(&mut self, bounds: Rect, walls: Walls);

    /// Draws a segment between two cell centers.
    fn draw_move(&mut self, from: Point, to: Point, style: MoveStyle);

    /// Presents the current frame.
    fn flush(&mut self) {}
}

impl<R> Renderer for &mut R
where
    R: Renderer + ?Sized,
{
    fn draw_cell(&mut self, bounds: Rect, walls: Walls) {
        (**self).draw_cell(bounds, walls);
    }

    fn draw_move(&mut self, from: Point, to: Point, style: MoveStyle) {
        (**self).draw_move(from, to, style);
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}

/// A renderer that draws nothing and never pauses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn draw_cell(&mut self, _bounds: Rect, _walls: Walls) {}

    fn draw_move(&mut self, _from: Point, _to: Point, _style: MoveStyle) {}
}

/// Wraps a renderer and sleeps for a fixed delay after every flush.
///
/// A zero delay makes this equivalent to the inner renderer.
#[derive(Debug, Clone, Default)]
pub struct Paced<R> {
    inner: R,
    delay: Duration,
}

impl<R> Paced<R> {
    /// Wraps `inner`, pausing for `delay` after each frame.
    #[must_use]
    pub fn new(inner: R, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Unwraps the inner renderer.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Renderer for Paced<R>
where
    R: Renderer,
{
    fn draw_cell(&mut self, bounds: Rect, walls: Walls) {
        self.inner.draw_cell(bounds, walls);
    }

    fn draw_move(&mut self, from: Point, to: Point, style: MoveStyle) {
        self.inner.draw_move(from, to, style);
    }

    fn flush(&mut self) {
        self.inner.flush();
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

/// A call received by a [`RecordingRenderer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderEvent {
    /// [`Renderer::draw_cell`] was called.
    Cell {
        /// Cell rectangle.
        bounds: Rect,
        /// Walls present at the time of the call.
        walls: Walls,
    },
    /// [`Renderer::draw_move`] was called.
    Move {
        /// Center of the cell the segment starts at.
        from: Point,
        /// Center of the cell the segment ends at.
        to: Point,
        /// Segment style.
        style: MoveStyle,
    },
    /// [`Renderer::flush`] was called.
    Flush,
}

/// A renderer that records every call in order.
///
/// # Examples
///
/// ```
/// use mazewalk_core::{Rect, RecordingRenderer, RenderEvent, Renderer, Walls};
///
/// let mut recorder = RecordingRenderer::new();
/// recorder.draw_cell(Rect::default(), Walls::all());
/// recorder.flush();
///
/// assert_eq!(recorder.events().len(), 2);
/// assert_eq!(recorder.events()[1], RenderEvent::Flush);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in call order.
    #[must_use]
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Returns the recorded moves as `(from, to, style)` triples.
    pub fn moves(&self) -> impl Iterator<Item = (Point, Point, MoveStyle)> + '_ {
        self.events.iter().filter_map(|event| match *event {
            RenderEvent::Move { from, to, style } => Some((from, to, style)),
            _ => None,
        })
    }

    /// Returns the number of cell draws recorded.
    #[must_use]
    pub fn cell_draws(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, RenderEvent::Cell { .. }))
            .count()
    }

    /// Forgets all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn draw_cell(&mut self, bounds: Rect, walls: Walls) {
        self.events.push(RenderEvent::Cell { bounds, walls });
    }

    fn draw_move(&mut self, from: Point, to: Point, style: MoveStyle) {
        self.events.push(RenderEvent::Move { from, to, style });
    }

    fn flush(&mut self) {
        self.events.push(RenderEvent::Flush);
    }
}
