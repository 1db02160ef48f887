//! Test utilities for the depth-first solver.
//!
//! This module provides [`SolveTester`], a harness that runs [`DfsSolver`] on a
//! grid while recording everything it draws, then checks the outcome with
//! chainable assertions.

use std::str::FromStr as _;

use mazewalk_core::{CellGrid, MoveStyle, Point, Position, RecordingRenderer};

use crate::{DfsSolver, SolveStats};

/// A test harness for verifying solver runs.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct SolveTester {
    grid: CellGrid,
    recorder: RecordingRenderer,
    start: Option<Position>,
    outcome: Option<(Option<Vec<Position>>, SolveStats)>,
}

impl SolveTester {
    /// Creates a new tester for a grid.
    pub fn new(grid: CellGrid) -> Self {
        Self {
            grid,
            recorder: RecordingRenderer::new(),
            start: None,
            outcome: None,
        }
    }

    /// Creates a new tester from the text form of a grid.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a grid.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        Self::new(CellGrid::from_str(s).unwrap())
    }

    /// Solves from the entrance to the exit.
    #[track_caller]
    pub fn solve(mut self) -> Self {
        let outcome = DfsSolver::new().find_path(&mut self.grid, &mut self.recorder);
        self.start = Some(self.grid.entrance());
        self.outcome = Some(outcome);
        self
    }

    /// Solves from `(x, y)` to the exit.
    #[track_caller]
    pub fn solve_from(mut self, x: usize, y: usize) -> Self {
        let start = Position::new(x, y);
        let target = self.grid.exit();
        let outcome =
            DfsSolver::new().find_path_between(&mut self.grid, start, target, &mut self.recorder);
        self.start = Some(start);
        self.outcome = Some(outcome);
        self
    }

    #[track_caller]
    fn outcome(&self) -> &(Option<Vec<Position>>, SolveStats) {
        self.outcome
            .as_ref()
            .expect("solve() must be called before assertions")
    }

    fn position_of(&self, point: Point) -> Position {
        self.grid
            .layout()
            .position_at(point)
            .unwrap_or_else(|| panic!("move endpoint {point:?} is outside the grid"))
    }

    fn recorded_moves(&self) -> Vec<(Position, Position, MoveStyle)> {
        self.recorder
            .moves()
            .map(|(from, to, style)| (self.position_of(from), self.position_of(to), style))
            .collect()
    }

    /// Asserts that the exit was reached.
    #[track_caller]
    pub fn assert_solved(self) -> Self {
        let (path, stats) = self.outcome();
        assert!(path.is_some(), "expected a solution, got none ({stats:?})");
        self
    }

    /// Asserts that the exit was not reached.
    #[track_caller]
    pub fn assert_unsolved(self) -> Self {
        let (path, _) = self.outcome();
        assert!(path.is_none(), "expected no solution, got {path:?}");
        self
    }

    /// Asserts the number of forward and undo moves, both in the statistics
    /// and in what was drawn.
    #[track_caller]
    pub fn assert_moves(self, forward: usize, undo: usize) -> Self {
        let (_, stats) = self.outcome();
        assert_eq!(
            (stats.forward_moves, stats.undo_moves),
            (forward, undo),
            "unexpected move counts in stats"
        );
        let moves = self.recorded_moves();
        let drawn_forward = moves.iter().filter(|m| m.2.is_forward()).count();
        let drawn_undo = moves.iter().filter(|m| m.2.is_undo()).count();
        assert_eq!(
            (drawn_forward, drawn_undo),
            (forward, undo),
            "unexpected drawn move counts"
        );
        self
    }

    /// Asserts the path found, as `(x, y)` pairs.
    #[track_caller]
    pub fn assert_path(self, expected: &[(usize, usize)]) -> Self {
        let (path, _) = self.outcome();
        let expected: Vec<_> = expected.iter().map(|&(x, y)| Position::new(x, y)).collect();
        assert_eq!(path.as_deref(), Some(expected.as_slice()), "unexpected path");
        self
    }

    /// Asserts the undo moves drawn, in order, as `((x, y), (x, y))` edges.
    #[track_caller]
    pub fn assert_undone(self, expected: &[((usize, usize), (usize, usize))]) -> Self {
        let undone: Vec<_> = self
            .recorded_moves()
            .into_iter()
            .filter(|m| m.2.is_undo())
            .map(|(from, to, _)| ((from.x(), from.y()), (to.x(), to.y())))
            .collect();
        assert_eq!(undone, expected, "unexpected undo moves");
        self
    }

    /// Replays the drawn moves and asserts that, once undone moves are
    /// dropped, they form a contiguous open path from the start to the exit
    /// that matches the returned path.
    #[track_caller]
    pub fn assert_replayed_path_is_valid(&self) {
        let start = self.start.expect("solve() must be called before assertions");
        let mut trail = vec![start];
        for (from, to, style) in self.recorded_moves() {
            match style {
                MoveStyle::Forward => {
                    assert_eq!(trail.last(), Some(&from), "forward move from off the trail");
                    trail.push(to);
                }
                MoveStyle::Undo => {
                    assert_eq!(trail.last(), Some(&to), "undo of a move not on top");
                    trail.pop();
                    assert_eq!(trail.last(), Some(&from), "undo to an unexpected cell");
                }
            }
        }

        assert_eq!(trail.last(), Some(&self.grid.exit()), "trail does not end at exit");
        for pair in trail.windows(2) {
            let dir = pair[0]
                .direction_to(pair[1])
                .unwrap_or_else(|| panic!("{} and {} are not adjacent", pair[0], pair[1]));
            assert!(
                self.grid.is_open(pair[0], dir),
                "wall between {} and {}",
                pair[0],
                pair[1]
            );
        }

        let (path, _) = self.outcome();
        assert_eq!(path.as_deref(), Some(trail.as_slice()), "trail differs from path");
    }
}
