//! The cell grid a maze is carved into.

use std::{
    collections::VecDeque,
    fmt::{self, Display, Write as _},
    ops::Index,
    str::FromStr,
};

use crate::{Cell, Direction, Layout, LayoutError, Position, Renderer};

/// A `columns × rows` grid of [`Cell`]s.
///
/// Cells are stored column-major, so `grid[Position::new(x, y)]` addresses
/// column `x`, row `y`. The grid is the only place that removes walls between
/// cells, and it always removes both sides of a shared wall, which keeps the
/// wall state symmetric.
///
/// # Text form
///
/// `CellGrid` implements [`Display`] and [`FromStr`] with an ASCII drawing in
/// which every cell is three characters wide and two lines tall:
///
/// ```
/// use mazewalk_core::{CellGrid, Direction, Position};
///
/// let grid: CellGrid = "
///     +  +--+
///     |     |
///     +--+  +
/// ".parse()?;
///
/// assert_eq!(grid.columns(), 2);
/// assert_eq!(grid.rows(), 1);
/// assert!(grid.is_open(Position::new(0, 0), Direction::Right));
/// assert!(!grid[Position::new(0, 0)].has_top_wall());
/// assert!(!grid[Position::new(1, 0)].has_bottom_wall());
///
/// assert_eq!(grid.to_string(), "+  +--+\n|     |\n+--+  +\n");
/// # Ok::<(), mazewalk_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CellGrid {
    layout: Layout,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Creates a grid of fully walled, unvisited cells.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        let cells = layout
            .positions()
            .map(|pos| Cell::new(layout.cell_bounds(pos)))
            .collect();
        Self { layout, cells }
    }

    /// Returns the grid layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.layout.columns()
    }

    /// Returns the entrance cell, `(0, 0)`.
    #[must_use]
    pub fn entrance(&self) -> Position {
        self.layout.entrance()
    }

    /// Returns the exit cell, `(columns - 1, rows - 1)`.
    #[must_use]
    pub fn exit(&self) -> Position {
        self.layout.exit()
    }

    /// Returns all positions in column-major, row-minor order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        self.layout.positions()
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        self.layout
            .contains(pos)
            .then(|| pos.x() * self.rows() + pos.y())
    }

    /// Returns the cell at `pos`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.index_of(pos).map(|i| &self.cells[i])
    }

    fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        let i = self
            .index_of(pos)
            .unwrap_or_else(|| panic!("position {pos} is outside the grid"));
        &mut self.cells[i]
    }

    /// Returns the in-bounds neighbor of `pos` in `dir`.
    #[must_use]
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        pos.offset(dir).filter(|&next| self.layout.contains(next))
    }

    /// Returns `true` if `pos` has an in-bounds neighbor in `dir` and no wall
    /// separates them.
    #[must_use]
    pub fn is_open(&self, pos: Position, dir: Direction) -> bool {
        self.neighbor(pos, dir).is_some() && !self[pos].has_wall(dir)
    }

    /// Removes the wall on the `dir` side of `pos`.
    ///
    /// If a neighbor exists on that side its facing wall is removed as well.
    /// On the grid boundary only the single outer wall is removed, which is how
    /// the entrance and exit are opened.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn remove_wall(&mut self, pos: Position, dir: Direction) {
        self.cell_mut(pos).remove_wall(dir);
        if let Some(next) = self.neighbor(pos, dir) {
            self.cell_mut(next).remove_wall(dir.opposite());
        }
    }

    fn set_wall(&mut self, pos: Position, dir: Direction, present: bool) {
        self.cell_mut(pos).set_wall(dir, present);
        if let Some(next) = self.neighbor(pos, dir) {
            self.cell_mut(next).set_wall(dir.opposite(), present);
        }
    }

    /// Returns `true` if the cell at `pos` is marked visited.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn is_visited(&self, pos: Position) -> bool {
        self[pos].is_visited()
    }

    /// Marks the cell at `pos` visited.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn mark_visited(&mut self, pos: Position) {
        self.cell_mut(pos).set_visited(true);
    }

    /// Clears the visited flag of every cell.
    pub fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            cell.set_visited(false);
        }
    }

    /// Marks every cell visited.
    pub fn mark_all_visited(&mut self) {
        for cell in &mut self.cells {
            cell.set_visited(true);
        }
    }

    /// Draws the cell at `pos` in its layout rectangle.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn draw_cell<R>(&mut self, pos: Position, renderer: &mut R)
    where
        R: Renderer + ?Sized,
    {
        let bounds = self.layout.cell_bounds(pos);
        self.cell_mut(pos).draw(bounds, renderer);
    }

    /// Draws a move from the center of `from` to the center of `to`.
    ///
    /// # Panics
    ///
    /// Panics if either position is outside the grid.
    pub fn draw_move<R>(&self, from: Position, to: Position, undo: bool, renderer: &mut R)
    where
        R: Renderer + ?Sized,
    {
        self[from].draw_move(&self[to], undo, renderer);
    }

    /// Returns the number of open passages between adjacent cells.
    ///
    /// Openings on the outer boundary (entrance and exit) are not counted.
    #[must_use]
    pub fn open_passage_count(&self) -> usize {
        self.positions()
            .map(|pos| {
                usize::from(self.is_open(pos, Direction::Right))
                    + usize::from(self.is_open(pos, Direction::Down))
            })
            .sum()
    }

    /// Returns the number of cells reachable from the entrance through open
    /// passages.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        let mut seen = vec![false; self.cells.len()];
        let mut queue = VecDeque::from([self.entrance()]);
        seen[0] = true;
        let mut count = 0;
        while let Some(pos) = queue.pop_front() {
            count += 1;
            for dir in Direction::ALL {
                if !self.is_open(pos, dir) {
                    continue;
                }
                let Some(next) = self.neighbor(pos, dir) else {
                    continue;
                };
                let Some(i) = self.index_of(next) else {
                    continue;
                };
                if !seen[i] {
                    seen[i] = true;
                    queue.push_back(next);
                }
            }
        }
        count
    }

    /// Returns `true` if the open passages form a spanning tree: every cell is
    /// reachable and there are exactly `cells - 1` passages.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        let n = self.cells.len();
        self.open_passage_count() == n - 1 && self.reachable_count() == n
    }

    /// Returns `true` if every shared wall is present on both sides or absent
    /// on both sides.
    #[must_use]
    pub fn has_symmetric_walls(&self) -> bool {
        self.positions().all(|pos| {
            [Direction::Right, Direction::Down].into_iter().all(|dir| {
                self.neighbor(pos, dir).is_none_or(|next| {
                    self[pos].has_wall(dir) == self[next].has_wall(dir.opposite())
                })
            })
        })
    }
}

impl Index<Position> for CellGrid {
    type Output = Cell;

    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    fn index(&self, pos: Position) -> &Cell {
        self.get(pos)
            .unwrap_or_else(|| panic!("position {pos} is outside the grid"))
    }
}

impl Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (columns, rows) = (self.columns(), self.rows());
        for y in 0..rows {
            for x in 0..columns {
                let top = self[Position::new(x, y)].has_top_wall();
                f.write_str(if top { "+--" } else { "+  " })?;
            }
            f.write_str("+\n")?;
            for x in 0..columns {
                let left = self[Position::new(x, y)].has_left_wall();
                f.write_str(if left { "|  " } else { "   " })?;
            }
            let right = self[Position::new(columns - 1, y)].has_right_wall();
            f.write_char(if right { '|' } else { ' ' })?;
            f.write_char('\n')?;
        }
        for x in 0..columns {
            let bottom = self[Position::new(x, rows - 1)].has_bottom_wall();
            f.write_str(if bottom { "+--" } else { "+  " })?;
        }
        f.write_str("+\n")
    }
}

/// Error returned when parsing the text form of a [`CellGrid`].
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input contains only blank lines.
    #[display("no maze lines found")]
    Empty,
    /// A grid of `R` rows needs `2R + 1` lines.
    #[display("expected an odd number of lines, got {_0}")]
    InvalidLineCount(#[error(not(source))] usize),
    /// A grid of `C` columns needs lines `3C + 1` characters wide.
    #[display("invalid line width: {_0}")]
    InvalidWidth(#[error(not(source))] usize),
    /// A wall position holds something other than a wall or a space.
    #[display("unexpected character {ch:?} at line {line}, column {column}")]
    UnexpectedChar {
        /// Zero-based line within the drawing.
        line: usize,
        /// Zero-based character column within the line.
        column: usize,
        /// The offending character.
        ch: char,
    },
    /// The parsed dimensions do not form a valid layout.
    #[display("invalid layout: {_0}")]
    Layout(LayoutError),
}

impl FromStr for CellGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = dedent(s);
        if lines.is_empty() {
            return Err(GridParseError::Empty);
        }
        if lines.len() < 3 || lines.len() % 2 == 0 {
            return Err(GridParseError::InvalidLineCount(lines.len()));
        }
        let width = lines.iter().map(Vec::len).max().unwrap_or(0);
        if width < 4 || (width - 1) % 3 != 0 {
            return Err(GridParseError::InvalidWidth(width));
        }
        let rows = lines.len() / 2;
        let columns = (width - 1) / 3;
        let layout = Layout::with_size(rows, columns).map_err(GridParseError::Layout)?;
        let mut grid = CellGrid::new(layout);

        let char_at = |line: usize, column: usize| lines[line].get(column).copied().unwrap_or(' ');

        for line in 0..lines.len() {
            if line % 2 == 0 {
                // Corner line: horizontal walls above row `line / 2`.
                let y = line / 2;
                for x in 0..=columns {
                    let column = 3 * x;
                    let ch = char_at(line, column);
                    if ch != '+' {
                        return Err(GridParseError::UnexpectedChar { line, column, ch });
                    }
                }
                for x in 0..columns {
                    let column = 3 * x + 1;
                    let present = match (char_at(line, column), char_at(line, column + 1)) {
                        ('-', '-') => true,
                        (' ', ' ') => false,
                        (ch, _) if ch != '-' && ch != ' ' => {
                            return Err(GridParseError::UnexpectedChar { line, column, ch });
                        }
                        (_, ch) => {
                            return Err(GridParseError::UnexpectedChar {
                                line,
                                column: column + 1,
                                ch,
                            });
                        }
                    };
                    if y < rows {
                        grid.set_wall(Position::new(x, y), Direction::Up, present);
                    } else {
                        grid.set_wall(Position::new(x, y - 1), Direction::Down, present);
                    }
                }
            } else {
                // Cell line: vertical walls of row `line / 2`.
                let y = line / 2;
                for x in 0..=columns {
                    let column = 3 * x;
                    let present = match char_at(line, column) {
                        '|' => true,
                        ' ' => false,
                        ch => return Err(GridParseError::UnexpectedChar { line, column, ch }),
                    };
                    if x < columns {
                        grid.set_wall(Position::new(x, y), Direction::Left, present);
                    } else {
                        grid.set_wall(Position::new(x - 1, y), Direction::Right, present);
                    }
                }
            }
        }

        Ok(grid)
    }
}

/// Splits `s` into lines without leading and trailing blank lines, with the
/// common indentation of the corner lines removed.
fn dedent(s: &str) -> Vec<Vec<char>> {
    let lines: Vec<&str> = s.lines().map(str::trim_end).collect();
    let (Some(first), Some(last)) = (
        lines.iter().position(|line| !line.is_empty()),
        lines.iter().rposition(|line| !line.is_empty()),
    ) else {
        return vec![];
    };
    let lines = &lines[first..=last];
    let leading = |line: &str| line.len() - line.trim_start().len();
    let indent = lines
        .iter()
        .filter(|line| line.trim_start().starts_with('+'))
        .map(|line| leading(line))
        .min()
        .unwrap_or(0);
    lines
        .iter()
        .map(|line| line.chars().skip(leading(line).min(indent)).collect())
        .collect()
}
