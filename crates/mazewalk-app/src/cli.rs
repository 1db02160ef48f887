//! Command-line arguments and the program run they drive.

use std::{
    io::{self, Write},
    time::Duration,
};

use clap::Parser;
use mazewalk::{Maze, MazeConfig};
use mazewalk_core::{LayoutError, Paced};
use mazewalk_generator::{MazeSeed, SeedParseError};

use crate::terminal::TerminalRenderer;

/// Generate a perfect maze and walk it from entrance to exit.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Number of rows.
    #[arg(long, value_name = "COUNT", default_value_t = 10)]
    pub rows: usize,

    /// Number of columns.
    #[arg(long, value_name = "COUNT", default_value_t = 20)]
    pub columns: usize,

    /// Seed as an integer or 64 hex digits. Random when omitted.
    #[arg(long, value_name = "SEED", value_parser = parse_seed)]
    pub seed: Option<MazeSeed>,

    /// Width of a cell in renderer units.
    #[arg(long, value_name = "UNITS", default_value_t = MazeConfig::DEFAULT_CELL_SIZE)]
    pub cell_width: f64,

    /// Height of a cell in renderer units.
    #[arg(long, value_name = "UNITS", default_value_t = MazeConfig::DEFAULT_CELL_SIZE)]
    pub cell_height: f64,

    /// Pause after each animation frame.
    #[arg(long, value_name = "MILLIS", default_value_t = 10)]
    pub delay_ms: u64,

    /// Print only the final maze instead of animating.
    #[arg(long)]
    pub no_animate: bool,

    /// Generate without solving.
    #[arg(long)]
    pub no_solve: bool,
}

/// Parses a seed given either as an unsigned integer or as 64 hex digits.
///
/// # Errors
///
/// Returns a [`SeedParseError`] if `s` is neither.
pub fn parse_seed(s: &str) -> Result<MazeSeed, SeedParseError> {
    match s.parse::<u64>() {
        Ok(value) => Ok(MazeSeed::from(value)),
        Err(_) => s.parse(),
    }
}

impl Args {
    /// Returns the maze configuration described by the arguments.
    #[must_use]
    pub fn maze_config(&self) -> MazeConfig {
        let config = MazeConfig::new(self.rows, self.columns)
            .cell_size(self.cell_width, self.cell_height);
        match self.seed {
            Some(seed) => config.seed_with(seed),
            None => config,
        }
    }

    /// Returns the pause after each frame, zero when not animating.
    #[must_use]
    pub fn frame_delay(&self) -> Duration {
        if self.no_animate {
            Duration::ZERO
        } else {
            Duration::from_millis(self.delay_ms)
        }
    }
}

/// Error returned by [`run`].
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum RunError {
    /// The maze dimensions are invalid.
    #[display("invalid maze configuration: {_0}")]
    Layout(LayoutError),
    /// Writing to the output failed.
    #[display("failed to write output: {_0}")]
    Io(io::Error),
}

/// Outcome of a [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Seed the maze was generated from.
    pub seed: MazeSeed,
    /// Whether the exit was reached, or `None` if solving was skipped.
    pub solved: Option<bool>,
}

/// Generates, draws and optionally solves a maze, writing to `out`.
///
/// # Errors
///
/// Returns [`RunError::Layout`] for invalid dimensions, before anything is
/// written, and [`RunError::Io`] if writing fails.
pub fn run<W>(args: &Args, mut out: W) -> Result<RunSummary, RunError>
where
    W: Write,
{
    let config = args.maze_config();
    let layout = config.layout()?;
    let animate = !args.no_animate;

    let terminal = TerminalRenderer::new(layout, &mut out, animate);
    let mut maze = Maze::with_renderer(config, Paced::new(terminal, args.frame_delay()))?;
    let seed = maze.seed();
    log::info!("seed {seed}");

    let solved = (!args.no_solve).then(|| maze.solve());
    match solved {
        Some(true) => log::info!("reached the exit"),
        Some(false) => log::warn!("exit not reachable"),
        None => {}
    }
    let stats = maze.last_solve_stats();

    let mut terminal = maze.into_renderer().into_inner();
    if let Some(e) = terminal.take_error() {
        return Err(e.into());
    }
    let picture = (!animate).then(|| terminal.canvas().to_string());
    drop(terminal);

    if let Some(picture) = picture {
        write!(out, "{picture}")?;
    }
    writeln!(out, "seed: {seed}")?;
    if let Some(stats) = stats.filter(|_| solved == Some(true)) {
        writeln!(
            out,
            "moves: {} net ({} forward, {} undone), {} cells visited",
            stats.net_moves(),
            stats.forward_moves,
            stats.undo_moves,
            stats.visited_cells
        )?;
    }
    if solved == Some(false) {
        writeln!(out, "no path from entrance to exit")?;
    }
    out.flush()?;

    Ok(RunSummary { seed, solved })
}
