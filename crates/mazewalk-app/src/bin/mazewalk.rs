//! Mazewalk terminal application.
//!
//! Generates a perfect maze, animates its construction and walks it from the
//! entrance to the exit. Set `RUST_LOG=debug` for progress details.

use std::{io, process::ExitCode};

use clap::{CommandFactory as _, Parser as _, error::ErrorKind};
use mazewalk_app::cli::{self, Args, RunError};

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match cli::run(&args, io::stdout().lock()) {
        Ok(summary) => {
            if summary.solved == Some(false) {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(RunError::Layout(e)) => Args::command().error(ErrorKind::ValueValidation, e).exit(),
        Err(e) => {
            eprintln!("mazewalk: {e}");
            ExitCode::FAILURE
        }
    }
}
