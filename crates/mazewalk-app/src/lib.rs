//! Command-line front end for mazewalk.
//!
//! The `mazewalk` binary generates a maze, animates it on the terminal and
//! walks it from entrance to exit. This library holds the pieces the binary is
//! built from: argument handling in [`cli`] and the text renderer in
//! [`terminal`].

pub mod cli;
pub mod terminal;
