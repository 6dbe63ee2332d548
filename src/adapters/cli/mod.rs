//! Command-line adapter. Argument parsing and terminal rendering.

pub mod args;
pub mod render;

pub use args::{Cli, Command, OutputFormat};
