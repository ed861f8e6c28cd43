//! Command-line interface for copygen
//!
//! ## Module Structure
//!
//! - `args`: CLI argument definitions (clap)
//! - `run`: main entry point and command dispatch
//! - `commands`: command implementations and output rendering

pub mod args;
mod commands;
mod run;

pub use args::{Cli, Commands, GenerateArgs};
pub use run::run;
