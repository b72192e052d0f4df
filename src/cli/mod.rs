//! Command-line interface module
//!
//! This module handles CLI argument parsing using Clap and the interactive
//! prompts shown when a choice was not given on the command line.

pub mod args;
pub mod interactive;

pub use args::Cli;
