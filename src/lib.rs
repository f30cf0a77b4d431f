//! Core library for the `menusort` CLI.
//!
//! Given a menu's desired order and the order a toolkit actually displays
//! it in, computes the per-item position values that make the toolkit show
//! the desired order.

pub mod adapters;
pub mod align;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod menu;
pub mod observed;
pub mod ports;
pub mod rank;
pub mod report;
pub mod resources;

pub use error::{Error, Result};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
