//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `menusort`.
#[derive(Debug, Parser)]
#[command(
    name = "menusort",
    version,
    about = "Compute menu position values from an observed menu order"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the menu entries in their desired order.
    Labels {
        /// Resource file (defaults to `MENUSORT_RESOURCES` or ~/.app-defaults/XFile).
        #[arg(long)]
        resources: Option<PathBuf>,
    },
    /// Match observed labels to menu entries and show the mapping.
    Align {
        /// Text file with one observed label per line, top to bottom.
        #[arg(long)]
        observed: PathBuf,
        /// Resource file (defaults to `MENUSORT_RESOURCES` or ~/.app-defaults/XFile).
        #[arg(long)]
        resources: Option<PathBuf>,
    },
    /// Compute position values and write them to the resource file.
    Reconcile {
        /// Text file with one observed label per line, top to bottom.
        #[arg(long)]
        observed: PathBuf,
        /// Resource file (defaults to `MENUSORT_RESOURCES` or ~/.app-defaults/XFile).
        #[arg(long)]
        resources: Option<PathBuf>,
        /// Print positions without modifying the resource file.
        #[arg(long)]
        dry_run: bool,
        /// Also write a YAML report of the run to this path.
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Set every position value of the menu to zero.
    Reset {
        /// Resource file (defaults to `MENUSORT_RESOURCES` or ~/.app-defaults/XFile).
        #[arg(long)]
        resources: Option<PathBuf>,
    },
}
