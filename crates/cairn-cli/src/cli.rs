//! CLI argument definitions for Cairn.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cairn",
    version,
    about = "Resolve Android multi-project build trees",
    long_about = "Cairn resolves a root project and its subprojects against layered \
                  configuration: shared repositories, a relocated build output directory, \
                  and per-plugin toolchain defaults. The frozen result is handed to the \
                  build engine."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory to search for Cairn.toml (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    pub manifest_dir: Option<PathBuf>,

    /// Global config file to use instead of ~/.cairn/config.toml
    #[arg(long, global = true, env = "CAIRN_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the build tree and print the result
    Resolve {
        /// Print the resolved tree as JSON
        #[arg(long)]
        json: bool,
        /// Write the resolved tree as JSON to a file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the configuration evaluation order
    Order,

    /// Delete the shared build output directory
    Clean {
        /// Show what would be removed without deleting anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Create a Cairn.toml in the current directory
    Init {
        /// Root project name (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,
        /// Group used as the default namespace
        #[arg(long)]
        group: Option<String>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
