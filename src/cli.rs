/// CLI argument definitions for the `pop` command.
///
/// Defines all subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::cli_help;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "pop", version, about = "Package rating and popularity tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments shared by the ranking commands.
#[derive(Args)]
pub struct CommonArgs {
    /// Input file (default: read standard input)
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show only the top N packages (default: 20)
    #[arg(long, default_value = "20")]
    pub top: usize,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank packages from a popularity-contest dump
    #[command(long_about = cli_help::POPCON)]
    Popcon {
        #[command(flatten)]
        common: CommonArgs,

        /// Sort by metric: installs or stale (default: installs)
        #[arg(long, default_value = "installs", value_parser = ["installs", "stale"])]
        sort_by: String,
    },

    /// Rank packages by dampened review ratings
    #[command(long_about = cli_help::REVIEWS)]
    Reviews {
        #[command(flatten)]
        common: CommonArgs,

        /// Sort by metric: dampened, reviews, or rating (default: dampened)
        #[arg(long, default_value = "dampened", value_parser = ["dampened", "reviews", "rating"])]
        sort_by: String,
    },

    /// Compute the dampened rating for one histogram
    #[command(long_about = cli_help::RATE)]
    Rate {
        /// Histogram string: "[n1, n2, n3, n4, n5]"
        histogram: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
