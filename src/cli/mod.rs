//! CLI argument parsing for wayfind
//!
//! Global flags: --format, --config, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{MinCutArgs, PathArgs};
pub use output::OutputFormat;

/// Wayfind - shortest paths over cost grids and minimum cuts over graphs
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Configuration file (defaults to ./wayfind.toml when present)
    #[arg(long, global = true, env = "WAYFIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter: a level (`trace`) or a directive (`wayfind_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cheapest route across a digit grid
    Path(PathArgs),

    /// Randomized minimum cut of an undirected graph
    Mincut(MinCutArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_core::config::Algorithm;
    use wayfind_core::coordinate::Coordinate;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_path_args() {
        let cli = Cli::try_parse_from([
            "wayfind",
            "path",
            "grid.txt",
            "--algorithm",
            "dijkstra",
            "--from",
            "1,2",
        ])
        .unwrap();

        let Commands::Path(args) = cli.command else {
            panic!("expected path command");
        };
        assert_eq!(args.algorithm, Some(Algorithm::Dijkstra));
        assert_eq!(args.from, Some(Coordinate::new(1, 2)));
        assert_eq!(args.to, None);
        assert_eq!(cli.format, OutputFormat::Human);
    }

    #[test]
    fn test_parse_mincut_args_with_global_flags() {
        let cli = Cli::try_parse_from([
            "wayfind",
            "mincut",
            "edges.txt",
            "--iterations",
            "50",
            "--seed",
            "3",
            "--format",
            "json",
        ])
        .unwrap();

        let Commands::Mincut(args) = cli.command else {
            panic!("expected mincut command");
        };
        assert_eq!(args.iterations, Some(50));
        assert_eq!(args.seed, Some(3));
        assert!(!args.parallel);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_bad_coordinate_rejected() {
        assert!(Cli::try_parse_from(["wayfind", "path", "grid.txt", "--to", "9"]).is_err());
    }
}
