use super::parse::parse_algorithm;
use clap::Args;
use std::path::PathBuf;
use wayfind_core::config::Algorithm;
use wayfind_core::coordinate::Coordinate;

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Grid file: one row per line, digits are entry costs, `#` is a wall
    pub grid: PathBuf,

    /// Search engine (dijkstra or astar)
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,

    /// Start cell as `x,y` (defaults to the top-left corner)
    #[arg(long)]
    pub from: Option<Coordinate>,

    /// Target cell as `x,y` (defaults to the bottom-right corner)
    #[arg(long)]
    pub to: Option<Coordinate>,
}

#[derive(Args, Debug, Clone)]
pub struct MinCutArgs {
    /// Edge list file: lines of `vertex: neighbour neighbour ...`
    pub edges: PathBuf,

    /// Number of independent contraction trials
    #[arg(long, short = 'n')]
    pub iterations: Option<usize>,

    /// Seed for a reproducible sequential run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run trials on all cores
    #[arg(long)]
    pub parallel: bool,
}
