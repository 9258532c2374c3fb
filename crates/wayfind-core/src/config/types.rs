//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::error::WayfindError;

/// Default number of independent Karger trials
pub const DEFAULT_MIN_CUT_ITERATIONS: usize = 100;

/// Top-level configuration, usually read from `wayfind.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WayfindConfig {
    /// Shortest-path search settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Randomized minimum-cut settings
    #[serde(default)]
    pub min_cut: MinCutConfig,
}

/// Which search engine a driver should use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dijkstra,
    #[default]
    Astar,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::Astar => write!(f, "astar"),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = WayfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::Astar),
            other => Err(WayfindError::invalid_value("algorithm", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub algorithm: Algorithm,
}

/// Settings for repeated-contraction minimum cut
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinCutConfig {
    /// Number of independent contraction trials
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Seed for reproducible runs (sequential only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Run trials on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,
}

fn default_iterations() -> usize {
    DEFAULT_MIN_CUT_ITERATIONS
}

impl Default for MinCutConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            seed: None,
            parallel: false,
        }
    }
}

impl MinCutConfig {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
