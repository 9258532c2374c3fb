//! Command dispatch logic for wayfind

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use wayfind_core::config::WayfindConfig;
use wayfind_core::error::{Result, WayfindError};

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        Commands::Path(args) => commands::path::execute(cli, &config, args),
        Commands::Mincut(args) => commands::mincut::execute(cli, &config, args),
    }
}

/// Explicit `--config` file, else `wayfind.toml` in the working directory
fn load_config(cli: &Cli) -> Result<WayfindConfig> {
    match &cli.config {
        Some(path) => WayfindConfig::load(path),
        None => {
            let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            WayfindConfig::load_or_default(&cwd)
        }
    }
}

/// Read an input file, reporting a missing one as not found
pub fn read_input(path: &Path, context: &str) -> Result<String> {
    if !path.exists() {
        return Err(WayfindError::not_found(context, path.display()));
    }
    fs::read_to_string(path).map_err(|e| WayfindError::io_operation("read", path.display(), e))
}
