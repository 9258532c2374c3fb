//! Configuration for wayfind drivers
//!
//! The engines themselves take plain arguments; this layer only groups the
//! knobs a driver exposes and loads them from TOML.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, WayfindError};

pub use types::{
    Algorithm, MinCutConfig, SearchConfig, WayfindConfig, DEFAULT_MIN_CUT_ITERATIONS,
};

/// Conventional config file name looked up in the working directory
pub const CONFIG_FILE: &str = "wayfind.toml";

impl WayfindConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: WayfindConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| WayfindError::io_operation("read config", path.display(), e))?;

        let config: WayfindConfig =
            toml::from_str(&content).map_err(|e| WayfindError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        config.validate().map_err(|e| WayfindError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), ?config, "config_loaded");
        Ok(config)
    }

    /// Load `wayfind.toml` from `dir` if present, defaults otherwise
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if self.min_cut.iterations == 0 {
            crate::bail_invalid!("min_cut.iterations", self.min_cut.iterations);
        }
        Ok(())
    }
}
