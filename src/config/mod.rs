//! Configuration management for drp

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::batch::BatchOptions;
use crate::minify::MinifyOptions;

impl Config {
    /// Get the config file path (~/.config/drp/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file (defaults if missing)
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Expand ~ in the output directory, if one is set
    pub fn output_directory(&self) -> Option<PathBuf> {
        let dir = self.output.directory.as_deref()?;
        if let Some(stripped) = dir.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return Some(home.join(stripped));
            }
        }
        Some(PathBuf::from(dir))
    }

    /// Batch settings described by this configuration
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            minify: MinifyOptions {
                literal_aware: self.minify.literal_aware,
            },
            parallel: self.minify.parallel,
            marker: self.output.marker.clone(),
        }
    }
}
