//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::files::filename::DEFAULT_MARKER;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub minify: MinifyConfig,
}

/// Where and under which name minified files are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory. Unset means next to each input file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    /// Token appended to the base name of every output file
    #[serde(default = "default_marker")]
    pub marker: String,
}

pub fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            marker: default_marker(),
        }
    }
}

/// Pipeline behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinifyConfig {
    /// Skip comment markers that sit inside string literals
    #[serde(default)]
    pub literal_aware: bool,
    /// Minify files of one batch in parallel
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

pub fn default_parallel() -> bool {
    true
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            literal_aware: false,
            parallel: default_parallel(),
        }
    }
}
