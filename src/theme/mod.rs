//! Terminal colors for CLI output
//!
//! Colors are only emitted when stdout is a terminal and `NO_COLOR` is unset.

pub mod cli;

pub use cli::ansi;

/// Color settings for one CLI run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Emit ANSI escape codes
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

impl Theme {
    /// Colors on for an interactive stdout without `NO_COLOR`.
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            enabled: !no_color && atty::is(atty::Stream::Stdout),
        }
    }

    /// No escape codes at all.
    pub fn plain() -> Self {
        Self { enabled: false }
    }
}
