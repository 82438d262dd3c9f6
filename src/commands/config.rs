//! Config subcommands handler

use anyhow::{bail, Context, Result};
use std::io::{self, Write};
use std::path::Path;

use drp::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    write_config(&config, &mut io::stdout().lock())
}

/// Print where the configuration file is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration to the config file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    init_at(&path, force)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Save defaults to `path`, refusing to replace an existing file unless `force`.
pub(crate) fn init_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(path)
}

pub(crate) fn write_config<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    write!(out, "{}", toml_str)?;
    Ok(())
}
