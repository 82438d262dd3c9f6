//! CLI definitions for drp
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so the command handlers and completion generation can share them.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

#[cfg(feature = "release")]
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "drp")]
#[command(about = "[ drp ] - strip comments and whitespace from JavaScript and CSS files")]
#[command(long_about = "drp - a small JavaScript/CSS minifier.

Removes comments, collapses whitespace and drops the spaces around
punctuation. Nothing is parsed or renamed, so output stays readable
and diffs stay small.

QUICK START:
    drp minify app.js site.css         Write app_drp.min.js and site_drp.min.css
    drp minify src/*.js --out-dir dist Write all outputs to dist/
    drp minify app.js --stdout         Print the minified text
    drp config show                    Show the effective configuration")]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Minify JavaScript and CSS files
    #[command(long_about = "Minify one or more .js and .css files.

Each file is checked before it is minified. Duplicate file names, empty
files, unreadable files and other extensions are skipped with a message
and the rest of the batch goes on. The output name keeps the base name,
adds a marker and a .min suffix:

    app.js          -> app_drp.min.js
    vendor.min.js   -> vendor_drp.min.js

EXAMPLES:
    drp minify app.js site.css
    drp minify app.js --out-dir dist
    drp minify app.js --dry-run
    drp minify app.js site.css --json
    drp minify app.js --literal-aware     Keep // and /* inside strings

The command fails when no file could be minified.")]
    Minify {
        /// Files to minify
        #[arg(required = true, help = "JavaScript or CSS files to minify")]
        files: Vec<PathBuf>,

        /// Directory for output files (defaults to each input's directory)
        #[arg(long, short, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Print minified text to stdout instead of writing files
        #[arg(long, conflicts_with = "json")]
        stdout: bool,

        /// Report only, write nothing
        #[arg(long)]
        dry_run: bool,

        /// Print the batch report as JSON
        #[arg(long)]
        json: bool,

        /// Ignore comment markers inside string literals
        #[arg(long)]
        literal_aware: bool,

        /// Minify files one after another
        #[arg(long)]
        no_parallel: bool,

        /// Token added to output file names (default: _drp)
        #[arg(long, value_name = "TOKEN")]
        marker: Option<String>,
    },

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View the drp configuration.

Configuration is stored in ~/.config/drp/config.toml. Missing files and
missing keys fall back to defaults.

EXAMPLES:
    drp config show          Display the effective configuration
    drp config path          Print the config file location
    drp config init          Write a config file with the defaults"
    )]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration to the config file path
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
