//! drp - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use cli::{Cli, Commands, ConfigCommands};
use commands::minify::MinifyArgs;

/// Log to stderr; `-v` raises the level from warn to info, debug, trace.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Minify {
            files,
            out_dir,
            stdout,
            dry_run,
            json,
            literal_aware,
            no_parallel,
            marker,
        } => commands::minify::handle(MinifyArgs {
            files,
            out_dir,
            stdout,
            dry_run,
            json,
            literal_aware,
            no_parallel,
            marker,
        }),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
