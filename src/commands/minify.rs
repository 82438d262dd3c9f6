//! Minify command handler

use anyhow::{bail, Context, Result};
use humansize::{format_size, DECIMAL};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use drp::batch::{FileOutcome, ProcessedFile};
use drp::theme::Theme;
use drp::{process_batch, BatchOptions, BatchSummary, Config};

/// Flags of `drp minify`.
#[derive(Debug, Clone, Default)]
pub struct MinifyArgs {
    pub files: Vec<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub stdout: bool,
    pub dry_run: bool,
    pub json: bool,
    pub literal_aware: bool,
    pub no_parallel: bool,
    pub marker: Option<String>,
}

/// Handle `drp minify`.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: MinifyArgs) -> Result<()> {
    let config = Config::load()?;
    let theme = Theme::detect();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = run(
        &args,
        &config,
        &theme,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;

    if summary.success == 0 {
        bail!("No files were minified ({} skipped)", summary.failure);
    }
    Ok(())
}

/// Config values with command line flags layered on top.
pub(crate) fn batch_options(args: &MinifyArgs, config: &Config) -> BatchOptions {
    let mut options = config.batch_options();
    if args.literal_aware {
        options.minify.literal_aware = true;
    }
    if args.no_parallel {
        options.parallel = false;
    }
    if let Some(marker) = &args.marker {
        options.marker = marker.clone();
    }
    options
}

/// Where a processed file is written.
pub(crate) fn output_path(file: &ProcessedFile, out_dir: Option<&Path>) -> PathBuf {
    let dir = out_dir
        .map(Path::to_path_buf)
        .or_else(|| file.path.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(&file.output_name)
}

/// Run a batch and report on it.
///
/// The report goes to `out`, except with `--stdout` where `out` only gets
/// minified text and the report goes to `err`.
pub(crate) fn run<W: Write, E: Write>(
    args: &MinifyArgs,
    config: &Config,
    theme: &Theme,
    out: &mut W,
    err: &mut E,
) -> Result<BatchSummary> {
    let options = batch_options(args, config);
    let out_dir = args.out_dir.clone().or_else(|| config.output_directory());
    let summary = process_batch(&args.files, &options);

    if !args.dry_run && !args.stdout {
        write_outputs(&summary, out_dir.as_deref())?;
    }

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize report")?;
        writeln!(out, "{}", json)?;
        return Ok(summary);
    }

    if args.stdout {
        for file in summary.processed() {
            writeln!(out, "{}", file.result.minified)?;
        }
        print_compact_report(&summary, theme, err)?;
    } else {
        print_report(&summary, out_dir.as_deref(), args.dry_run, theme, out)?;
    }

    Ok(summary)
}

fn write_outputs(summary: &BatchSummary, out_dir: Option<&Path>) -> Result<()> {
    if let Some(dir) = out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {:?}", dir))?;
    }
    for file in summary.processed() {
        let path = output_path(file, out_dir);
        fs::write(&path, &file.result.minified)
            .with_context(|| format!("Failed to write {:?}", path))?;
        info!(path = %path.display(), "wrote minified file");
    }
    Ok(())
}

fn print_report<W: Write>(
    summary: &BatchSummary,
    out_dir: Option<&Path>,
    dry_run: bool,
    theme: &Theme,
    out: &mut W,
) -> Result<()> {
    for outcome in &summary.outcomes {
        match outcome {
            FileOutcome::Processed(file) => {
                writeln!(out, "{}", theme.success_text(&file.message()))?;
                writeln!(out, "{}", file.result.summary())?;
                if out_dir.is_some() || !dry_run {
                    let verb = if dry_run { "Would write" } else { "Wrote" };
                    let path = output_path(file, out_dir);
                    writeln!(
                        out,
                        "{}",
                        theme.secondary_text(&format!("{} {}", verb, path.display()))
                    )?;
                }
            }
            FileOutcome::Skipped(reason) => {
                writeln!(out, "{}", theme.error_text(&reason.to_string()))?;
            }
        }
    }
    writeln!(out, "{}", totals_line(summary))?;
    Ok(())
}

/// One line per file, for when stdout carries the minified text.
fn print_compact_report<W: Write>(
    summary: &BatchSummary,
    theme: &Theme,
    out: &mut W,
) -> Result<()> {
    for outcome in &summary.outcomes {
        match outcome {
            FileOutcome::Processed(file) => writeln!(
                out,
                "{} {}",
                theme.success_text(&file.message()),
                theme.secondary_text(&file.result.short_summary())
            )?,
            FileOutcome::Skipped(reason) => {
                writeln!(out, "{}", theme.error_text(&reason.to_string()))?
            }
        }
    }
    writeln!(out, "{}", totals_line(summary))?;
    Ok(())
}

/// `2 minified, 1 skipped: 1.20 kB -> 800 B`
pub(crate) fn totals_line(summary: &BatchSummary) -> String {
    let (original, minified) = summary.total_sizes();
    format!(
        "{} minified, {} skipped: {} -> {}",
        summary.success,
        summary.failure,
        format_size(original as u64, DECIMAL),
        format_size(minified as u64, DECIMAL)
    )
}
