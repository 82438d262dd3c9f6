//! Batch processing of input files.
//!
//! Each file is checked in order:
//! 1. duplicate name (an earlier accepted file had the same file name)
//! 2. readable as UTF-8 text
//! 3. not empty or whitespace only
//! 4. `.js` or `.css` suffix
//!
//! A file that fails a check is skipped with a [`SkipReason`] and the batch
//! moves on. Accepted files are minified, in parallel when enabled; outcomes
//! keep the input order. Success and failure counts live in the returned
//! [`BatchSummary`], never in shared state.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::files::filename::{output_file_name, DEFAULT_MARKER};
use crate::minify::{minify_with, MinifyOptions};
use crate::report::{classify, MinificationResult};
use crate::source::{SourceKind, SourceText};

/// Settings for one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub minify: MinifyOptions,
    /// Minify accepted files on the rayon pool.
    pub parallel: bool,
    /// Marker used by [`output_file_name`].
    pub marker: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            minify: MinifyOptions::default(),
            parallel: true,
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

/// Why a file was not processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    #[error("File \"{name}\" is already added.")]
    Duplicate { name: String },

    #[error("File \"{name}\" is empty and will not be processed.")]
    Empty { name: String },

    #[error("Skipped {name}: Unsupported file type")]
    Unsupported { name: String },

    #[error("Skipped {name}: {message}")]
    Unreadable { name: String, message: String },
}

/// A file that made it through the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedFile {
    pub path: PathBuf,
    pub name: String,
    pub kind: SourceKind,
    /// Name to write the minified text under.
    pub output_name: String,
    #[serde(flatten)]
    pub result: MinificationResult,
}

impl ProcessedFile {
    /// Success line for terminal output.
    pub fn message(&self) -> String {
        format!("File \"{}\" is successfully added.", self.name)
    }
}

/// What happened to one input path.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Processed(ProcessedFile),
    Skipped(SkipReason),
}

impl FileOutcome {
    pub fn is_processed(&self) -> bool {
        matches!(self, FileOutcome::Processed(_))
    }
}

/// Outcomes of a batch in input order, plus the counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub outcomes: Vec<FileOutcome>,
    pub success: usize,
    pub failure: usize,
}

impl BatchSummary {
    pub fn processed(&self) -> impl Iterator<Item = &ProcessedFile> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Processed(file) => Some(file),
            FileOutcome::Skipped(_) => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SkipReason> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Skipped(reason) => Some(reason),
            FileOutcome::Processed(_) => None,
        })
    }

    /// Sum of original and minified sizes over processed files.
    pub fn total_sizes(&self) -> (usize, usize) {
        self.processed().fold((0, 0), |(orig, min), f| {
            (
                orig + f.result.original_size_bytes,
                min + f.result.minified_size_bytes,
            )
        })
    }
}

/// A file that passed validation and waits to be minified.
struct Accepted {
    path: PathBuf,
    name: String,
    kind: SourceKind,
    content: String,
}

enum Staged {
    Accepted(Accepted),
    Skipped(SkipReason),
}

/// Validate and minify every path.
///
/// Never fails as a whole: per-file problems become [`FileOutcome::Skipped`].
pub fn process_batch<P: AsRef<Path>>(paths: &[P], options: &BatchOptions) -> BatchSummary {
    let mut seen = HashSet::new();
    let staged: Vec<Staged> = paths
        .iter()
        .map(|p| stage(p.as_ref(), &mut seen))
        .collect();

    let complete = |s: Staged| match s {
        Staged::Accepted(file) => finish(file, options),
        Staged::Skipped(reason) => FileOutcome::Skipped(reason),
    };

    let outcomes: Vec<FileOutcome> = if options.parallel {
        staged.into_par_iter().map(complete).collect()
    } else {
        staged.into_iter().map(complete).collect()
    };

    let success = outcomes.iter().filter(|o| o.is_processed()).count();
    let failure = outcomes.len() - success;
    info!(success, failure, "batch finished");

    BatchSummary {
        outcomes,
        success,
        failure,
    }
}

/// Run the checks for one path, in the order listed in the module docs.
fn stage(path: &Path, seen: &mut HashSet<String>) -> Staged {
    let name = display_name(path);

    if seen.contains(&name) {
        warn!(%name, "duplicate file name");
        return Staged::Skipped(SkipReason::Duplicate { name });
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(%name, error = %e, "could not read file");
            return Staged::Skipped(SkipReason::Unreadable {
                name,
                message: e.to_string(),
            });
        }
    };

    if content.trim().is_empty() {
        warn!(%name, "empty file");
        return Staged::Skipped(SkipReason::Empty { name });
    }

    let Some(kind) = SourceKind::from_file_name(&name) else {
        warn!(%name, "unsupported file type");
        return Staged::Skipped(SkipReason::Unsupported { name });
    };

    debug!(%name, %kind, bytes = content.len(), "accepted");
    seen.insert(name.clone());
    Staged::Accepted(Accepted {
        path: path.to_path_buf(),
        name,
        kind,
        content,
    })
}

fn finish(file: Accepted, options: &BatchOptions) -> FileOutcome {
    let minified = minify_with(SourceText::new(&file.content, file.kind), options.minify);
    let result = match classify(&file.content, &minified) {
        Ok(result) => result,
        // Only empty content fails here and `stage` already rejected it.
        Err(_) => return FileOutcome::Skipped(SkipReason::Empty { name: file.name }),
    };
    let output_name = output_file_name(
        &file.name,
        file.kind,
        result.already_minified,
        &options.marker,
    );
    FileOutcome::Processed(ProcessedFile {
        path: file.path,
        name: file.name,
        kind: file.kind,
        output_name,
        result,
    })
}

/// Final path component, or the whole path if there is none.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
