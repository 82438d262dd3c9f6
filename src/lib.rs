//! drp - JavaScript and CSS minification
//!
//! Strips comments and redundant whitespace from `.js` and `.css` sources,
//! reports the size reduction and picks an output file name. Files are
//! handled as a batch where bad inputs are skipped, not fatal.

pub mod batch;
pub mod config;
pub mod files;
pub mod minify;
pub mod report;
pub mod source;
pub mod theme;

pub use batch::{process_batch, BatchOptions, BatchSummary, FileOutcome, ProcessedFile, SkipReason};
pub use config::Config;
pub use minify::{minify_css, minify_javascript, MinifyOptions};
pub use report::{classify, MinificationResult, ReportError};
pub use source::{SourceKind, SourceText};
