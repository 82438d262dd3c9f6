//! Source kinds and the text handed to the minifier.

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Which pipeline a file goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    JavaScript,
    Css,
}

impl SourceKind {
    /// Pick the kind from a file name suffix.
    ///
    /// Only `.js` and `.css` are recognized and the match is case-sensitive,
    /// so `APP.JS` is unsupported.
    pub fn from_file_name(name: &str) -> Option<Self> {
        if name.ends_with(".js") {
            Some(SourceKind::JavaScript)
        } else if name.ends_with(".css") {
            Some(SourceKind::Css)
        } else {
            None
        }
    }

    /// Same as [`SourceKind::from_file_name`], using the final path component.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()
            .and_then(|n| n.to_str())
            .and_then(Self::from_file_name)
    }

    /// Extension written after `.min.` in output names.
    pub fn extension(&self) -> &'static str {
        match self {
            SourceKind::JavaScript => "js",
            SourceKind::Css => "css",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::JavaScript => write!(f, "JavaScript"),
            SourceKind::Css => write!(f, "CSS"),
        }
    }
}

/// Raw file content paired with the pipeline it belongs to.
///
/// Built by the caller once per file and only ever read.
#[derive(Debug, Clone, Copy)]
pub struct SourceText<'a> {
    pub content: &'a str,
    pub kind: SourceKind,
}

impl<'a> SourceText<'a> {
    pub fn new(content: &'a str, kind: SourceKind) -> Self {
        Self { content, kind }
    }
}
