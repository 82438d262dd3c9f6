//! Output file naming for minified files.
//!
//! `app.js` becomes `app_drp.min.js`. The marker is only added once and
//! `.min` is not doubled for files that are already named `*.min.js`.

use crate::source::SourceKind;

/// Marker appended to the base name unless it is already there.
pub const DEFAULT_MARKER: &str = "_drp";

/// Derive the name to write the minified output under.
///
/// `name` is a bare file name (no directories). The base name is everything
/// before the first `.`, the rest are the extensions.
///
/// - Not already minified, not a `*.min.js`/`*.min.css` file:
///   `{base}{marker}.min.{ext}`
/// - Otherwise the original extensions are kept: `{base}{marker}.{extensions}`,
///   unless that reproduces `name` for a file the pipeline did shrink, in which
///   case `.min.{ext}` is used.
pub fn output_file_name(
    name: &str,
    kind: SourceKind,
    already_minified: bool,
    marker: &str,
) -> String {
    let (base, extensions) = name.split_once('.').unwrap_or((name, ""));

    let mut base = base.to_string();
    if !base.contains(marker) {
        base.push_str(marker);
    }

    let min_name = format!("{}.min.{}", base, kind.extension());

    if !already_minified && !is_min_file(name) {
        return min_name;
    }

    let kept = format!("{}.{}", base, extensions);
    if kept == name && !already_minified {
        min_name
    } else {
        kept
    }
}

/// `*.min.js` or `*.min.css`, any case.
pub fn is_min_file(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.ends_with(".min.js") || lower.ends_with(".min.css")
}
