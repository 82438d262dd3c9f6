//! JavaScript and CSS minification
//!
//! Shrinks source text by stripping comments and collapsing whitespace and the
//! spacing around punctuation. Nothing is parsed: both pipelines are ordered
//! lists of text rewrites (see [`rewrite`]).
//!
//! # Architecture
//!
//! Each pipeline has the same shape:
//! 1. **Comment removal** - a [`CommentStripper`] (pattern based by default)
//! 2. **Whitespace collapsing** - every run becomes one space
//! 3. **Punctuation spacing** - spaces next to listed punctuation are dropped
//! 4. **Trailing separator** - `;}` becomes `}`
//!
//! CSS adds a fifth step that removes whitespace after `:`.
//!
//! # Known limits
//!
//! - The default JavaScript stripper treats `//` inside string and regex
//!   literals as a comment, except right after `\` or `:`.
//!   [`LiteralAware`] fixes the string case.
//! - No identifier renaming, dead code removal or semicolon insertion.
//!
//! # Example
//! ```
//! use drp::minify;
//! let out = minify::minify_css("a {\n  color : red ;\n}");
//! assert_eq!(out, "a{color:red}");
//! ```

mod comments;
mod css;
mod javascript;
pub mod rewrite;

pub use comments::{BlockOnly, CommentStripper, LiteralAware, NaiveLineAndBlock, StripComments};
pub use css::CssMinifier;
pub use javascript::JavaScriptMinifier;
pub use rewrite::{LiteralRule, RegexRule, Rewrite, RewriteChain};

use crate::source::{SourceKind, SourceText};
use tracing::debug;

/// Knobs that change how the pipelines find comments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinifyOptions {
    /// Use [`LiteralAware`] instead of the pattern based strippers.
    pub literal_aware: bool,
}

/// Minify JavaScript with the default pipeline.
pub fn minify_javascript(content: &str) -> String {
    JavaScriptMinifier::new().minify(content)
}

/// Minify CSS with the default pipeline.
pub fn minify_css(content: &str) -> String {
    CssMinifier::new().minify(content)
}

/// Run the pipeline matching `kind` with default options.
pub fn minify(kind: SourceKind, content: &str) -> String {
    minify_with(SourceText::new(content, kind), MinifyOptions::default())
}

/// Run the pipeline matching `source.kind`.
pub fn minify_with(source: SourceText<'_>, options: MinifyOptions) -> String {
    debug!(
        kind = %source.kind,
        bytes = source.content.len(),
        literal_aware = options.literal_aware,
        "minifying"
    );
    match (source.kind, options.literal_aware) {
        (SourceKind::JavaScript, false) => JavaScriptMinifier::new().minify(source.content),
        (SourceKind::JavaScript, true) => {
            JavaScriptMinifier::with_stripper(Box::new(LiteralAware::javascript()))
                .minify(source.content)
        }
        (SourceKind::Css, false) => CssMinifier::new().minify(source.content),
        (SourceKind::Css, true) => {
            CssMinifier::with_stripper(Box::new(LiteralAware::css())).minify(source.content)
        }
    }
}

/// Apply `chain` until its output stops changing.
///
/// A single pass is not always stable: `;;}` only loses one `;` per pass, and
/// removing a comment can butt a `/` against a `*`. After the first pass all
/// whitespace is single spaces, so any further change shrinks the text and
/// the loop ends.
pub(crate) fn run_to_fixed_point(chain: &RewriteChain, input: &str) -> String {
    let mut current = chain.rewrite(input).into_owned();
    let mut passes = 1;
    loop {
        let next = chain.rewrite(&current);
        if next == current.as_str() || next.len() >= current.len() {
            break;
        }
        current = next.into_owned();
        passes += 1;
    }
    if passes > 1 {
        debug!(passes, "pipeline needed extra passes");
    }
    current
}
