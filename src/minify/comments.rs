//! Comment removal strategies.
//!
//! Comment stripping sits behind [`CommentStripper`] so the pipelines do not
//! care how comments are found:
//! - [`NaiveLineAndBlock`] - pattern based, the JavaScript default
//! - [`BlockOnly`] - `/* ... */` only, the CSS default
//! - [`LiteralAware`] - character scanner that leaves string literals alone
//!
//! The pattern based strippers are not literal aware. `"http://x"` survives
//! because `//` right after `:` is never treated as a comment, but
//! `'a//b'` loses everything from `//` to the end of the line.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use super::rewrite::Rewrite;

/// Block comments, or `//` to end of line unless preceded by `\` or `:`.
///
/// The character before `//` is captured and put back. A line ends at any
/// JavaScript line terminator, not only `\n`.
static LINE_AND_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)/\*[\s\S]*?\*/|([^\\:]|^)//[^\n\r\x{2028}\x{2029}]*")
        .expect("comment pattern is valid")
});

/// `\n`, `\r`, U+2028 and U+2029.
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

static BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*[\s\S]*?\*/").expect("block comment pattern is valid"));

/// Removes comments from source text.
pub trait CommentStripper: Send + Sync {
    fn strip<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Pattern based `/* */` and `//` removal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveLineAndBlock;

impl CommentStripper for NaiveLineAndBlock {
    fn strip<'a>(&self, text: &'a str) -> Cow<'a, str> {
        LINE_AND_BLOCK.replace_all(text, "$1")
    }
}

/// Pattern based `/* */` removal.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockOnly;

impl CommentStripper for BlockOnly {
    fn strip<'a>(&self, text: &'a str) -> Cow<'a, str> {
        BLOCK.replace_all(text, "")
    }
}

/// Scanner that skips over `'...'`, `"..."` and `` `...` `` literals.
///
/// Outside literals it follows the pattern based rules: `//` after `\` or `:`
/// is kept, and an unterminated `/*` is left as is. Regex literals are not
/// recognized.
#[derive(Debug, Clone, Copy)]
pub struct LiteralAware {
    line_comments: bool,
}

impl LiteralAware {
    /// Block and line comments.
    pub fn javascript() -> Self {
        Self {
            line_comments: true,
        }
    }

    /// Block comments only.
    pub fn css() -> Self {
        Self {
            line_comments: false,
        }
    }
}

impl CommentStripper for LiteralAware {
    fn strip<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let may_have_comment = text.contains("/*") || (self.line_comments && text.contains("//"));
        if !may_have_comment {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        let mut quote = QuoteState::None;

        while let Some(c) = chars.next() {
            if quote.is_inside() {
                quote.update(c);
                out.push(c);
                continue;
            }

            if c == '/' {
                match chars.peek().copied() {
                    Some('*') => {
                        if skip_block_comment(&mut chars) {
                            continue;
                        }
                    }
                    Some('/') if self.line_comments && !out.ends_with(['\\', ':']) => {
                        while chars.peek().is_some_and(|&n| !is_line_terminator(n)) {
                            chars.next();
                        }
                        continue;
                    }
                    _ => {}
                }
            }

            quote.update(c);
            out.push(c);
        }

        Cow::Owned(out)
    }
}

/// Consume a block comment whose leading `/` was already taken.
///
/// Leaves `chars` untouched and returns false when there is no closing `*/`.
fn skip_block_comment(chars: &mut std::iter::Peekable<std::str::Chars>) -> bool {
    let mut lookahead = chars.clone();
    lookahead.next(); // '*'
    let mut prev = '\0';
    while let Some(c) = lookahead.next() {
        if prev == '*' && c == '/' {
            *chars = lookahead;
            return true;
        }
        prev = c;
    }
    false
}

// ============================================================================
// Quote tracking
// ============================================================================

/// Tracks which string literal, if any, the scanner is in.
enum QuoteState {
    None,
    Inside { delimiter: char, escaped: bool },
}

impl QuoteState {
    /// Update state for the next character.
    ///
    /// `'` and `"` strings also end at a line terminator so a stray quote
    /// cannot swallow the rest of the file.
    fn update(&mut self, c: char) {
        match self {
            QuoteState::None => {
                if matches!(c, '\'' | '"' | '`') {
                    *self = QuoteState::Inside {
                        delimiter: c,
                        escaped: false,
                    };
                }
            }
            QuoteState::Inside { delimiter, escaped } => {
                if *escaped {
                    *escaped = false;
                } else if c == '\\' {
                    *escaped = true;
                } else if c == *delimiter || (is_line_terminator(c) && *delimiter != '`') {
                    *self = QuoteState::None;
                }
            }
        }
    }

    fn is_inside(&self) -> bool {
        !matches!(self, QuoteState::None)
    }
}

/// Pipeline step wrapping a [`CommentStripper`].
pub struct StripComments {
    stripper: Box<dyn CommentStripper>,
}

impl StripComments {
    pub fn boxed(stripper: Box<dyn CommentStripper>) -> Self {
        Self { stripper }
    }
}

impl Rewrite for StripComments {
    fn name(&self) -> &'static str {
        "strip-comments"
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.stripper.strip(text)
    }
}
