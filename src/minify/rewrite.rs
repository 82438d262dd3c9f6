//! Text rewrite pipeline for the minifiers.
//!
//! This module provides the [`Rewrite`] trait and [`RewriteChain`] for applying
//! an ordered list of string rewrites. Each minifier is nothing more than a
//! chain of these steps, so a step can be tested, inserted or reordered on its
//! own.
//!
//! # Design Principles
//!
//! - **Pure steps**: A step takes `&self` and the current text and returns the
//!   rewritten text. Steps hold no state between calls, so one chain can be
//!   shared across threads.
//! - **Copy on change**: Steps return [`Cow::Borrowed`] when they leave the text
//!   untouched, which lets the chain skip allocations for no-op steps.
//! - **Composable**: A chain is itself a [`Rewrite`].
//!
//! # Example
//!
//! ```
//! use std::borrow::Cow;
//! use drp::minify::{LiteralRule, Rewrite, RewriteChain};
//!
//! /// Uppercases everything.
//! struct Shout;
//!
//! impl Rewrite for Shout {
//!     fn name(&self) -> &'static str {
//!         "shout"
//!     }
//!
//!     fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
//!         Cow::Owned(text.to_uppercase())
//!     }
//! }
//!
//! let chain = RewriteChain::new()
//!     .with(LiteralRule::new("drop-bang", "!", ""))
//!     .with(Shout);
//!
//! assert_eq!(chain.rewrite("hey!"), "HEY");
//! ```

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::trace;

/// A single text rewrite.
///
/// Rewrites are infallible. Whatever text comes in, some text goes out; the
/// minifiers have no notion of a syntax error.
pub trait Rewrite: Send + Sync {
    /// Short identifier used in trace logs.
    fn name(&self) -> &'static str;

    /// Apply the rewrite.
    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// A chain of rewrites applied in sequence.
///
/// Each step sees the output of the previous one.
pub struct RewriteChain {
    steps: Vec<Box<dyn Rewrite>>,
}

impl RewriteChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a step to the end of the chain.
    pub fn with<R: Rewrite + 'static>(mut self, step: R) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Step names in application order.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }
}

impl Default for RewriteChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Rewrite for RewriteChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(text);
        for step in &self.steps {
            let next = match step.rewrite(&current) {
                Cow::Borrowed(_) => {
                    trace!(step = step.name(), "unchanged");
                    continue;
                }
                Cow::Owned(next) => next,
            };
            trace!(
                step = step.name(),
                before = current.len(),
                after = next.len(),
                "rewrote"
            );
            current = Cow::Owned(next);
        }
        current
    }
}

/// A `(pattern, replacement)` table entry.
///
/// The pattern lives in a `LazyLock` static so it is compiled once per process.
/// The replacement uses regex syntax, so `$1` refers to the first capture group.
pub struct RegexRule {
    name: &'static str,
    pattern: &'static LazyLock<Regex>,
    replacement: &'static str,
}

impl RegexRule {
    pub const fn new(
        name: &'static str,
        pattern: &'static LazyLock<Regex>,
        replacement: &'static str,
    ) -> Self {
        Self {
            name,
            pattern,
            replacement,
        }
    }
}

impl Rewrite for RegexRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, self.replacement)
    }
}

/// Plain substring replacement, for rules that need no pattern.
pub struct LiteralRule {
    name: &'static str,
    from: &'static str,
    to: &'static str,
}

impl LiteralRule {
    pub const fn new(name: &'static str, from: &'static str, to: &'static str) -> Self {
        Self { name, from, to }
    }
}

impl Rewrite for LiteralRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.contains(self.from) {
            Cow::Owned(text.replace(self.from, self.to))
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Collapses every whitespace run, newlines included, to one space.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Step shared by both pipelines.
pub fn collapse_whitespace() -> RegexRule {
    RegexRule::new("collapse-whitespace", &WHITESPACE_RUN, " ")
}

/// `;}` becomes `}`.
pub fn trailing_separator() -> LiteralRule {
    LiteralRule::new("trailing-separator", ";}", "}")
}
