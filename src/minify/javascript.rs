//! JavaScript pipeline.
//!
//! 1. strip comments
//! 2. collapse whitespace
//! 3. drop spaces around `{ } ( ) < > ! = + , | ~ ^ ; ? : -`
//! 4. `;}` becomes `}`
//!
//! Nothing here parses JavaScript. Every step is a text rewrite.

use regex::Regex;
use std::sync::LazyLock;

use super::comments::{CommentStripper, NaiveLineAndBlock, StripComments};
use super::rewrite::{collapse_whitespace, trailing_separator, RegexRule, RewriteChain};
use super::run_to_fixed_point;

static PUNCTUATION_SPACING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*([{}()<>!=+,|~^;?:-])\s*").expect("punctuation pattern is valid")
});

/// Table of pattern rules that run after whitespace collapsing.
pub fn punctuation_rules() -> [RegexRule; 1] {
    [RegexRule::new("punctuation-spacing", &PUNCTUATION_SPACING, "$1")]
}

/// The JavaScript pipeline with a chosen comment stripper.
pub struct JavaScriptMinifier {
    chain: RewriteChain,
}

impl JavaScriptMinifier {
    /// Pipeline with the pattern based [`NaiveLineAndBlock`] stripper.
    pub fn new() -> Self {
        Self::with_stripper(Box::new(NaiveLineAndBlock))
    }

    /// Pipeline with a different comment stripper. The other steps are unchanged.
    pub fn with_stripper(stripper: Box<dyn CommentStripper>) -> Self {
        let mut chain = RewriteChain::new()
            .with(StripComments::boxed(stripper))
            .with(collapse_whitespace());
        for rule in punctuation_rules() {
            chain = chain.with(rule);
        }
        Self {
            chain: chain.with(trailing_separator()),
        }
    }

    /// Minify `content`, repeating the pipeline until the output is stable.
    pub fn minify(&self, content: &str) -> String {
        run_to_fixed_point(&self.chain, content)
    }

    pub fn chain(&self) -> &RewriteChain {
        &self.chain
    }
}

impl Default for JavaScriptMinifier {
    fn default() -> Self {
        Self::new()
    }
}
