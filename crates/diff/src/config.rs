use anyhow::Result;
use derive_more::Display;
use std::hash::Hash;

use crate::align::{align, align_similar, EditOp, SequenceMatcher};
use crate::inline::InlineHighlighter;
use crate::limits::Limits;
use crate::pane_diff::PaneDiff;

/// Algorithm used for the line-level alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum AlignAlgorithm {
    /// Longest-matching-block recursion, the reference behavior
    #[default]
    #[display(fmt = "matching-blocks")]
    MatchingBlocks,

    /// Myers' O(ND) algorithm, via `similar`
    #[display(fmt = "myers")]
    Myers,

    /// Patience diff, via `similar`
    #[display(fmt = "patience")]
    Patience,
}

/// Settings for a diff request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffConfig {
    pub limits: Limits,
    pub algorithm: AlignAlgorithm,
    /// Ignore very frequent elements as match anchors (matching blocks only)
    pub autojunk: bool,
}

impl DiffConfig {
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the longest line the guard accepts
    pub fn max_line_length(mut self, max: usize) -> Self {
        self.limits.max_line_length = max;
        self
    }

    /// Set the combined pair length above which inline highlighting is skipped
    pub fn inline_limit(mut self, max: usize) -> Self {
        self.limits.max_inline_combined_length = max;
        self
    }

    pub fn algorithm(mut self, algorithm: AlignAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn autojunk(mut self, autojunk: bool) -> Self {
        self.autojunk = autojunk;
        self
    }

    /// Validate both texts and diff them
    pub fn diff(&self, left: &str, right: &str) -> Result<PaneDiff> {
        PaneDiff::with_config(left, right, self)
    }

    /// Align two line sequences with the configured algorithm
    pub fn align_lines<T: Eq + Hash + Ord>(&self, a: &[T], b: &[T]) -> Vec<EditOp> {
        match self.algorithm {
            AlignAlgorithm::MatchingBlocks if self.autojunk => {
                SequenceMatcher::with_autojunk(a, b, true).edit_ops()
            }
            AlignAlgorithm::MatchingBlocks => align(a, b),
            AlignAlgorithm::Myers => align_similar(similar::Algorithm::Myers, a, b),
            AlignAlgorithm::Patience => align_similar(similar::Algorithm::Patience, a, b),
        }
    }

    /// The inline highlighter matching these settings
    pub fn highlighter(&self) -> InlineHighlighter {
        InlineHighlighter::new(self.limits.max_inline_combined_length).autojunk(self.autojunk)
    }
}
