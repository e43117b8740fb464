use anyhow::Result;

use crate::align::{align, EditOp};
use crate::chunk::{chunks_from_ops, Chunk};
use crate::lines::split_lines;
use crate::pane_diff::PaneDiff;

/// Wrapper around one-shot text diff operations
pub struct TextDiff;

impl TextDiff {
    /// Create a validated diff between two texts
    pub fn diff(left: &str, right: &str) -> Result<PaneDiff> {
        PaneDiff::new(left, right)
    }

    /// Line-level chunks between two texts, without running the guard
    pub fn chunks(left: &str, right: &str) -> Vec<Chunk> {
        let left_lines = split_lines(left);
        let right_lines = split_lines(right);
        chunks_from_ops(&align(&left_lines, &right_lines))
    }

    /// Character-level operations between two lines, equal runs included
    pub fn inline(left: &str, right: &str) -> Vec<EditOp> {
        let left: Vec<char> = left.chars().collect();
        let right: Vec<char> = right.chars().collect();
        align(&left, &right)
    }
}
