use anyhow::{Context, Result};
use ropey::Rope;

use crate::align::DiffTag;
use crate::chunk::{chunks_from_ops, Chunk, Side};
use crate::config::DiffConfig;
use crate::inline::InlineHighlighter;
use crate::limits::validate;
use crate::lines::rope_lines;
use crate::project::{project, AnnotatedLine};

/// A line-level diff between the two panes
#[derive(Debug, Clone)]
pub struct PaneDiff {
    /// The left text
    left_text: Rope,

    /// The right text
    right_text: Rope,

    left_lines: Vec<String>,
    right_lines: Vec<String>,

    /// Non-equal regions, in order
    chunks: Vec<Chunk>,

    highlighter: InlineHighlighter,
}

/// An immutable snapshot of a pane diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneDiffSnapshot {
    /// The chunks in this diff
    pub chunks: Vec<Chunk>,

    /// The number of lines in the left text
    pub left_line_count: usize,

    /// The number of lines in the right text
    pub right_line_count: usize,
}

impl PaneDiff {
    /// Create a diff between two texts with the default configuration
    pub fn new(left: &str, right: &str) -> Result<Self> {
        Self::with_config(left, right, &DiffConfig::default())
    }

    /// Create a diff between two texts.
    ///
    /// Both texts are validated first; a guard failure is returned with the
    /// offending side attached as context and can be recovered with
    /// `downcast_ref::<LimitError>()`.
    pub fn with_config(left: &str, right: &str, config: &DiffConfig) -> Result<Self> {
        validate(left, &config.limits).context("left text cannot be diffed")?;
        validate(right, &config.limits).context("right text cannot be diffed")?;

        let left_text = Rope::from_str(left);
        let right_text = Rope::from_str(right);
        let left_lines = rope_lines(&left_text);
        let right_lines = rope_lines(&right_text);

        let chunks = chunks_from_ops(&config.align_lines(&left_lines, &right_lines));

        Ok(Self {
            left_text,
            right_text,
            left_lines,
            right_lines,
            chunks,
            highlighter: config.highlighter(),
        })
    }

    /// Annotated records for every line of `side`
    pub fn project(&self, side: Side) -> Vec<AnnotatedLine> {
        project(
            self.lines(side),
            self.lines(side.other()),
            &self.chunks,
            side,
            &self.highlighter,
        )
    }

    /// Get a snapshot of the current diff
    pub fn snapshot(&self) -> PaneDiffSnapshot {
        PaneDiffSnapshot {
            chunks: self.chunks.clone(),
            left_line_count: self.left_lines.len(),
            right_line_count: self.right_lines.len(),
        }
    }

    /// Get the text of one side
    pub fn text(&self, side: Side) -> &Rope {
        match side {
            Side::A => &self.left_text,
            Side::B => &self.right_text,
        }
    }

    /// Get the split lines of one side
    pub fn lines(&self, side: Side) -> &[String] {
        match side {
            Side::A => &self.left_lines,
            Side::B => &self.right_lines,
        }
    }

    /// Get the chunks
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Get the number of chunks
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Get a chunk by index
    pub fn chunk(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }
}

impl PaneDiffSnapshot {
    /// Create a new empty diff snapshot
    pub fn empty() -> Self {
        Self {
            chunks: Vec::new(),
            left_line_count: 0,
            right_line_count: 0,
        }
    }

    /// Get the chunks
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Get the number of chunks
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Get a chunk by index
    pub fn chunk(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }

    /// Check if the diff has any changes
    pub fn has_changes(&self) -> bool {
        !self.chunks.is_empty()
    }

    /// Lines only present on the right
    pub fn inserted_lines(&self) -> usize {
        self.lines_tagged(DiffTag::Insert, Side::B)
    }

    /// Lines only present on the left
    pub fn deleted_lines(&self) -> usize {
        self.lines_tagged(DiffTag::Delete, Side::A)
    }

    /// Lines inside replace chunks on `side`
    pub fn replaced_lines(&self, side: Side) -> usize {
        self.lines_tagged(DiffTag::Replace, side)
    }

    /// Lines of `side` outside any chunk
    pub fn unchanged_lines(&self, side: Side) -> usize {
        let line_count = match side {
            Side::A => self.left_line_count,
            Side::B => self.right_line_count,
        };
        line_count.saturating_sub(self.chunks.iter().map(|c| c.len(side)).sum::<usize>())
    }

    fn lines_tagged(&self, tag: DiffTag, side: Side) -> usize {
        self.chunks
            .iter()
            .filter(|c| c.tag == tag)
            .map(|c| c.len(side))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::LimitError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identical_texts_have_no_chunks() {
        let diff = PaneDiff::new("line1\nline2\nline3", "line1\nline2\nline3").unwrap();
        assert_eq!(diff.chunk_count(), 0);
        assert!(!diff.snapshot().has_changes());
        assert_eq!(diff.snapshot().unchanged_lines(Side::A), 3);
    }

    #[test]
    fn test_guard_failure_names_the_side() {
        let err = PaneDiff::new("fine", "bad\0").unwrap_err();
        assert_eq!(err.to_string(), "right text cannot be diffed");
        assert_eq!(
            err.downcast_ref::<LimitError>(),
            Some(&LimitError::BinaryContent)
        );
    }

    #[test]
    fn test_snapshot_counts() {
        let diff = PaneDiff::new("A\nB\nC\nD", "A\nX\nC\nY\nZ").unwrap();
        let snapshot = diff.snapshot();

        assert_eq!(snapshot.left_line_count, 4);
        assert_eq!(snapshot.right_line_count, 5);
        assert_eq!(snapshot.replaced_lines(Side::A), 2);
        assert_eq!(snapshot.replaced_lines(Side::B), 3);
        assert_eq!(snapshot.unchanged_lines(Side::A), 2);
        assert_eq!(snapshot.unchanged_lines(Side::B), 2);
    }

    #[test]
    fn test_unchanged_lines_never_underflow() {
        let snapshot = PaneDiffSnapshot {
            chunks: vec![Chunk {
                id: 0,
                tag: DiffTag::Delete,
                start_a: 0,
                end_a: 5,
                start_b: 0,
                end_b: 0,
            }],
            left_line_count: 2,
            right_line_count: 0,
        };
        assert_eq!(snapshot.unchanged_lines(Side::A), 0);
        assert_eq!(snapshot.unchanged_lines(Side::B), 0);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = PaneDiffSnapshot::empty();
        assert_eq!(snapshot.chunk_count(), 0);
        assert_eq!(snapshot.inserted_lines(), 0);
        assert_eq!(snapshot.deleted_lines(), 0);
        assert!(!snapshot.has_changes());
    }
}
