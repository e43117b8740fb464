use derive_more::Display;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::align::{DiffTag, EditOp};

/// One of the two compared texts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// The left pane, sequence A
    #[display(fmt = "left")]
    A,

    /// The right pane, sequence B
    #[display(fmt = "right")]
    B,
}

impl Side {
    /// The opposite pane
    pub fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// A non-equal region of a line alignment.
///
/// `id` is the chunk's position in the filtered list and exists for external
/// reference only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chunk {
    pub id: usize,
    pub tag: DiffTag,
    pub start_a: usize,
    pub end_a: usize,
    pub start_b: usize,
    pub end_b: usize,
}

impl Chunk {
    /// The half-open line range this chunk covers on `side`
    pub fn range(&self, side: Side) -> Range<usize> {
        match side {
            Side::A => self.start_a..self.end_a,
            Side::B => self.start_b..self.end_b,
        }
    }

    /// Number of lines covered on `side`
    pub fn len(&self, side: Side) -> usize {
        self.range(side).len()
    }

    /// Check if the chunk covers no lines on `side`
    pub fn is_empty(&self, side: Side) -> bool {
        self.range(side).is_empty()
    }

    /// Check if this chunk covers `line` on `side`
    pub fn contains(&self, side: Side, line: usize) -> bool {
        self.range(side).contains(&line)
    }
}

/// Keep the non-equal operations of an alignment, numbering them in order
pub fn chunks_from_ops(ops: &[EditOp]) -> Vec<Chunk> {
    ops.iter()
        .filter(|op| op.tag() != DiffTag::Equal)
        .enumerate()
        .map(|(id, op)| {
            let (a, b) = (op.a_range(), op.b_range());
            Chunk {
                id,
                tag: op.tag(),
                start_a: a.start,
                end_a: a.end,
                start_b: b.start,
                end_b: b.end,
            }
        })
        .collect()
}

/// Find the chunk covering `line` on `side`.
///
/// Chunks come from a single alignment, so their ranges on either side are
/// sorted and never overlap.
pub fn enclosing_chunk(chunks: &[Chunk], side: Side, line: usize) -> Option<&Chunk> {
    let candidate = chunks.partition_point(|chunk| chunk.range(side).end <= line);
    chunks
        .get(candidate)
        .filter(|chunk| chunk.contains(side, line))
}
