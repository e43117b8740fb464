#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::align::DiffTag;
use crate::chunk::{enclosing_chunk, Chunk, Side};
use crate::inline::{InlineHighlighter, MarkedText};

/// A displayed line with its classification and rendered content
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnotatedLine {
    /// 0-based index on its side
    pub index: usize,

    /// Tag of the enclosing chunk, `None` in equal regions
    pub tag: Option<DiffTag>,

    pub content: MarkedText,
}

/// Produce a record for every line of `side`, in order.
///
/// Lines of a replace chunk are paired with the line at the same offset in
/// the chunk on the other side; offsets landing past the end of the other
/// text render without highlighting.
pub fn project<S: AsRef<str>>(
    lines: &[S],
    other_lines: &[S],
    chunks: &[Chunk],
    side: Side,
    highlighter: &InlineHighlighter,
) -> Vec<AnnotatedLine> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let line: &str = line.as_ref();
            let chunk = enclosing_chunk(chunks, side, index);

            let content = match chunk {
                Some(chunk) if chunk.tag == DiffTag::Replace => {
                    match paired_index(chunk, side, index, other_lines.len()) {
                        Some(other) => highlighter.highlight(line, other_lines[other].as_ref(), true),
                        None => MarkedText::plain_line(line),
                    }
                }
                _ => MarkedText::plain_line(line),
            };

            AnnotatedLine {
                index,
                tag: chunk.map(|chunk| chunk.tag),
                content,
            }
        })
        .collect()
}

/// Line on the other side at the same offset within `chunk`.
///
/// The bound is the other text's length, not the chunk's, so a longer side
/// may pair with lines just past the shorter side's end of the chunk.
fn paired_index(chunk: &Chunk, side: Side, index: usize, other_len: usize) -> Option<usize> {
    let offset = index - chunk.range(side).start;
    let other = chunk.range(side.other()).start + offset;
    (other < other_len).then_some(other)
}
