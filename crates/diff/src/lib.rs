// Core alignment library for two-pane text comparison
// This crate aligns lines and characters and projects the result onto
// per-line records for a viewer

mod align;
mod batch;
mod chunk;
mod config;
mod inline;
mod limits;
mod lines;
mod pane_diff;
mod project;
mod text_diff;

pub use align::{align, align_similar, DiffTag, EditOp, MatchingBlock, SequenceMatcher};
pub use batch::diff_batch;
pub use chunk::{chunks_from_ops, enclosing_chunk, Chunk, Side};
pub use config::{AlignAlgorithm, DiffConfig};
pub use inline::{escape, highlight, InlineHighlighter, MarkedRun, MarkedText, BLANK_HTML, CHANGED_CLASS};
pub use limits::{
    validate, LimitError, Limits, DEFAULT_MAX_INLINE_COMBINED_LENGTH, DEFAULT_MAX_LINE_LENGTH,
};
pub use lines::{line_len, split_lines};
pub use pane_diff::{PaneDiff, PaneDiffSnapshot};
pub use project::{project, AnnotatedLine};
pub use text_diff::TextDiff;
