use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::lines::{line_len, split_lines};

/// Default cap on the length of a single line, in characters.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 8 * 1024;

/// Default combined length of a line pair above which inline highlighting is
/// skipped.
pub const DEFAULT_MAX_INLINE_COMBINED_LENGTH: usize = 20 * 1024;

/// Size bounds applied to a diff request.
///
/// The two bounds are independent: exceeding `max_line_length` rejects the
/// text outright, while exceeding `max_inline_combined_length` only turns off
/// character-level highlighting for that line pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Limits {
    /// Longest line accepted by [`validate`]
    pub max_line_length: usize,

    /// Largest `len(line) + len(paired_line)` that still gets inline highlighting
    pub max_inline_combined_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            max_inline_combined_length: DEFAULT_MAX_INLINE_COMBINED_LENGTH,
        }
    }
}

impl Limits {
    /// Set the longest accepted line
    pub fn max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = max;
        self
    }

    /// Set the inline highlighting budget
    pub fn max_inline_combined_length(mut self, max: usize) -> Self {
        self.max_inline_combined_length = max;
        self
    }
}

/// Reasons a text cannot be handed to the aligner
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum LimitError {
    /// The text contains a null character and is treated as binary
    #[display(fmt = "text appears to be binary (contains null bytes)")]
    BinaryContent,

    /// A line is longer than the configured maximum
    #[display(
        fmt = "line {} exceeds {} characters ({} chars)",
        line_number,
        max,
        length
    )]
    LineTooLong {
        /// 1-based number of the first offending line
        line_number: usize,
        /// Measured length of that line
        length: usize,
        /// The limit that was exceeded
        max: usize,
    },
}

impl std::error::Error for LimitError {}

/// Check that a text can be diffed under the given limits.
///
/// Stops at the first violation.
pub fn validate(text: &str, limits: &Limits) -> Result<(), LimitError> {
    if text.contains('\0') {
        return Err(LimitError::BinaryContent);
    }

    for (index, line) in split_lines(text).iter().enumerate() {
        let length = line_len(line);
        if length > limits.max_line_length {
            return Err(LimitError::LineTooLong {
                line_number: index + 1,
                length,
                max: limits.max_line_length,
            });
        }
    }

    Ok(())
}
