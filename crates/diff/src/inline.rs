use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::align::{EditOp, SequenceMatcher};
use crate::limits::DEFAULT_MAX_INLINE_COMBINED_LENGTH;

/// Markup standing in for an empty line so it keeps its height
pub const BLANK_HTML: &str = "&nbsp;";

/// Class of the span wrapping changed characters
pub const CHANGED_CLASS: &str = "inline-diff";

/// A run of already escaped text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkedRun {
    pub text: String,
    pub changed: bool,
}

/// Rendered content of one line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "runs", rename_all = "lowercase")
)]
pub enum MarkedText {
    /// The line is empty
    Blank,

    /// Escaped runs, in line order. Never empty.
    Runs(Vec<MarkedRun>),
}

impl MarkedText {
    /// The whole line as a single unchanged run
    pub fn plain_line(line: &str) -> Self {
        if line.is_empty() {
            return MarkedText::Blank;
        }
        MarkedText::Runs(vec![MarkedRun {
            text: escape(line).into_owned(),
            changed: false,
        }])
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, MarkedText::Blank)
    }

    /// The runs making up the line, empty for a blank line
    pub fn runs(&self) -> &[MarkedRun] {
        match self {
            MarkedText::Blank => &[],
            MarkedText::Runs(runs) => runs,
        }
    }

    /// Check if any run is marked as changed
    pub fn has_changes(&self) -> bool {
        self.runs().iter().any(|run| run.changed)
    }

    /// Escaped text without markers
    pub fn plain(&self) -> String {
        self.runs().iter().map(|run| run.text.as_str()).collect()
    }

    /// Markup with changed runs wrapped in a span
    pub fn to_html(&self) -> String {
        match self {
            MarkedText::Blank => BLANK_HTML.to_string(),
            MarkedText::Runs(runs) => {
                let mut html = String::new();
                for run in runs {
                    if run.changed {
                        html.push_str(&format!(
                            "<span class=\"{}\">{}</span>",
                            CHANGED_CLASS, run.text
                        ));
                    } else {
                        html.push_str(&run.text);
                    }
                }
                html
            }
        }
    }
}

/// Escape text for embedding in markup
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Character-level highlighter for paired lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineHighlighter {
    /// Pairs longer than this in total are rendered without highlighting
    pub combined_limit: usize,

    /// Discard popular characters as match anchors on long lines
    pub autojunk: bool,
}

impl Default for InlineHighlighter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INLINE_COMBINED_LENGTH)
    }
}

impl InlineHighlighter {
    pub fn new(combined_limit: usize) -> Self {
        Self {
            combined_limit,
            autojunk: false,
        }
    }

    pub fn autojunk(mut self, autojunk: bool) -> Self {
        self.autojunk = autojunk;
        self
    }

    /// Render `line`, marking the characters that differ from `paired`.
    ///
    /// Unchanged lines, empty lines on either side and pairs over the
    /// combined budget come back as plain escaped text. Characters that only
    /// exist in `paired` contribute nothing.
    pub fn highlight(&self, line: &str, paired: &str, is_changed: bool) -> MarkedText {
        if !is_changed || line.is_empty() || paired.is_empty() {
            return MarkedText::plain_line(line);
        }

        let ours: Vec<char> = line.chars().collect();
        let theirs: Vec<char> = paired.chars().collect();
        if ours.len() + theirs.len() > self.combined_limit {
            return MarkedText::plain_line(line);
        }

        let matcher = SequenceMatcher::with_autojunk(&ours, &theirs, self.autojunk);
        let mut runs: Vec<MarkedRun> = Vec::new();
        for op in matcher.edit_ops() {
            let (range, changed) = match op {
                EditOp::Equal { a, .. } => (a, false),
                EditOp::Replace { a, .. } | EditOp::Delete { a, .. } => (a, true),
                EditOp::Insert { .. } => continue,
            };
            let text: String = ours[range].iter().collect();
            push_run(&mut runs, &text, changed);
        }

        if runs.is_empty() {
            MarkedText::Blank
        } else {
            MarkedText::Runs(runs)
        }
    }
}

/// Render `line` against `paired` with the given combined budget
pub fn highlight(line: &str, paired: &str, is_changed: bool, combined_limit: usize) -> MarkedText {
    InlineHighlighter::new(combined_limit).highlight(line, paired, is_changed)
}

fn push_run(runs: &mut Vec<MarkedRun>, text: &str, changed: bool) {
    let escaped = escape(text);
    match runs.last_mut() {
        Some(last) if last.changed == changed => last.text.push_str(&escaped),
        _ => runs.push(MarkedRun {
            text: escaped.into_owned(),
            changed,
        }),
    }
}
