//! Loading, checking and summarising a pair of files
//!
//! Everything here sits outside the alignment crate: it turns files into text,
//! turns guard failures into user-facing diagnostics and diff results into a
//! console summary or a JSON document.

use anyhow::{anyhow, Context, Result};
use log::info;
use pane_diff::{split_lines, validate, AnnotatedLine, Chunk, LimitError, Limits, PaneDiff, Side};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// A file read into memory
#[derive(Debug, Clone)]
pub struct LoadedText {
    /// Name used in diagnostics
    pub name: String,
    pub text: String,
}

/// Read a UTF-8 file
pub fn load_text(path: &Path) -> Result<LoadedText> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    info!(
        "Loaded {}: {} bytes ({} lines)",
        name,
        text.len(),
        split_lines(&text).len()
    );

    Ok(LoadedText { name, text })
}

/// Run the guard on a loaded file, turning a failure into a diagnostic
pub fn check_limits(loaded: &LoadedText, limits: &Limits) -> Result<()> {
    validate(&loaded.text, limits).map_err(|err| anyhow!(describe_limit_error(&loaded.name, &err)))
}

/// User-facing explanation of a guard failure
pub fn describe_limit_error(name: &str, err: &LimitError) -> String {
    match err {
        LimitError::BinaryContent => format!(
            "{} appears to be a binary file (contains null bytes). \
             Binary files are not supported in the diff viewer.",
            name
        ),
        LimitError::LineTooLong {
            line_number,
            length,
            max,
        } => format!(
            "{} line {} exceeds {} characters ({} chars). \
             Files with very long lines are not supported.",
            name, line_number, max, length
        ),
    }
}

/// Everything a viewer needs to draw both panes
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub chunk_count: usize,
    pub chunks: &'a [Chunk],
    pub left: Vec<AnnotatedLine>,
    pub right: Vec<AnnotatedLine>,
}

impl<'a> Report<'a> {
    pub fn new(diff: &'a PaneDiff) -> Self {
        Self {
            chunk_count: diff.chunk_count(),
            chunks: diff.chunks(),
            left: diff.project(Side::A),
            right: diff.project(Side::B),
        }
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize report")?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

/// One row per chunk for the first `limit` chunks
pub fn chunk_summary(chunks: &[Chunk], limit: usize) -> String {
    let mut out = String::new();
    for chunk in chunks.iter().take(limit) {
        out.push_str(&format!(
            "  {:8} | Left: {:3}-{:3} | Right: {:3}-{:3}\n",
            chunk.tag.to_string(),
            chunk.start_a,
            chunk.end_a,
            chunk.start_b,
            chunk.end_b
        ));
    }
    if chunks.len() > limit {
        out.push_str(&format!("  ... and {} more chunks\n", chunks.len() - limit));
    }
    out
}
