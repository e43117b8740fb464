use pane_diff::{DiffTag, PaneDiff, Side, TextDiff};
use pretty_assertions::assert_eq;

#[test]
fn test_no_changes() {
    // Identical texts should have no chunks
    let chunks = TextDiff::chunks("line1\nline2\nline3", "line1\nline2\nline3");
    assert_eq!(chunks.len(), 0);
}

#[test]
fn test_insert() {
    let chunks = TextDiff::chunks("line1\nline3", "line1\nline2\nline3");

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].tag, DiffTag::Insert);
    assert_eq!(chunks[0].start_b, 1);
    assert_eq!(chunks[0].end_b, 2);
    // The insertion point on the left
    assert_eq!(chunks[0].start_a, 1);
    assert_eq!(chunks[0].end_a, 1);
}

#[test]
fn test_delete() {
    let chunks = TextDiff::chunks("line1\nline2\nline3", "line1\nline3");

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].tag, DiffTag::Delete);
    assert_eq!(chunks[0].start_a, 1);
    assert_eq!(chunks[0].end_a, 2);
}

#[test]
fn test_replace() {
    let chunks = TextDiff::chunks("line1\nold line\nline3", "line1\nnew line\nline3");

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].tag, DiffTag::Replace);
}

#[test]
fn test_multiple_changes() {
    let chunks = TextDiff::chunks("A\nB\nC\nD", "A\nX\nC\nY\nZ");

    assert!(chunks.len() > 1, "Should detect multiple changes");
    assert_eq!(
        chunks.iter().map(|c| c.id).collect::<Vec<_>>(),
        (0..chunks.len()).collect::<Vec<_>>()
    );
}

#[test]
fn test_added_file() {
    let chunks = TextDiff::chunks("", "Line 1\nLine 2\n");

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].tag, DiffTag::Insert);
    assert_eq!(chunks[0].range(Side::B), 0..2);
}

#[test]
fn test_deleted_file() {
    let chunks = TextDiff::chunks("Line 1\nLine 2\n", "");

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].tag, DiffTag::Delete);
    assert_eq!(chunks[0].range(Side::A), 0..2);
}

#[test]
fn test_both_empty() {
    let diff = PaneDiff::new("", "").unwrap();
    assert_eq!(diff.chunk_count(), 0);
    assert!(diff.project(Side::A).is_empty());
    assert!(diff.project(Side::B).is_empty());
}

#[test]
fn test_projection_marks_inline_changes() {
    let diff = PaneDiff::new("line1\nhello\nline3", "line1\nhallo\nline3").unwrap();

    let left = diff.project(Side::A);
    let right = diff.project(Side::B);

    assert_eq!(left.len(), 3);
    assert_eq!(right.len(), 3);
    assert_eq!(left[0].tag, None);
    assert_eq!(left[1].tag, Some(DiffTag::Replace));
    assert_eq!(left[1].content.to_html(), "h<span class=\"inline-diff\">e</span>llo");
    assert_eq!(right[1].content.to_html(), "h<span class=\"inline-diff\">a</span>llo");
    assert_eq!(left[2].content.to_html(), "line3");
}

#[test]
fn test_chunk_lookup() {
    let diff = PaneDiff::new("a\nb\nc", "a\nc").unwrap();

    assert_eq!(diff.chunk_count(), 1);
    assert_eq!(diff.chunk(0).map(|c| c.tag), Some(DiffTag::Delete));
    assert!(diff.chunk(1).is_none());
    assert_eq!(diff.lines(Side::B), &["a".to_string(), "c".to_string()]);
    assert_eq!(diff.text(Side::A).len_lines(), 3);
}
