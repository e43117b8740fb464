use pane_diff::{highlight, DiffTag, EditOp, MarkedText, TextDiff};

fn has_tag(ops: &[EditOp], tag: DiffTag) -> bool {
    ops.iter().any(|op| op.tag() == tag)
}

#[test]
fn test_no_change() {
    let ops = TextDiff::inline("hello", "hello");
    assert_eq!(ops, vec![EditOp::Equal { a: 0..5, b: 0..5 }]);
}

#[test]
fn test_character_replacement() {
    assert!(has_tag(&TextDiff::inline("hello", "hallo"), DiffTag::Replace));
}

#[test]
fn test_character_insertion() {
    assert!(has_tag(&TextDiff::inline("hello", "helllo"), DiffTag::Insert));
}

#[test]
fn test_character_deletion() {
    assert!(has_tag(&TextDiff::inline("hello", "helo"), DiffTag::Delete));
}

#[test]
fn test_format_unchanged_line() {
    let html = highlight("test", "test", true, 20 * 1024).to_html();
    assert!(html.contains("test"));
    assert!(!html.contains("<span class=\"inline-diff\">"));
}

#[test]
fn test_format_changed_line() {
    let html = highlight("hello", "hallo", true, 20 * 1024).to_html();
    assert!(html.contains("<span class=\"inline-diff\">"));
}

#[test]
fn test_format_empty_line() {
    let text = highlight("", "", false, 20 * 1024);
    assert_eq!(text, MarkedText::Blank);
    assert_eq!(text.to_html(), "&nbsp;");
}

#[test]
fn test_html_escaping() {
    let html = highlight("<script>", "<script>", false, 20 * 1024).to_html();
    assert!(html.contains("&lt;"));
    assert!(html.contains("&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_changed_text_is_escaped_inside_marker() {
    let text = highlight("x & y", "x | y", true, 20 * 1024);
    assert_eq!(text.plain(), "x &amp; y");
    insta::assert_snapshot!(text.to_html(), @r###"x <span class="inline-diff">&amp;</span> y"###);
}

#[test]
fn test_long_pair_falls_back_to_plain() {
    let line = "a".repeat(11 * 1024);
    let paired = "b".repeat(10 * 1024);
    let text = highlight(&line, &paired, true, 20 * 1024);

    assert!(!text.has_changes());
    assert_eq!(text.plain(), line);
}

#[test]
fn test_unicode_is_split_on_chars() {
    let text = highlight("Line 3 😊", "Line 3 🎉", true, 20 * 1024);
    assert_eq!(text.to_html(), "Line 3 <span class=\"inline-diff\">😊</span>");
}
