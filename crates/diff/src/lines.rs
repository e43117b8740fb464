use ropey::Rope;

/// Characters ropey treats as a line break on their own. `\r\n` is handled
/// separately as a single break.
const LINE_BREAKS: [char; 7] = [
    '\n', '\u{000B}', '\u{000C}', '\r', '\u{0085}', '\u{2028}', '\u{2029}',
];

/// File, group and record separators. ropey does not break on them but they
/// still end a line.
const SEPARATORS: [char; 3] = ['\u{001C}', '\u{001D}', '\u{001E}'];

/// Split a text into lines with their terminators removed.
///
/// A trailing line break does not produce an extra empty line and an empty
/// text has no lines at all.
pub fn split_lines(text: &str) -> Vec<String> {
    rope_lines(&Rope::from_str(text))
}

/// Same as [`split_lines`], for text already held in a rope.
pub fn rope_lines(rope: &Rope) -> Vec<String> {
    let mut lines: Vec<String> = rope
        .lines()
        .map(|line| strip_line_break(line.to_string()))
        .flat_map(|line| {
            line.split(SEPARATORS)
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();

    // The last break, whichever kind, is always followed by a possibly empty line
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines
}

/// Length of a line in Unicode scalar values.
pub fn line_len(line: &str) -> usize {
    line.chars().count()
}

fn strip_line_break(mut line: String) -> String {
    if line.ends_with("\r\n") {
        line.truncate(line.len() - 2);
    } else if line.ends_with(LINE_BREAKS) {
        line.pop();
    }
    line
}
