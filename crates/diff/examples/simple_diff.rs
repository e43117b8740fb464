use anyhow::Result;
use pane_diff::{DiffTag, Side, TextDiff};

fn main() -> Result<()> {
    // Two sample texts to compare
    let text1 = "This is the first line.\nHere is the second line.\nAnd the third line.";
    let text2 = "This is the first line.\nThis is a completely different second line.\nAnd the third line.\nPlus a new fourth line.";

    let diff = TextDiff::diff(text1, text2)?;
    let snapshot = diff.snapshot();

    // Print diff statistics
    println!("Diff statistics:");
    println!("  Total chunks: {}", snapshot.chunk_count());
    println!("  Inserted lines: {}", snapshot.inserted_lines());
    println!("  Deleted lines: {}", snapshot.deleted_lines());
    println!("  Replaced lines (left): {}", snapshot.replaced_lines(Side::A));

    println!("\nChunks:");
    for chunk in snapshot.chunks() {
        println!(
            "  {:8} | Left: {:3}-{:3} | Right: {:3}-{:3}",
            chunk.tag.to_string(), chunk.start_a, chunk.end_a, chunk.start_b, chunk.end_b
        );
    }

    // Print both panes with color-coded classifications
    for side in [Side::A, Side::B] {
        println!("\n{} pane:", side);
        for line in diff.project(side) {
            let color = match line.tag {
                Some(DiffTag::Insert) => "\x1b[32m",
                Some(DiffTag::Delete) => "\x1b[31m",
                Some(DiffTag::Replace) => "\x1b[33m",
                Some(DiffTag::Equal) | None => "\x1b[37m",
            };
            println!("  {}{:3} {}\x1b[0m", color, line.index + 1, line.content.to_html());
        }
    }

    Ok(())
}
