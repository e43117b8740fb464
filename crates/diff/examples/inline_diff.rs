use pane_diff::{highlight, TextDiff, DEFAULT_MAX_INLINE_COMBINED_LENGTH};

fn main() {
    let pairs = [
        ("hello", "hallo"),
        ("hello", "helllo"),
        ("hello", "helo"),
        ("        sum += items[i].price;", "        sum += items[i].price * items[i].quantity;"),
    ];

    for (left, right) in pairs {
        println!("=== {:?} vs {:?} ===", left, right);
        for op in TextDiff::inline(left, right) {
            println!("  {:8} a{:?} b{:?}", op.tag().to_string(), op.a_range(), op.b_range());
        }
        println!(
            "  left:  {}",
            highlight(left, right, true, DEFAULT_MAX_INLINE_COMBINED_LENGTH).to_html()
        );
        println!(
            "  right: {}",
            highlight(right, left, true, DEFAULT_MAX_INLINE_COMBINED_LENGTH).to_html()
        );
    }
}
