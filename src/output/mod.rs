// Output formatting — terminal display and the JSON record shape.

pub mod terminal;

use serde::Serialize;

/// The machine-readable result for `--json` mode.
#[derive(Debug, Serialize)]
pub struct SummaryRecord<'a> {
    pub summary: &'a str,
}

/// Flatten text to a single preview line of at most `max_chars` characters,
/// appending "..." if shortened.
///
/// Runs of whitespace (including newlines) collapse to single spaces, and
/// truncation happens on character boundaries so multi-byte input never
/// panics.
pub fn preview_line(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        flat
    } else {
        let mut cut: String = flat.chars().take(max_chars).collect();
        cut.push_str("...");
        cut
    }
}
