// Colored terminal output for summaries.
//
// All terminal-specific formatting lives here; main.rs delegates.

use colored::Colorize;

use crate::summarize::NO_TEXT_MESSAGE;

use super::preview_line;

/// Display a summary with a small header describing what was requested.
pub fn display_summary(source: &str, summary: &str, requested: usize) {
    println!(
        "\n{}",
        format!("=== Summary ({requested} sentences requested) ===").bold()
    );
    println!("  Input: {}", preview_line(source, 72).dimmed());
    println!();

    if summary == NO_TEXT_MESSAGE {
        println!("  {}", summary.yellow());
    } else if summary.is_empty() {
        println!("  {}", "(no sentences selected)".dimmed());
    } else {
        println!("  {summary}");
    }
    println!();
}
