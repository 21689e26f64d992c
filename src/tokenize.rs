// Word tokenization — lowercased alphanumeric runs.
//
// A word is a maximal run of ASCII alphanumerics and underscores. The input
// is case-folded before matching, so tokens come out lowercase and the same
// input always yields the same sequence.

use std::sync::OnceLock;

use regex_lite::Regex;

static WORD_RE: OnceLock<Regex> = OnceLock::new();

fn word_re() -> &'static Regex {
    WORD_RE.get_or_init(|| Regex::new(r"\w+").expect("word pattern compiles"))
}

/// Tokenize a document or a single sentence into lowercase words.
///
/// Punctuation, whitespace, and every other non-word character is a
/// separator and never appears in the output.
pub fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_re()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
