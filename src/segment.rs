// Sentence segmentation — splitting a document into terminator-delimited
// sentences.
//
// A sentence is a maximal run of non-terminator characters followed by
// exactly one terminator, with the terminator kept as part of the sentence.
// Text after the last terminator is not a sentence and is never emitted.

use std::sync::OnceLock;

use regex_lite::Regex;

static SENTENCE_RE: OnceLock<Regex> = OnceLock::new();

fn sentence_re() -> &'static Regex {
    SENTENCE_RE.get_or_init(|| Regex::new(r"[^.!?]+[.!?]").expect("sentence pattern compiles"))
}

/// Split a document into sentences, in document order.
///
/// Each sentence keeps its terminator. Leading whitespace between sentences
/// is stripped, so a sentence repeated later in the document compares equal
/// to its first occurrence no matter how the two were separated. A terminator
/// with no content before it does not produce a sentence, and text with no
/// terminator at all produces no sentences.
pub fn sentences(text: &str) -> Vec<String> {
    sentence_re()
        .find_iter(text)
        .map(|m| m.as_str().trim_start().to_string())
        .collect()
}
