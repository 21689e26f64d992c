// Per-sentence scores — the sum of document-level frequencies for every
// word in the sentence.

use std::collections::HashMap;

use crate::tokenize;

/// Score a sentence against the document's frequency table.
///
/// Every word of the sentence is looked up, stop words included; a word
/// absent from the table (any stop word, or a word the document never uses
/// as a content word) contributes zero. A sentence made of nothing but stop
/// words therefore scores zero.
pub fn score_sentence(sentence: &str, freq: &HashMap<String, u32>) -> u32 {
    tokenize::words(sentence)
        .iter()
        .map(|word| freq.get(word).copied().unwrap_or(0))
        .sum()
}
