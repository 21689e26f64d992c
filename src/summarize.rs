// The summarization pipeline — segment, count, score, select.
//
// Fixed order: sentence segmentation, document-wide frequency accumulation,
// per-sentence scoring, top-N selection, recomposition. Every structure here
// lives for a single call; the stop word list is the only shared data and it
// is read-only, so concurrent calls need no coordination.

use tracing::debug;

use crate::scoring::frequency::word_frequencies;
use crate::scoring::sentence::score_sentence;
use crate::segment;
use crate::tokenize;

/// Returned verbatim when there is no input to summarize.
pub const NO_TEXT_MESSAGE: &str = "No text provided for summarization.";

/// How many sentences a summary keeps when the caller does not say.
pub const DEFAULT_SENTENCE_COUNT: usize = 2;

/// Frequency-based extractive summarizer.
///
/// Deterministic and total: any input string produces an output string.
/// Degenerate inputs (empty text, zero or oversized counts, sentences that
/// score zero) are handled by policy branches, never by errors.
#[derive(Debug, Clone)]
pub struct Summarizer {
    /// How many sentences to keep
    pub sentence_count: usize,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self {
            sentence_count: DEFAULT_SENTENCE_COUNT,
        }
    }
}

impl Summarizer {
    /// Create a summarizer that keeps `sentence_count` sentences.
    pub fn new(sentence_count: usize) -> Self {
        Self { sentence_count }
    }

    /// Produce an extractive summary of `text`.
    ///
    /// Selected sentences come back joined by a single space, highest score
    /// first; equally-scored sentences keep their document order. Asking for
    /// more sentences than the text has returns every sentence, and asking
    /// for zero returns the empty string. Empty input returns
    /// [`NO_TEXT_MESSAGE`] instead of running the pipeline.
    pub fn summarize(&self, text: &str) -> String {
        if text.is_empty() {
            return NO_TEXT_MESSAGE.to_string();
        }

        let sentences = segment::sentences(text);
        let freq = word_frequencies(&tokenize::words(text));

        // Insertion-ordered (sentence, score) pairs. Two sentences with
        // identical text share one entry at the first occurrence's position,
        // so a repeated sentence appears at most once in the summary.
        let mut scored: Vec<(String, u32)> = Vec::with_capacity(sentences.len());
        for sentence in sentences {
            let score = score_sentence(&sentence, &freq);
            if let Some(entry) = scored.iter_mut().find(|entry| entry.0 == sentence) {
                entry.1 = score;
            } else {
                scored.push((sentence, score));
            }
        }

        debug!(
            sentences = scored.len(),
            content_words = freq.len(),
            requested = self.sentence_count,
            "Scored sentences"
        );

        select_top(scored, self.sentence_count)
    }
}

/// Convenience wrapper: summarize `text` down to `sentence_count` sentences.
pub fn summarize(text: &str, sentence_count: usize) -> String {
    Summarizer::new(sentence_count).summarize(text)
}

/// Keep the `count` highest-scoring sentences and join them with a space.
///
/// The sort is stable and descending by score, so entries with equal scores
/// stay in first-seen order.
fn select_top(mut scored: Vec<(String, u32)>, count: usize) -> String {
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    let selected: Vec<String> = scored
        .into_iter()
        .take(count)
        .map(|(sentence, _)| sentence)
        .collect();
    selected.join(" ")
}
