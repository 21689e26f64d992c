// Unit tests for scoring functions.
//
// Tests isolated pure functions: frequency table invariants and sentence
// score edge cases (missing keys, stop words, in-sentence repetition).

use gist::scoring::frequency::word_frequencies;
use gist::scoring::sentence::score_sentence;
use gist::tokenize::words;

// ============================================================
// word_frequencies — table invariants
// ============================================================

#[test]
fn empty_input_builds_an_empty_table() {
    assert!(word_frequencies(&[]).is_empty());
    assert!(word_frequencies(&words("")).is_empty());
}

#[test]
fn all_counts_are_positive() {
    let freq = word_frequencies(&words("a cat, the cat, one dog."));
    for (word, count) in &freq {
        assert!(*count >= 1, "'{word}' has count {count}");
    }
}

#[test]
fn no_key_is_a_stop_word() {
    let freq = word_frequencies(&words(
        "The cat is in the hat and on the mat with a bat.",
    ));
    for stop in gist::stopwords::STOP_WORDS {
        assert!(!freq.contains_key(stop), "'{stop}' leaked into the table");
    }
    assert_eq!(freq["cat"], 1);
    assert_eq!(freq["hat"], 1);
}

#[test]
fn table_covers_text_outside_any_sentence() {
    // "dogs" appears once inside a sentence and once in a trailing fragment
    let freq = word_frequencies(&words("Dogs bark. dogs"));
    assert_eq!(freq["dogs"], 2);
}

// ============================================================
// score_sentence — edge cases
// ============================================================

#[test]
fn empty_table_scores_everything_zero() {
    let freq = word_frequencies(&[]);
    assert_eq!(score_sentence("Anything at all.", &freq), 0);
}

#[test]
fn repeated_word_in_a_sentence_counts_each_occurrence() {
    let freq = word_frequencies(&words("apple apple apple."));
    assert_eq!(score_sentence("apple apple.", &freq), 6);
}

#[test]
fn stop_words_are_iterated_but_add_nothing() {
    let freq = word_frequencies(&words("The cat sat."));
    // the(0) + cat(1) + sat(1)
    assert_eq!(score_sentence("The cat sat.", &freq), 2);
}

#[test]
fn scoring_is_case_insensitive() {
    let freq = word_frequencies(&words("storm storm surge."));
    assert_eq!(score_sentence("STORM Surge.", &freq), 3);
}

#[test]
fn scoring_has_no_side_effects_on_the_table() {
    let freq = word_frequencies(&words("wind wind rain."));
    let before = freq.clone();
    let _ = score_sentence("Wind rain wind.", &freq);
    assert_eq!(freq, before);
}
