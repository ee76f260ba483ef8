use std::sync::Once;

use pretty_assertions::assert_eq;
use reader_engine::{
    requested_sentence_count, split_sentences, summarize, summarize_document, FrequencyMap,
    DEFAULT_SENTENCE_COUNT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(reader_logging::initialize_for_tests);
}

const ARTICLE: &str = "Rust is a systems programming language. \
    It focuses on memory safety without garbage collection. \
    The borrow checker enforces memory safety at compile time. \
    Many teams adopt Rust for safety and speed. \
    Cargo is the package manager. \
    Memory safety bugs are a common source of vulnerabilities in systems code.";

#[test]
fn cats_and_dogs_selects_highest_frequency_sentences() {
    init_logging();
    let text = "Cats are great. Dogs are great too. Cats and dogs are both animals. I love my cat.";
    // cats=2 great=2 dogs=2, every other content word once: scores 4, 5, 6, 4.
    assert_eq!(
        summarize(text, 2),
        "Dogs are great too. Cats and dogs are both animals."
    );
}

#[test]
fn equal_scores_fall_back_to_document_order() {
    init_logging();
    let text = "Cats are great. Dogs are great. Cats and dogs are animals. I love my cat.";
    // Scores 4, 4, 5, 4: the 5 wins, then the earliest of the tied sentences.
    assert_eq!(
        summarize(text, 2),
        "Cats are great. Cats and dogs are animals."
    );
}

#[test]
fn empty_input_yields_empty_summary() {
    init_logging();
    assert_eq!(summarize("", 3), "");
    assert_eq!(summarize("   \n\t ", 3), "");
    assert!(summarize_document("  ", 1).is_empty());
}

#[test]
fn byte_order_mark_counts_as_blank() {
    init_logging();
    assert_eq!(summarize("\u{feff}", 3), "");
    assert_eq!(summarize(" \u{feff} \n", 3), "");
    assert_eq!(
        summarize("\u{feff}Tea is hot. Tea is green.", 1),
        "Tea is hot."
    );
}

#[test]
fn request_above_sentence_count_is_clamped() {
    init_logging();
    assert_eq!(summarize("Hello world.", 5), "Hello world.");
}

#[test]
fn single_sentence_is_returned_for_any_count() {
    init_logging();
    for k in [0, 1, 2, 50] {
        assert_eq!(
            summarize("  A lonely sentence without end  ", k),
            "A lonely sentence without end"
        );
    }
}

#[test]
fn zero_and_negative_counts_select_one_sentence() {
    init_logging();
    let text = "Apples grow on trees. Apples are red apples. Bananas are yellow.";
    assert_eq!(summarize(text, 0), "Apples are red apples.");
    assert_eq!(
        summarize(text, requested_sentence_count(-4)),
        "Apples are red apples."
    );
    assert_eq!(requested_sentence_count(7), 7);
}

#[test]
fn all_stopword_document_selects_leading_sentences() {
    init_logging();
    let text = "It is that. This was the. A has had. Or not.";
    assert!(FrequencyMap::from_document(text).is_empty());
    assert_eq!(summarize(text, 2), "It is that. This was the.");
}

#[test]
fn every_sentence_returned_when_count_covers_document() {
    init_logging();
    let text = "First point here. Second point there! Third point?";
    assert_eq!(summarize(text, 3), "First point here. Second point there! Third point?");
    assert_eq!(summarize(text, 99), "First point here. Second point there! Third point?");
}

#[test]
fn cardinality_and_order_hold_across_counts() {
    init_logging();
    let total = split_sentences(ARTICLE).len();
    assert_eq!(total, 6);

    for k in 0..=8 {
        let summary = summarize_document(ARTICLE, k);
        assert_eq!(summary.len(), k.max(1).min(total), "k={k}");
        let indices: Vec<_> = summary.sentences().iter().map(|s| s.index).collect();
        assert!(
            indices.windows(2).all(|pair| pair[0] < pair[1]),
            "sentences out of order for k={k}: {indices:?}"
        );
    }
}

#[test]
fn default_count_picks_memory_safety_sentences() {
    init_logging();
    assert_eq!(DEFAULT_SENTENCE_COUNT, 3);
    assert_eq!(
        summarize(ARTICLE, DEFAULT_SENTENCE_COUNT),
        "It focuses on memory safety without garbage collection. \
         The borrow checker enforces memory safety at compile time. \
         Memory safety bugs are a common source of vulnerabilities in systems code."
    );
}

#[test]
fn repeated_calls_are_byte_identical() {
    init_logging();
    let first = summarize(ARTICLE, 2);
    for _ in 0..5 {
        assert_eq!(summarize(ARTICLE, 2), first);
    }
}

#[test]
fn swapping_stopwords_keeps_selection() {
    init_logging();
    let original = "The river is wide. A boat is on the river. Birds fly over the hills. \
                    The boat and the river are calm.";
    let swapped = "A river was wide. The boat was at a river. Birds fly over a hills. \
                   A boat or a river were calm.";
    let pick = |text: &str| -> Vec<usize> {
        summarize_document(text, 2)
            .sentences()
            .iter()
            .map(|s| s.index)
            .collect()
    };
    assert_eq!(pick(original), pick(swapped));
}

#[test]
fn symbol_only_input_does_not_fail() {
    init_logging();
    // Leading terminators belong to no sentence; each space starts a new run.
    assert_eq!(summarize("!!! ??? ...", 3), "? .");
    assert_eq!(summarize("\u{0}\u{1}\u{fffd}", 2), "\u{0}\u{1}\u{fffd}");
    assert_eq!(summarize("日本語のテキスト。", 1), "日本語のテキスト。");
}
