use crate::frequency::FrequencyMap;
use crate::sentence::Sentence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredSentence<'a> {
    pub index: usize,
    pub score: u64,
    pub text: &'a str,
}

/// Score every sentence by the summed document frequency of its content words.
pub fn score_sentences<'a>(
    sentences: &[Sentence<'a>],
    frequencies: &FrequencyMap,
) -> Vec<ScoredSentence<'a>> {
    sentences
        .iter()
        .map(|sentence| ScoredSentence {
            index: sentence.index,
            score: frequencies.score(sentence.text),
            text: sentence.text,
        })
        .collect()
}

/// Keep the `requested` best sentences, returned in document order.
///
/// `requested` is clamped to `1..=scored.len()`. Ties keep their input order,
/// so callers must pass sentences in document order.
pub fn select_sentences(
    mut scored: Vec<ScoredSentence<'_>>,
    requested: usize,
) -> Vec<ScoredSentence<'_>> {
    let keep = requested.max(1).min(scored.len());
    // `sort_by` is stable.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(keep);
    scored.sort_by_key(|sentence| sentence.index);
    scored
}
