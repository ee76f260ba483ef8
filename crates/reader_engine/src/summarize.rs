use std::fmt;

use reader_logging::{reader_debug, reader_trace};

use crate::frequency::FrequencyMap;
use crate::select::{score_sentences, select_sentences, ScoredSentence};
use crate::sentence::{split_sentences, trim_text};

pub const DEFAULT_SENTENCE_COUNT: usize = 3;

/// Sentences picked from a document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary<'a> {
    sentences: Vec<ScoredSentence<'a>>,
}

impl<'a> Summary<'a> {
    pub fn sentences(&self) -> &[ScoredSentence<'a>] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Sentence texts joined by a single space.
impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, sentence) in self.sentences.iter().enumerate() {
            if position > 0 {
                f.write_str(" ")?;
            }
            f.write_str(sentence.text)?;
        }
        Ok(())
    }
}

/// Select up to `sentence_count` representative sentences from `text`.
///
/// Blank input, including input that is only a byte order mark and
/// whitespace, yields an empty summary. A count of zero is treated as one and
/// a count above the number of sentences returns every sentence.
pub fn summarize_document(text: &str, sentence_count: usize) -> Summary<'_> {
    if trim_text(text).is_empty() {
        return Summary::default();
    }

    let sentences = split_sentences(text);
    let frequencies = FrequencyMap::from_document(text);
    let scored = score_sentences(&sentences, &frequencies);
    let selected = select_sentences(scored, sentence_count);
    reader_debug!(
        "summarize: sentences={} content_words={} requested={} selected={}",
        sentences.len(),
        frequencies.len(),
        sentence_count,
        selected.len()
    );
    for sentence in &selected {
        reader_trace!("selected index={} score={}", sentence.index, sentence.score);
    }

    Summary {
        sentences: selected,
    }
}

/// Summary text of `text`; empty when there is nothing to summarize.
pub fn summarize(text: &str, sentence_count: usize) -> String {
    summarize_document(text, sentence_count).to_string()
}

/// Convert a caller supplied signed count. Negative values map to zero, which
/// selection later raises to one.
pub fn requested_sentence_count(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}
