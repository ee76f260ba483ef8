//! Reader engine: extractive summarization and page text handling.
mod decode;
mod frequency;
mod page;
mod select;
mod sentence;
mod stopwords;
mod summarize;
mod token;

pub use decode::{decode_page, DecodeError, DecodedPage};
pub use frequency::FrequencyMap;
pub use page::{extract_page_text, looks_like_html, truncate_chars, READ_LIMIT_CHARS};
pub use select::{score_sentences, select_sentences, ScoredSentence};
pub use sentence::{split_sentences, Sentence};
pub use stopwords::{is_stopword, STOPWORDS};
pub use summarize::{
    requested_sentence_count, summarize, summarize_document, Summary, DEFAULT_SENTENCE_COUNT,
};
pub use token::{content_tokens, tokenize};
