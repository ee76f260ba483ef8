use crate::stopwords::is_stopword;

/// Lowercase word tokens with punctuation stripped.
///
/// Anything that is not an ASCII lowercase letter, an ASCII digit or
/// whitespace becomes a separator. Non-ASCII letters are therefore dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    normalized.split_whitespace().map(ToOwned::to_owned).collect()
}

/// Tokens of `text` that are not stopwords.
pub fn content_tokens(text: &str) -> impl Iterator<Item = String> {
    tokenize(text).into_iter().filter(|token| !is_stopword(token))
}
