/// Fixed set of English function words ignored by the frequency model.
pub const STOPWORDS: &[&str] = &[
    "the", "and", "is", "in", "it", "of", "to", "a", "that", "this", "for", "on", "with", "as",
    "are", "was", "were", "be", "by", "or", "an", "from", "at", "which", "but", "not", "have",
    "has", "had",
];

/// Expects an already lowercased token.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}
