use std::collections::HashMap;

use crate::token::content_tokens;

/// Occurrence counts of content words across a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, u32>,
}

impl FrequencyMap {
    pub fn from_document(text: &str) -> Self {
        let mut counts = HashMap::new();
        for token in content_tokens(text) {
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Zero for tokens that never occurred.
    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of the counts of every content token in `text`.
    pub fn score(&self, text: &str) -> u64 {
        content_tokens(text)
            .map(|token| u64::from(self.count(&token)))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
