//! Input normalization: case folding and length capping

use heapless::Deque;

use crate::types::WORD_CAPACITY;

/// A case-folded, length-capped word awaiting transmission
pub type NormalizedWord = Deque<char, WORD_CAPACITY>;

/// Prepares raw caller text for transmission.
///
/// Unsupported characters are deliberately not filtered here; the
/// transmitter skips them one at a time so each skip stays observable.
pub struct Encoder {
    limit: usize,
}

impl Encoder {
    /// Create an encoder capping words at `limit` characters
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.min(WORD_CAPACITY),
        }
    }

    /// Configured character limit
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Uppercase the input and keep only the first `limit` characters.
    /// Empty input yields an empty word, which means "no transmission".
    pub fn prepare(&self, raw: &str) -> NormalizedWord {
        let mut word = NormalizedWord::new();
        for ch in raw.chars().take(self.limit) {
            // Capacity >= limit by construction
            let _ = word.push_back(ch.to_ascii_uppercase());
        }
        word
    }
}
