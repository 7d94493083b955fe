// src/core/separators.rs
use std::collections::HashSet;

/// Punctuation characters that terminate a word.
const PUNCTUATION: &str = ".,!?:;-";

/// The fixed alphabet of characters that delimit words.
///
/// Holds the punctuation separators plus carriage-return, line-feed, null and
/// space. Built once at startup and never mutated afterwards.
#[derive(Debug)]
pub struct Separators {
    chars: HashSet<char>,
}

impl Separators {
    /// Builds the full separator alphabet.
    #[must_use]
    pub fn new() -> Self {
        let mut chars: HashSet<char> = PUNCTUATION.chars().collect();
        chars.insert('\r');
        chars.insert('\n');
        chars.insert('\0');
        chars.insert(' ');
        Self { chars }
    }

    /// Returns true if `c` terminates a word.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Number of distinct separator characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::new()
    }
}
