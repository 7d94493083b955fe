// src/core/tokenize.rs
use crate::core::separators::Separators;

/// Splits a single line into lower-cased word tokens.
///
/// Scans left to right, buffering characters until a separator is hit; each
/// completed buffer is lower-cased and emitted. A separator with nothing
/// buffered is skipped. A word still buffered at end-of-line is discarded:
/// line terminators are stripped by the line reader before tokenizing, so the
/// last word on a line only counts when the line ends with a separator
/// character.
#[must_use]
pub fn tokenize_line(line: &str, separators: &Separators) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for c in line.chars() {
        if separators.contains(c) {
            if !word.is_empty() {
                tokens.push(word.to_lowercase());
                word.clear();
            }
        } else {
            word.push(c);
        }
    }

    tokens
}
