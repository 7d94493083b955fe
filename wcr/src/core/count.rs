// src/core/count.rs
use anyhow::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::separators::Separators;
use crate::core::tokenize::tokenize_line;
use crate::models::FrequencyTable;

/// Counts word occurrences across every line produced by `reader`.
///
/// Line terminators are stripped by the reader, so a word at the very end of
/// a line is only counted when the line ends with a separator character.
///
/// # Arguments
///
/// * `reader` - The line-oriented input source
/// * `separators` - The separator alphabet splitting words
///
/// # Returns
///
/// * `Ok(FrequencyTable)` - The occurrence count of every distinct word
///
/// # Errors
///
/// This function may return an error if:
/// * A line cannot be read from the source
/// * The input is not valid UTF-8 text
pub fn tally_reader<R: BufRead>(reader: R, separators: &Separators) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();

    for line in reader.lines() {
        let line = line?;
        for word in tokenize_line(&line, separators) {
            table.record(word);
        }
    }

    Ok(table)
}

/// Counts word occurrences in the file at `path`.
///
/// # Arguments
///
/// * `path` - The input file to read sequentially to end-of-stream
/// * `separators` - The separator alphabet splitting words
///
/// # Returns
///
/// * `Ok(FrequencyTable)` - The occurrence count of every distinct word
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened
/// * The file cannot be read as UTF-8 text
pub fn tally_file(path: &Path, separators: &Separators) -> Result<FrequencyTable> {
    let file = File::open(path)?;
    tally_reader(BufReader::new(file), separators)
}
