// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::count::tally_file;
use crate::core::order::ordered_keys;
use crate::core::report::write_report;
use crate::core::separators::Separators;
use crate::models::TallySummary;
use crate::utils::prompt_path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input text file (prompted for when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path for the generated HTML report (prompted for when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Runs the full counting pipeline for the given arguments.
///
/// Resolves the two file paths (prompting for any that were not supplied),
/// counts the words of the input, and writes the HTML report, ordered
/// ascending by word, to the output path.
///
/// # Errors
///
/// This function may return an error if:
/// * A path must be prompted for and standard input is closed
/// * The input file cannot be opened or read
/// * The output file cannot be created or written
pub fn run(args: Args) -> Result<()> {
    let input = match args.input {
        Some(path) => path,
        None => prompt_path("Enter the path to the input file: ")?,
    };
    let output = match args.output {
        Some(path) => path,
        None => prompt_path("Enter the path for the output file: ")?,
    };

    let separators = Separators::new();
    let table = tally_file(&input, &separators)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let keys = ordered_keys(&table);
    write_report(&output, &table, &keys)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    let summary = TallySummary::from_table(&table);
    println!("The file has been created successfully");
    println!("Distinct words: {}", summary.distinct_words);
    println!("Total words: {}", summary.total_words);

    Ok(())
}
