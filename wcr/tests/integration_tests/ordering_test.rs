// tests/integration_tests/ordering_test.rs
use super::common::create_input_file;
use anyhow::Result;
use tempfile::TempDir;
use wcr::{Separators, ordered_keys, tally_file};

#[test]
fn test_mixed_case_words_order_after_folding() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = create_input_file(&temp_dir, "input.txt", "banana Apple apple Cherry.\n")?;

    let table = tally_file(&input, &Separators::new())?;
    let keys = ordered_keys(&table);

    assert_eq!(keys, ["apple", "banana", "cherry"]);
    assert_eq!(table.get("apple"), Some(2), "Apple and apple merge");
    assert_eq!(table.get("banana"), Some(1));
    assert_eq!(table.get("cherry"), Some(1));

    Ok(())
}

#[test]
fn test_ordered_keys_are_strictly_ascending() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = create_input_file(
        &temp_dir,
        "input.txt",
        "pear fig quince date fig elderberry pear apricot.\n",
    )?;

    let table = tally_file(&input, &Separators::new())?;
    let keys = ordered_keys(&table);

    assert_eq!(keys.len(), table.len(), "One entry per table key");
    for pair in keys.windows(2) {
        assert!(
            pair[0] < pair[1],
            "Keys must be strictly ascending: {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }

    Ok(())
}
