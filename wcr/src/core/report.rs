// src/core/report.rs
use anyhow::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::models::FrequencyTable;

/// Renders the report for `table` to `out`, one row per key in `keys`.
///
/// The document layout is fixed: a "Words Counted" title and heading, a rule,
/// and a two-column table with one row per word. Each tag is written on its
/// own line; the final `</html>` carries no trailing newline. Words are
/// written verbatim — markup characters in a word are not escaped and will
/// corrupt the output, a known limitation kept for output compatibility.
/// Rendering the same table and key sequence twice produces byte-identical
/// output.
///
/// # Errors
///
/// This function may return an error if the sink rejects a write.
pub fn render_report<W: Write>(
    out: &mut W,
    table: &FrequencyTable,
    keys: &[String],
) -> io::Result<()> {
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<title>Words Counted</title>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2>Words Counted</h2>")?;
    writeln!(out, "<hr>")?;
    writeln!(out, "<table border='1'>")?;
    writeln!(out, "<tbody>")?;
    writeln!(out, "<tr>")?;
    writeln!(out, "<th>Words</th>")?;
    writeln!(out, "<th>Counts</th>")?;
    writeln!(out, "</tr>")?;

    for key in keys {
        let count = table.get(key).unwrap_or(0);
        writeln!(out, "<tr>")?;
        writeln!(out, "<td>{key}</td>")?;
        writeln!(out, "<td>{count}</td>")?;
        writeln!(out, "</tr>")?;
    }

    writeln!(out, "</body>")?;
    write!(out, "</html>")?;
    Ok(())
}

/// Writes the rendered report to the file at `path`, overwriting any
/// existing content.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be created
/// * The document cannot be written or flushed
pub fn write_report(path: &Path, table: &FrequencyTable, keys: &[String]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    render_report(&mut writer, table, keys)?;
    writer.flush()?;
    Ok(())
}
