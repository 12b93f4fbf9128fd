// ============================================================
// Layer 6 — CSV Table Writer
// ============================================================
// Writes a finished table with the `csv` crate.
//
// Output format:
//   - UTF-8, comma delimited
//   - fields quoted only when they need it
//   - records terminated by \r\n
//   - header row always present, even for an empty table
//
// Example output (full merge mode):
//   title,url,evaluation_prompt,related_work_prompt,novelty_prompt,review_only_prompt
//   foo bar,http://x,E,,,
//   "Graphs, Again",NOT FOUND,,,,
//
// The file is created (or truncated) up front and written in
// one pass. A failure part-way leaves a partial file behind.
//
// Reference: csv crate documentation (WriterBuilder, serialize)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::path::PathBuf;

use crate::domain::row::CsvRow;
use crate::domain::traits::RowSink;

/// Writes rows to a CSV file at a fixed path.
pub struct CsvTableWriter {
    path: PathBuf,
}

impl CsvTableWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowSink for CsvTableWriter {
    fn write_rows<R: CsvRow>(&self, rows: &[R]) -> Result<usize> {
        // Headers are written by hand so an empty table still gets one
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::CRLF)
            .from_path(&self.path)
            .with_context(|| format!("Cannot create '{}'", self.path.display()))?;

        writer
            .write_record(R::HEADER)
            .with_context(|| format!("Cannot write header to '{}'", self.path.display()))?;

        for (i, row) in rows.iter().enumerate() {
            writer
                .serialize(row)
                .with_context(|| format!("Cannot write row {} to '{}'", i + 1, self.path.display()))?;
        }

        writer
            .flush()
            .with_context(|| format!("Cannot flush '{}'", self.path.display()))?;

        tracing::debug!("Wrote {} rows to '{}'", rows.len(), self.path.display());
        Ok(rows.len())
    }
}
