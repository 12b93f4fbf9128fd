// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer only talks to these traits:
//   - MasterLoader / AuxiliaryLoader implement PaperSource
//   - CsvTableWriter implements RowSink
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::row::CsvRow;

// ─── PaperSource ──────────────────────────────────────────────────────────────
/// Anything that can produce the paper records of one document.
pub trait PaperSource {
    /// The record type this source yields
    type Record;

    /// Load every record from this source, in document order.
    fn load_all(&self) -> Result<Vec<Self::Record>>;
}

// ─── RowSink ──────────────────────────────────────────────────────────────────
/// Anything that can persist a finished table.
pub trait RowSink {
    /// Write the header followed by every row, in the given order.
    /// Returns the number of data rows written.
    fn write_rows<R: CsvRow>(&self, rows: &[R]) -> Result<usize>;
}
