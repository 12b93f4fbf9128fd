// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the YAML files on disk and the rows
// handed to the CSV writer:
//
//   master.yaml ─┐
//   qualified  ──┼──► loader ──► merger ──► sorted rows
//   disqualified ┘
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads master and auxiliary YAML documents
pub mod loader;

/// Builds, joins and sorts the output rows
pub mod merger;
