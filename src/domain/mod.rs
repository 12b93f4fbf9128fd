// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits that describe what the
// converter works with: paper records read from YAML and
// the rows that end up in the CSV table.
//
// Rules for this layer:
//   - NO file I/O
//   - NO CSV or YAML writer types
//   - Only plain structs, enums, traits and pure functions
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Paper records decoded from the master and auxiliary documents
pub mod paper;

// Output rows for the two CSV layouts
pub mod row;

// Seams the application layer programs against
pub mod traits;
