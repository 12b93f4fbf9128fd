// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
//   csv_writer.rs — writes the finished table to disk with
//                   the csv crate (header + rows, CRLF)
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// CSV output file writer
pub mod csv_writer;
