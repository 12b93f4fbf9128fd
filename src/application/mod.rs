// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the data and infrastructure layers to turn
// the input documents into one CSV table.
//
// Rules for this layer:
//   - No printing (that's Layer 1)
//   - No YAML or CSV details (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The YAML → CSV conversion workflow
pub mod convert_use_case;
