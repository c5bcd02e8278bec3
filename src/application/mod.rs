// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (a worksheet, a preview, or a reprinted key).
//
// Rules for this layer:
//   - No blanking logic here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct docx or JSON handling (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Load → blank → write worksheet, answers and report
pub mod generate_use_case;

// Load → blank → plain text, nothing written
pub mod preview_use_case;

// Reload a saved answer file
pub mod answers_use_case;
