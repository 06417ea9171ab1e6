/*!
 * Structural validation and preview generation for SRT files.
 *
 * Nothing here gates the fixer: validation produces advisory diagnostics
 * that are reported alongside a still-produced output, and the previewer
 * feeds an interactive peek at the first few subtitle lines.
 *
 * # Architecture
 *
 * - `structure`: non-fatal sanity checks over SRT block structure
 * - `preview`: truncated text-line records with RTL / marker flags
 */

pub mod preview;
pub mod structure;

// Re-export main types
pub use preview::{preview, PreviewLine};
pub use structure::{validate, ValidationIssue};
