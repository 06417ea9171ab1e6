/*!
 * # rtlfix - RTL Subtitle Direction Fixer
 *
 * A Rust library for repairing right-to-left rendering of subtitle files.
 *
 * ## Features
 *
 * - Insert Unicode RIGHT-TO-LEFT EMBEDDING markers into ASS and SRT files
 * - Idempotent fixing - already-fixed files pass through unchanged
 * - Ordered encoding fallback chain (UTF-8, UTF-16, windows-1252)
 * - Advisory structural validation for SRT files
 * - Preview of subtitle text lines with RTL / marker flags
 * - Batch processing with per-file failure isolation
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `encoding`: Encoding detection and the decode fallback chain
 * - `rtl_fixer`: Directionality fixing:
 *   - `rtl_fixer::ass`: ASS `Dialogue:` event rewriting
 *   - `rtl_fixer::srt`: SRT block-structured text wrapping
 * - `validation`: SRT structural checks and previews
 * - `file_utils`: File system operations and format classification
 * - `app_controller`: Batch orchestration and per-file reporting
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod encoding;
pub mod errors;
pub mod file_utils;
pub mod rtl_fixer;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{BatchReport, Controller, FileReport, FileStatus, FixedFile};
pub use encoding::{resolve, resolve_with, Decoded, ResolveOptions};
pub use errors::{AppError, DecodeError};
pub use file_utils::{FileManager, SubtitleFormat};
pub use rtl_fixer::{fix_ass, fix_content, fix_srt, RLE};
pub use validation::{preview, validate, PreviewLine, ValidationIssue};
