/*!
 * Directionality fixing for right-to-left subtitle text.
 *
 * Players that lay out dialogue left-to-right by default interleave RTL text
 * (Hebrew, Arabic) incorrectly with formatting codes and line breaks. The
 * fixers in this module wrap subtitle text segments with the Unicode
 * RIGHT-TO-LEFT EMBEDDING marker so compliant renderers display them in the
 * intended order.
 *
 * # Architecture
 *
 * - `ass`: per-line rewrite of `Dialogue:` event text fields
 * - `srt`: stateful block scan wrapping every subtitle text line
 *
 * Both fixers are idempotent: existing markers are stripped before new ones
 * are inserted, so re-running a fixer on already-fixed content is a no-op.
 */

pub mod ass;
pub mod srt;

use crate::file_utils::SubtitleFormat;

// Re-export main entry points
pub use ass::fix_ass;
pub use srt::fix_srt;

/// The RIGHT-TO-LEFT EMBEDDING marker (U+202B)
pub const RLE: char = '\u{202B}';

/// Fix subtitle content according to its recognized format.
///
/// Unknown formats are returned unchanged - pass-through is deliberate, not
/// an error.
pub fn fix_content(format: SubtitleFormat, text: &str) -> String {
    match format {
        SubtitleFormat::Ass => ass::fix_ass(text),
        SubtitleFormat::Srt => srt::fix_srt(text),
        SubtitleFormat::Unknown => text.to_string(),
    }
}

/// Remove every directional marker from a text segment
pub(crate) fn strip_markers(text: &str) -> String {
    text.replace(RLE, "")
}
