/*!
 * Preview generation for SRT files.
 *
 * Collects the first few subtitle text lines, flagged with whether they
 * contain RTL script and whether a directional marker is already in place.
 * Truncation is for display only and never feeds back into the fixer.
 */

use crate::rtl_fixer::srt::is_timestamp_line;
use crate::rtl_fixer::RLE;

/// Upper bound on physical lines inspected while building a preview
pub const PREVIEW_SCAN_LIMIT: usize = 50;

/// Display truncation length, in characters
pub const PREVIEW_TRUNCATE_CHARS: usize = 100;

/// One previewed subtitle text line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    /// Line text, truncated for display when longer than
    /// [`PREVIEW_TRUNCATE_CHARS`]
    pub text: String,
    /// Whether the line contains Hebrew or Arabic code points
    pub has_rtl: bool,
    /// Whether the line already starts with a directional marker
    pub marker_present: bool,
}

/// Collect up to `max_lines` subtitle text lines from the start of an SRT
/// file, using the same block-structure recognition as the fixer.
pub fn preview(content: &str, max_lines: usize) -> Vec<PreviewLine> {
    let mut records = Vec::new();
    let mut in_text = false;

    for (idx, raw_line) in content.split('\n').enumerate() {
        if idx >= PREVIEW_SCAN_LIMIT || records.len() >= max_lines {
            break;
        }

        let line = raw_line.trim_end_matches('\r');

        if in_text {
            if line.trim().is_empty() {
                in_text = false;
            } else {
                records.push(PreviewLine {
                    text: truncate_for_display(line),
                    has_rtl: contains_rtl(line),
                    marker_present: line.starts_with(RLE),
                });
            }
        } else if is_timestamp_line(line) {
            in_text = true;
        }
    }

    records
}

/// Whether any code point falls in the Hebrew, Arabic or Arabic Supplement
/// blocks
pub fn contains_rtl(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c,
            '\u{0590}'..='\u{05FF}' | '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}')
    })
}

/// Truncate to the display length, appending an ellipsis when shortened
fn truncate_for_display(text: &str) -> String {
    let mut chars = text.chars();
    let truncated: String = chars.by_ref().take(PREVIEW_TRUNCATE_CHARS).collect();

    if chars.next().is_some() {
        format!("{}…", truncated)
    } else {
        truncated
    }
}
