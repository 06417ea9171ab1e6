/*!
 * Directionality fixing for SubRip (.srt) files.
 *
 * An SRT file is a sequence of blocks: an index line, a timestamp line, one
 * or more text lines and a blank separator. The fixer is a single forward
 * scan over physical lines driven by a two-state machine - no lookahead and
 * no need to parse the index numbers at all.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::{strip_markers, RLE};

/// Strict SRT timestamp line: `HH:MM:SS,mmm --> HH:MM:SS,mmm`
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2},\d{3} --> \d{2}:\d{2}:\d{2},\d{3}\s*$")
        .expect("Invalid SRT timestamp regex")
});

/// Scanner state while walking an SRT file line by line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    /// Between blocks: index lines and stray content pass through
    Idle,
    /// Inside the text lines of a block, entered after a timestamp line
    InText,
}

/// Check whether a line is an SRT timestamp line (CR ending tolerated)
pub fn is_timestamp_line(line: &str) -> bool {
    TIMESTAMP_REGEX.is_match(line.trim_end_matches('\r'))
}

/// Fix every subtitle text line of an SRT file.
///
/// Text-line membership is structural: a line belongs to a block's text when
/// it directly follows a matched timestamp line and the first blank line ends
/// the block. Index lines, timestamp lines and separators are emitted
/// unchanged.
pub fn fix_srt(content: &str) -> String {
    let mut state = BlockState::Idle;
    let mut output = Vec::new();

    for line in content.split('\n') {
        match state {
            BlockState::Idle => {
                if is_timestamp_line(line) {
                    state = BlockState::InText;
                }
                output.push(line.to_string());
            }
            BlockState::InText => {
                if line.trim().is_empty() {
                    state = BlockState::Idle;
                    output.push(line.to_string());
                } else {
                    output.push(wrap_text_line(line));
                }
            }
        }
    }

    output.join("\n")
}

/// Strip existing markers from a text line and prepend exactly one
fn wrap_text_line(line: &str) -> String {
    let (body, carriage) = match line.strip_suffix('\r') {
        Some(stripped) => (stripped, "\r"),
        None => (line, ""),
    };

    let mut wrapped = String::with_capacity(body.len() + 4);
    wrapped.push(RLE);
    wrapped.push_str(&strip_markers(body));
    wrapped.push_str(carriage);
    wrapped
}
