/*!
 * Directionality fixing for Advanced SubStation Alpha (.ass) files.
 *
 * Only `Dialogue:` event lines are touched. Headers, style definitions,
 * comments and blank lines are preserved exactly as read.
 */

use super::{strip_markers, RLE};

/// Prefix identifying a subtitle event line
const DIALOGUE_PREFIX: &str = "Dialogue:";

/// Number of comma-separated fields in a dialogue event
/// (Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text)
const DIALOGUE_FIELDS: usize = 10;

/// Fix every `Dialogue:` line of an ASS file.
///
/// Lines are processed individually; anything that is not a well-formed
/// dialogue event passes through unchanged.
pub fn fix_ass(content: &str) -> String {
    content
        .split('\n')
        .map(fix_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fix a single physical line, tolerating malformed events
fn fix_line(line: &str) -> String {
    if !line.starts_with(DIALOGUE_PREFIX) {
        return line.to_string();
    }

    // Keep a CR ending out of the text field so it survives untouched
    let (body, carriage) = match line.strip_suffix('\r') {
        Some(stripped) => (stripped, "\r"),
        None => (line, ""),
    };

    // Limit to 9 splits so commas inside the free-text field stay verbatim
    let fields: Vec<&str> = body.splitn(DIALOGUE_FIELDS, ',').collect();
    if fields.len() != DIALOGUE_FIELDS {
        // Malformed event - emit the original line unchanged
        return line.to_string();
    }

    let mut fixed = fields[..DIALOGUE_FIELDS - 1].join(",");
    fixed.push(',');
    fixed.push_str(&fix_dialogue_text(fields[DIALOGUE_FIELDS - 1]));
    fixed.push_str(carriage);
    fixed
}

/// Rewrite a dialogue text field with directional markers.
///
/// The rewrite is idempotent: existing markers are stripped first, then one
/// marker is placed at the segment start, after every `\N` / `\n` break token
/// and after every `}` style-block close. A marker that would land directly
/// before a `{` style-block open is retracted.
pub fn fix_dialogue_text(text: &str) -> String {
    let stripped = strip_markers(text);

    let mut fixed = String::with_capacity(stripped.len() + 8);
    fixed.push(RLE);
    fixed.push_str(&stripped);

    fixed
        .replace("\\N", "\\N\u{202B}")
        .replace("\\n", "\\n\u{202B}")
        .replace('}', "}\u{202B}")
        .replace("\u{202B}{", "{")
}
