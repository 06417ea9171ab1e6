/*!
 * Structural sanity checks for SRT content.
 *
 * The checks are deliberately shallow: they flag anomalies a subtitle
 * author would want to know about without ever blocking processing.
 */

use std::fmt;

use crate::rtl_fixer::srt::is_timestamp_line;

/// A single advisory finding about an SRT file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// 1-based line number the issue refers to, when it has one
    pub line: Option<usize>,
    /// Human-readable description
    pub message: String,
}

impl ValidationIssue {
    fn file_level(message: impl Into<String>) -> Self {
        Self {
            line: None,
            message: message.into(),
        }
    }

    fn at_line(line: usize, message: impl Into<String>) -> Self {
        Self {
            line: Some(line),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Validate SRT content and return advisory issues.
///
/// Checks performed:
/// - the file is non-empty
/// - a leading byte order mark is flagged (the decoder normally strips it
///   before content reaches this stage, so its presence means validation ran
///   on raw content)
/// - every block index line is directly followed by a timestamp line
/// - at least one subtitle block exists
pub fn validate(content: &str) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if content.is_empty() {
        issues.push(ValidationIssue::file_level("file is empty"));
        return issues;
    }

    if content.starts_with('\u{FEFF}') {
        issues.push(ValidationIssue::at_line(1, "leading byte order mark present"));
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let mut block_count = 0usize;
    let mut in_text = false;

    for (idx, raw_line) in lines.iter().enumerate() {
        let line = raw_line.trim_end_matches('\r');

        if in_text {
            if line.trim().is_empty() {
                in_text = false;
            }
            continue;
        }

        if is_timestamp_line(line) {
            block_count += 1;
            in_text = true;
            continue;
        }

        if is_index_line(line) {
            let followed_by_timestamp = lines
                .get(idx + 1)
                .map(|next| is_timestamp_line(next))
                .unwrap_or(false);

            if !followed_by_timestamp {
                issues.push(ValidationIssue::at_line(
                    idx + 1,
                    format!(
                        "block index {} is not followed by a timestamp line",
                        line.trim()
                    ),
                ));
            }
        }
    }

    if block_count == 0 {
        issues.push(ValidationIssue::file_level("no subtitle blocks found"));
    }

    issues
}

/// A block index line is purely numeric after trimming
fn is_index_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}
