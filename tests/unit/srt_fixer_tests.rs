/*!
 * Tests for the SRT block fixer
 */

use rtlfix::rtl_fixer::fix_srt;
use rtlfix::rtl_fixer::srt::is_timestamp_line;

use crate::common;

#[test]
fn test_fix_srt_withTwoBlocks_shouldWrapOnlyTextLines() {
    let input = "1\n00:00:01,000 --> 00:00:02,000\nשלום עולם\n\n2\n00:00:03,000 --> 00:00:04,000\nHello world\n";
    let expected = "1\n00:00:01,000 --> 00:00:02,000\n\u{202B}שלום עולם\n\n2\n00:00:03,000 --> 00:00:04,000\n\u{202B}Hello world\n";

    // Wrapping is structural, not content-aware: the English line is wrapped
    // too, while index, timestamp and separator lines stay byte-identical
    assert_eq!(fix_srt(input), expected);
}

#[test]
fn test_fix_srt_withMultipleTextLines_shouldWrapEachOne() {
    let input = "1\n00:00:01,000 --> 00:00:02,000\nשורה ראשונה\nשורה שנייה\n\n";
    let expected =
        "1\n00:00:01,000 --> 00:00:02,000\n\u{202B}שורה ראשונה\n\u{202B}שורה שנייה\n\n";
    assert_eq!(fix_srt(input), expected);
}

#[test]
fn test_fix_srt_withFixedInput_shouldBeIdempotent() {
    let once = fix_srt(common::hebrew_srt());
    let twice = fix_srt(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_fix_srt_withExistingMarkers_shouldNotDuplicate() {
    let input = "1\n00:00:01,000 --> 00:00:02,000\n\u{202B}\u{202B}שלום\n\n";
    let fixed = fix_srt(input);

    let text_line = fixed.split('\n').nth(2).unwrap();
    assert_eq!(text_line.matches(common::RLE).count(), 1);
    assert!(text_line.starts_with(common::RLE));
}

#[test]
fn test_fix_srt_withStrayContent_shouldPassThroughOutsideBlocks() {
    let input = "stray line before any block\n\n1\n00:00:01,000 --> 00:00:02,000\nשלום\n\n";
    let fixed = fix_srt(input);
    assert!(fixed.starts_with("stray line before any block\n"));
}

#[test]
fn test_fix_srt_withWhitespaceSeparator_shouldEndBlock() {
    let input = "1\n00:00:01,000 --> 00:00:02,000\nשלום\n   \n2\nnot wrapped\n";
    let fixed = fix_srt(input);

    // The whitespace-only separator ends the block: the following index
    // line and stray text stay unwrapped
    assert!(fixed.contains("\n   \n2\nnot wrapped\n"));
}

#[test]
fn test_fix_srt_withCrlfLineEndings_shouldKeepCarriageReturns() {
    let input = "1\r\n00:00:01,000 --> 00:00:02,000\r\nשלום\r\n\r\n";
    let expected = "1\r\n00:00:01,000 --> 00:00:02,000\r\n\u{202B}שלום\r\n\r\n";
    assert_eq!(fix_srt(input), expected);
}

#[test]
fn test_fix_srt_withTrailingNewline_shouldPreserveIt() {
    let with_newline = fix_srt("1\n00:00:01,000 --> 00:00:02,000\nשלום\n\n");
    assert!(with_newline.ends_with('\n'));

    let without_newline = fix_srt("1\n00:00:01,000 --> 00:00:02,000\nשלום");
    assert!(!without_newline.ends_with('\n'));
}

#[test]
fn test_is_timestamp_line_withStrictFormat_shouldMatch() {
    assert!(is_timestamp_line("00:00:01,000 --> 00:00:02,000"));
    assert!(is_timestamp_line("01:23:45,678 --> 01:23:47,890"));
    assert!(is_timestamp_line("00:00:01,000 --> 00:00:02,000\r"));
}

#[test]
fn test_is_timestamp_line_withLooseFormats_shouldReject() {
    // Single-digit hour
    assert!(!is_timestamp_line("0:00:01,000 --> 00:00:02,000"));
    // Dot instead of comma
    assert!(!is_timestamp_line("00:00:01.000 --> 00:00:02.000"));
    // Missing arrow
    assert!(!is_timestamp_line("00:00:01,000 00:00:02,000"));
    // Leading text
    assert!(!is_timestamp_line("x 00:00:01,000 --> 00:00:02,000"));
    assert!(!is_timestamp_line(""));
}

#[test]
fn test_fix_srt_withTimestampLookalikeInsideBlock_shouldWrapIt() {
    // Text-line membership is structural: while inside a block, even a line
    // that looks like a timestamp is subtitle text
    let input = "1\n00:00:01,000 --> 00:00:02,000\n00:00:05,000 --> 00:00:06,000\n\n";
    let fixed = fix_srt(input);

    let third_line = fixed.split('\n').nth(2).unwrap();
    assert!(third_line.starts_with(common::RLE));
}
