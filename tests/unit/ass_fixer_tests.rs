/*!
 * Tests for the ASS dialogue fixer
 */

use rtlfix::rtl_fixer::ass::fix_dialogue_text;
use rtlfix::rtl_fixer::fix_ass;

use crate::common;

#[test]
fn test_fix_dialogue_text_withBreaksAndStyleBlocks_shouldPlaceMarkers() {
    let fixed = fix_dialogue_text("Hello\\Nworld{\\b1}bold{\\b0}");
    assert_eq!(
        fixed,
        "\u{202B}Hello\\N\u{202B}world{\\b1}\u{202B}bold{\\b0}\u{202B}"
    );
}

#[test]
fn test_fix_dialogue_text_withAdjacentBraces_shouldRetractMarker() {
    // The marker inserted after the first close brace would land directly
    // before the next open brace and must be retracted
    let fixed = fix_dialogue_text("{\\b1}{\\i1}שלום");
    assert_eq!(fixed, "{\\b1}{\\i1}\u{202B}שלום");
}

#[test]
fn test_fix_dialogue_text_withLeadingStyleBlock_shouldNotPrecedeOpenBrace() {
    let fixed = fix_dialogue_text("{\\b1}text");
    assert_eq!(fixed, "{\\b1}\u{202B}text");
    assert!(!fixed.contains("\u{202B}{"));
}

#[test]
fn test_fix_dialogue_text_withSoftBreak_shouldInsertAfterToken() {
    let fixed = fix_dialogue_text("שלום\\nעולם");
    assert_eq!(fixed, "\u{202B}שלום\\n\u{202B}עולם");
}

#[test]
fn test_fix_dialogue_text_withExistingMarkers_shouldBeIdempotent() {
    let samples = [
        "Hello\\Nworld{\\b1}bold{\\b0}",
        "שלום עולם",
        "{\\b1}{\\i1}nested",
        "plain text",
        "",
    ];

    for sample in samples {
        let once = fix_dialogue_text(sample);
        let twice = fix_dialogue_text(&once);
        assert_eq!(once, twice, "not idempotent for {:?}", sample);
    }
}

#[test]
fn test_fix_ass_withNonDialogueLines_shouldPreserveExactly() {
    let content = "[Script Info]\nTitle: Test\n; comment line\n\n[Events]\nFormat: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n";
    assert_eq!(fix_ass(content), content);
}

#[test]
fn test_fix_ass_withMalformedDialogue_shouldPassThrough() {
    // Fewer than 10 comma-separated fields
    let line = "Dialogue: 0,0:00:01.00,0:00:02.00,Default,text";
    assert_eq!(fix_ass(line), line);
}

#[test]
fn test_fix_ass_withCommasInTextField_shouldPreserveThem() {
    let line = "Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,שלום, עולם, כאן";
    let fixed = fix_ass(line);
    assert_eq!(
        fixed,
        "Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,\u{202B}שלום, עולם, כאן"
    );
}

#[test]
fn test_fix_ass_withCrlfLineEndings_shouldKeepCarriageReturns() {
    let content = "Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,שלום\r\n[Other]\r\n";
    let fixed = fix_ass(content);
    assert_eq!(
        fixed,
        "Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,\u{202B}שלום\r\n[Other]\r\n"
    );
}

#[test]
fn test_fix_ass_withFullFile_shouldBeIdempotent() {
    let once = fix_ass(common::hebrew_ass());
    let twice = fix_ass(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_fix_ass_withFullFile_shouldOnlyChangeDialogueLines() {
    let fixed = fix_ass(common::hebrew_ass());

    for (original, result) in common::hebrew_ass().split('\n').zip(fixed.split('\n')) {
        if original.starts_with("Dialogue:") {
            assert!(result.contains(common::RLE));
        } else {
            assert_eq!(original, result);
        }
    }
}
