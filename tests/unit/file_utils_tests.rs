/*!
 * Tests for file utilities and format classification
 */

use std::path::Path;

use rtlfix::file_utils::{FileManager, SubtitleFormat};

use crate::common;

#[test]
fn test_format_classification_withKnownExtensions_shouldMatch() {
    assert_eq!(SubtitleFormat::from_filename("movie.srt"), SubtitleFormat::Srt);
    assert_eq!(SubtitleFormat::from_filename("movie.ass"), SubtitleFormat::Ass);
}

#[test]
fn test_format_classification_withUppercaseExtensions_shouldMatch() {
    assert_eq!(SubtitleFormat::from_filename("MOVIE.SRT"), SubtitleFormat::Srt);
    assert_eq!(SubtitleFormat::from_filename("Movie.Ass"), SubtitleFormat::Ass);
}

#[test]
fn test_format_classification_withUnknownExtension_shouldBeUnknown() {
    assert_eq!(SubtitleFormat::from_filename("notes.txt"), SubtitleFormat::Unknown);
    assert_eq!(SubtitleFormat::from_filename("archive.srt.bak"), SubtitleFormat::Unknown);
    assert_eq!(SubtitleFormat::from_filename("no_extension"), SubtitleFormat::Unknown);
    assert!(!SubtitleFormat::Unknown.is_supported());
}

#[test]
fn test_generate_output_path_withSuffix_shouldInsertBeforeExtension() {
    let output = FileManager::generate_output_path(
        Path::new("/subs/movie.srt"),
        Path::new("/out"),
        "rtl",
    );
    assert_eq!(output, Path::new("/out/movie.rtl.srt"));
}

#[test]
fn test_generate_output_path_withEmptySuffix_shouldKeepName() {
    let output =
        FileManager::generate_output_path(Path::new("/subs/movie.srt"), Path::new("/out"), "");
    assert_eq!(output, Path::new("/out/movie.srt"));
}

#[test]
fn test_find_subtitle_files_withMixedTree_shouldFindOnlySubtitles() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path();

    common::create_test_file(dir, "a.srt", "x").unwrap();
    common::create_test_file(dir, "b.ass", "x").unwrap();
    common::create_test_file(dir, "c.txt", "x").unwrap();
    std::fs::create_dir(dir.join("nested")).unwrap();
    common::create_test_file(&dir.join("nested"), "d.srt", "x").unwrap();

    let files = FileManager::find_subtitle_files(dir).unwrap();
    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|f| SubtitleFormat::from_path(f).is_supported()));
}

#[test]
fn test_write_bytes_withMissingParent_shouldCreateDirectories() {
    let temp_dir = common::create_temp_dir().unwrap();
    let target = temp_dir.path().join("a/b/out.srt");

    FileManager::write_bytes(&target, "שלום".as_bytes()).unwrap();

    let read_back = FileManager::read_bytes(&target).unwrap();
    assert_eq!(read_back, "שלום".as_bytes());
}
