use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

/// Subtitle format recognized from a filename extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    /// Advanced SubStation Alpha (.ass)
    Ass,
    /// SubRip (.srt)
    Srt,
    /// Anything else - passed through unchanged
    Unknown,
}

impl SubtitleFormat {
    /// Classify a filename by its lowercased extension.
    ///
    /// This is a pure function of the extension: content is never inspected,
    /// and `Unknown` is a deliberate pass-through marker, not an error.
    pub fn from_filename(filename: &str) -> Self {
        Self::from_path(Path::new(filename))
    }

    /// Classify a path by its lowercased extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .as_deref()
        {
            Some("ass") => Self::Ass,
            Some("srt") => Self::Srt,
            _ => Self::Unknown,
        }
    }

    /// Whether files of this format are transformed by the fixer
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file's raw bytes
    pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
        fs::read(&path).with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write raw bytes to a file, creating parent directories as needed
    pub fn write_bytes<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Write a string to a file as UTF-8 without BOM
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        Self::write_bytes(path, content.as_bytes())
    }

    // @generates: Output path for a fixed subtitle
    // @params: input_file, output_dir, suffix
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        suffix: &str,
    ) -> PathBuf {
        let input_file = input_file.as_ref();
        let output_dir = output_dir.as_ref();

        // Get the file stem (filename without extension)
        let stem = input_file.file_stem().unwrap_or_default();
        let extension = input_file.extension().unwrap_or_default();

        // Create the output filename with the suffix inserted before the extension
        let mut output_filename = stem.to_string_lossy().to_string();
        if !suffix.is_empty() {
            output_filename.push('.');
            output_filename.push_str(suffix);
        }
        if !extension.is_empty() {
            output_filename.push('.');
            output_filename.push_str(&extension.to_string_lossy());
        }

        // Join with the output directory
        output_dir.join(output_filename)
    }

    /// Find subtitle files (.ass / .srt) in a directory, recursively.
    ///
    /// Results are sorted so batch runs process files in a stable order.
    pub fn find_subtitle_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() && SubtitleFormat::from_path(path).is_supported() {
                result.push(path.to_path_buf());
            }
        }

        result.sort();
        Ok(result)
    }
}
