use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::encoding;
use crate::errors::AppError;
use crate::file_utils::{FileManager, SubtitleFormat};
use crate::rtl_fixer;
use crate::validation;

// @module: Application controller for batch subtitle fixing

/// Per-file processing status.
///
/// A batch collects one status per file; a failure of one file never aborts
/// the files after it.
#[derive(Debug, Clone)]
pub enum FileStatus {
    /// Decoded, fixed and re-encoded. A non-empty issue list is a warning,
    /// not a failure - the output was still written.
    Fixed {
        /// Label of the encoding the input was decoded from
        encoding: String,
        /// Advisory validation findings
        issues: Vec<String>,
    },
    /// Unrecognized extension - content passed through unchanged
    Unchanged,
    /// Output already exists and overwrite was not forced
    Skipped,
    /// Hard per-file failure (decode or I/O)
    Failed {
        /// Human-readable failure description
        message: String,
    },
}

impl FileStatus {
    /// Whether this status produced output bytes
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Fixed { .. } | Self::Unchanged)
    }
}

/// Result of processing a single file
#[derive(Debug, Clone)]
pub struct FileReport {
    /// The input file
    pub input: PathBuf,
    /// Where output was written, when it was
    pub output: Option<PathBuf>,
    /// Processing status
    pub status: FileStatus,
}

/// Aggregated results of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One report per processed file, in processing order
    pub reports: Vec<FileReport>,
}

impl BatchReport {
    /// Number of files fixed cleanly (no validation issues)
    pub fn fixed_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(&r.status, FileStatus::Fixed { issues, .. } if issues.is_empty()))
            .count()
    }

    /// Number of files fixed with advisory issues
    pub fn warning_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(&r.status, FileStatus::Fixed { issues, .. } if !issues.is_empty()))
            .count()
    }

    /// Number of files that failed outright
    pub fn failed_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.status, FileStatus::Failed { .. }))
            .count()
    }

    /// Number of files passed through unchanged
    pub fn unchanged_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.status, FileStatus::Unchanged))
            .count()
    }

    /// Number of files skipped because output already existed
    pub fn skipped_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.status, FileStatus::Skipped))
            .count()
    }
}

/// In-memory result of fixing one file's bytes
#[derive(Debug, Clone)]
pub struct FixedFile {
    /// Output bytes, always UTF-8 without BOM for recognized formats
    pub bytes: Vec<u8>,
    /// Encoding the input was decoded from; `None` for pass-through
    pub encoding: Option<String>,
    /// Advisory validation findings
    pub issues: Vec<String>,
}

/// Main application controller for subtitle fixing
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Fix one file's raw bytes in memory.
    ///
    /// This is the pure core of the application: a function of
    /// `(filename, bytes)` with no file system access. Unknown extensions
    /// are passed through byte-for-byte; recognized formats are decoded
    /// through the encoding fallback chain, fixed, and re-encoded as UTF-8
    /// without BOM.
    pub fn fix_bytes(&self, filename: &str, bytes: &[u8]) -> Result<FixedFile, AppError> {
        let format = SubtitleFormat::from_filename(filename);

        if !format.is_supported() {
            debug!("Unrecognized extension, passing through: {}", filename);
            return Ok(FixedFile {
                bytes: bytes.to_vec(),
                encoding: None,
                issues: Vec::new(),
            });
        }

        let options = self.config.encoding.resolve_options();
        let decoded = encoding::resolve_with(bytes, &options)?;

        let issues = if format == SubtitleFormat::Srt {
            validation::validate(&decoded.text)
                .iter()
                .map(ToString::to_string)
                .collect()
        } else {
            Vec::new()
        };

        let fixed = rtl_fixer::fix_content(format, &decoded.text);

        Ok(FixedFile {
            bytes: fixed.into_bytes(),
            encoding: Some(decoded.encoding.to_string()),
            issues,
        })
    }

    /// Process a single file on disk and write its fixed output.
    ///
    /// Never returns an error: every failure is absorbed into the report so
    /// callers can continue with sibling files.
    pub fn process_file(
        &self,
        input_file: &Path,
        output_dir: Option<&Path>,
        force_overwrite: bool,
    ) -> FileReport {
        let output_path = self.output_path_for(input_file, output_dir);

        if !self.config.output.in_place && output_path.exists() && !force_overwrite {
            warn!(
                "Skipping {:?}, output already exists (use -f to force overwrite)",
                input_file
            );
            return FileReport {
                input: input_file.to_path_buf(),
                output: None,
                status: FileStatus::Skipped,
            };
        }

        match self.fix_file(input_file, &output_path) {
            Ok(status) => {
                for issue in status_issues(&status) {
                    warn!("{:?}: {}", input_file, issue);
                }
                FileReport {
                    input: input_file.to_path_buf(),
                    output: Some(output_path),
                    status,
                }
            }
            Err(e) => {
                error!("Failed to process {:?}: {}", input_file, e);
                FileReport {
                    input: input_file.to_path_buf(),
                    output: None,
                    status: FileStatus::Failed {
                        message: e.to_string(),
                    },
                }
            }
        }
    }

    /// Read, fix and write one file
    fn fix_file(&self, input_file: &Path, output_path: &Path) -> Result<FileStatus> {
        let bytes = FileManager::read_bytes(input_file)?;

        let filename = input_file
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        let fixed = self
            .fix_bytes(&filename, &bytes)
            .with_context(|| format!("Failed to fix {:?}", input_file))?;

        FileManager::write_bytes(output_path, &fixed.bytes)?;

        Ok(match fixed.encoding {
            Some(encoding) => {
                debug!("Fixed {:?} ({})", input_file, encoding);
                FileStatus::Fixed {
                    encoding,
                    issues: fixed.issues,
                }
            }
            None => FileStatus::Unchanged,
        })
    }

    /// Process a list of files sequentially, isolating per-file failures
    pub fn run_many(
        &self,
        files: &[PathBuf],
        output_dir: Option<&Path>,
        force_overwrite: bool,
    ) -> BatchReport {
        let progress = ProgressBar::new(files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress.set_style(template_result.progress_chars("█▓▒░"));
        progress.set_message("Fixing subtitles");

        let mut report = BatchReport::default();

        for file in files {
            report.reports.push(self.process_file(file, output_dir, force_overwrite));
            progress.inc(1);
        }

        progress.finish_and_clear();
        report
    }

    /// Run the main workflow for a single input file
    pub fn run(
        &self,
        input_file: &Path,
        output_dir: Option<&Path>,
        force_overwrite: bool,
    ) -> Result<FileReport> {
        if !input_file.exists() {
            return Err(anyhow::anyhow!(
                "Input file does not exist: {:?}",
                input_file
            ));
        }

        Ok(self.process_file(input_file, output_dir, force_overwrite))
    }

    /// Run the main workflow for every subtitle file under a directory
    pub fn run_folder(
        &self,
        input_dir: &Path,
        output_dir: Option<&Path>,
        force_overwrite: bool,
    ) -> Result<BatchReport> {
        let start_time = std::time::Instant::now();

        if !input_dir.exists() {
            return Err(anyhow::anyhow!(
                "Input directory does not exist: {:?}",
                input_dir
            ));
        }

        let files = FileManager::find_subtitle_files(input_dir)?;
        if files.is_empty() {
            warn!("No subtitle files found in {:?}", input_dir);
            return Ok(BatchReport::default());
        }

        info!("Processing {} subtitle file(s)", files.len());
        let report = self.run_many(&files, output_dir, force_overwrite);

        info!(
            "Finished in {:.1}s: {} fixed, {} with warnings, {} skipped, {} failed",
            start_time.elapsed().as_secs_f64(),
            report.fixed_count(),
            report.warning_count(),
            report.skipped_count(),
            report.failed_count()
        );

        Ok(report)
    }

    /// Compute the output path for an input file
    fn output_path_for(&self, input_file: &Path, output_dir: Option<&Path>) -> PathBuf {
        if self.config.output.in_place {
            return input_file.to_path_buf();
        }

        let parent = input_file.parent().unwrap_or_else(|| Path::new("."));
        let dir = output_dir.unwrap_or(parent);
        FileManager::generate_output_path(input_file, dir, &self.config.output.suffix)
    }
}

/// Advisory issues carried by a status, if any
fn status_issues(status: &FileStatus) -> &[String] {
    match status {
        FileStatus::Fixed { issues, .. } => issues,
        _ => &[],
    }
}
