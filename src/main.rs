// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::app_controller::{Controller, FileStatus};
use crate::file_utils::{FileManager, SubtitleFormat};

mod app_config;
mod app_controller;
mod encoding;
mod errors;
mod file_utils;
mod rtl_fixer;
mod validation;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fix RTL rendering of subtitle files (default command)
    #[command(alias = "run")]
    Fix(FixArgs),

    /// Validate the structure of an SRT file without writing output
    Check {
        /// Subtitle file to validate
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Configuration file path
        #[arg(short, long, default_value = "conf.json")]
        config_path: String,
    },

    /// Preview the first subtitle lines with RTL / marker flags
    Preview {
        /// Subtitle file to preview
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Maximum number of text lines to show
        #[arg(short = 'n', long)]
        lines: Option<usize>,

        /// Configuration file path
        #[arg(short, long, default_value = "conf.json")]
        config_path: String,
    },

    /// Generate shell completions for rtlfix
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct FixArgs {
    /// Input subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Directory to write fixed files to (defaults to each input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Overwrite source files instead of writing siblings
    #[arg(long)]
    in_place: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// rtlfix - RTL subtitle direction fixer
///
/// Repairs right-to-left rendering of ASS and SRT subtitle files by inserting
/// Unicode directional-embedding markers where naive players would otherwise
/// interleave Hebrew or Arabic text incorrectly.
#[derive(Parser, Debug)]
#[command(name = "rtlfix")]
#[command(version = "1.0.0")]
#[command(about = "Fix right-to-left subtitle rendering")]
#[command(long_about = "rtlfix inserts Unicode RIGHT-TO-LEFT EMBEDDING markers into ASS and SRT
subtitle files so players render Hebrew and Arabic dialogue correctly.

EXAMPLES:
    rtlfix movie.srt                     # Fix a single file to movie.rtl.srt
    rtlfix -f movie.srt                  # Force overwrite an existing output
    rtlfix --in-place movie.ass          # Rewrite the source file itself
    rtlfix /subtitles/                   # Fix every .ass/.srt under a directory
    rtlfix -o fixed/ /subtitles/         # Write outputs into fixed/
    rtlfix check movie.srt               # Structural validation, no output
    rtlfix preview movie.srt -n 5        # Peek at the first subtitle lines
    rtlfix completions bash > rtlfix.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically when fixing files.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Directory to write fixed files to (defaults to each input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Overwrite source files instead of writing siblings
    #[arg(long)]
    in_place: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "rtlfix", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Fix(args)) => run_fix(args),
        Some(Commands::Check { file, config_path }) => run_check(&file, &config_path),
        Some(Commands::Preview {
            file,
            lines,
            config_path,
        }) => run_preview(&file, lines, &config_path),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            run_fix(FixArgs {
                input_path,
                force_overwrite: cli.force_overwrite,
                output_dir: cli.output_dir,
                in_place: cli.in_place,
                config_path: cli.config_path,
                log_level: cli.log_level,
            })
        }
    }
}

/// Load configuration, optionally creating a default file when missing
fn load_config(config_path: &str, create_if_missing: bool) -> Result<Config> {
    if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))
    } else if create_if_missing {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        Ok(config)
    } else {
        Ok(Config::default())
    }
}

fn run_fix(options: FixArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    let mut config = load_config(&options.config_path, true)?;

    // Override config with CLI options if provided
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    if options.in_place {
        config.output.in_place = true;
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let controller = Controller::with_config(config);

    if options.input_path.is_file() {
        let report = controller.run(
            &options.input_path,
            options.output_dir.as_deref(),
            options.force_overwrite,
        )?;

        match report.status {
            FileStatus::Failed { message } => Err(anyhow!(message)),
            FileStatus::Skipped => Ok(()),
            _ => {
                if let Some(output) = &report.output {
                    info!("Fixed: {:?}", output);
                }
                Ok(())
            }
        }
    } else if options.input_path.is_dir() {
        let report = controller.run_folder(
            &options.input_path,
            options.output_dir.as_deref(),
            options.force_overwrite,
        )?;

        if report.failed_count() > 0 {
            warn!("{} file(s) failed, see log above", report.failed_count());
        }
        Ok(())
    } else {
        Err(anyhow!(
            "Input path does not exist: {:?}",
            options.input_path
        ))
    }
}

fn run_check(file: &Path, config_path: &str) -> Result<()> {
    if SubtitleFormat::from_path(file) != SubtitleFormat::Srt {
        warn!("Structural validation only applies to .srt files: {:?}", file);
        return Ok(());
    }

    let config = load_config(config_path, false)?;
    let bytes = FileManager::read_bytes(file)?;
    let decoded = encoding::resolve_with(&bytes, &config.encoding.resolve_options())?;

    let issues = validation::validate(&decoded.text);
    if issues.is_empty() {
        info!("No issues found in {:?} ({})", file, decoded.encoding);
    } else {
        info!("{} issue(s) in {:?}:", issues.len(), file);
        for issue in &issues {
            println!("{}", issue);
        }
    }

    Ok(())
}

fn run_preview(file: &Path, lines: Option<usize>, config_path: &str) -> Result<()> {
    if SubtitleFormat::from_path(file) != SubtitleFormat::Srt {
        warn!("Preview only applies to .srt files: {:?}", file);
        return Ok(());
    }

    let config = load_config(config_path, false)?;
    let bytes = FileManager::read_bytes(file)?;
    let decoded = encoding::resolve_with(&bytes, &config.encoding.resolve_options())?;

    let max_lines = lines.unwrap_or(config.preview.max_lines);
    let records = validation::preview(&decoded.text, max_lines);

    if records.is_empty() {
        info!("No subtitle text lines found in {:?}", file);
        return Ok(());
    }

    for record in &records {
        let rtl = if record.has_rtl { "rtl" } else { "   " };
        let marked = if record.marker_present { "marked" } else { "      " };
        println!("{} | {} | {}", rtl, marked, record.text);
    }

    Ok(())
}
