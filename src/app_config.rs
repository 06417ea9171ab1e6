use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::encoding::{ResolveOptions, DEFAULT_UTF16_CONTROL_RATIO};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Encoding detection settings
    #[serde(default)]
    pub encoding: EncodingConfig,

    /// Preview settings
    #[serde(default)]
    pub preview: PreviewConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            encoding: EncodingConfig::default(),
            preview: PreviewConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration after loading and CLI overrides
    pub fn validate(&self) -> Result<()> {
        if self.output.suffix.is_empty() && !self.output.in_place {
            return Err(anyhow!(
                "Output suffix must not be empty unless in-place mode is enabled"
            ));
        }

        if self.output.suffix.contains('/') || self.output.suffix.contains('\\') {
            return Err(anyhow!(
                "Output suffix must not contain path separators: {}",
                self.output.suffix
            ));
        }

        if self.encoding.utf16_control_ratio <= 0.0 || self.encoding.utf16_control_ratio > 1.0 {
            return Err(anyhow!(
                "UTF-16 control-character ratio must be in (0, 1], got {}",
                self.encoding.utf16_control_ratio
            ));
        }

        if self.preview.max_lines == 0 {
            return Err(anyhow!("Preview line count must be at least 1"));
        }

        Ok(())
    }
}

/// Output file settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    /// Suffix inserted before the extension of fixed files
    /// (e.g. `movie.srt` becomes `movie.rtl.srt`)
    #[serde(default = "default_output_suffix")]
    pub suffix: String,

    /// Overwrite the source file instead of writing a sibling
    #[serde(default)]
    pub in_place: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_output_suffix(),
            in_place: false,
        }
    }
}

/// Encoding detection settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EncodingConfig {
    /// Control-character fraction above which a UTF-16 decode is rejected
    /// as a false positive. The check is a heuristic, not a contract.
    #[serde(default = "default_utf16_control_ratio")]
    pub utf16_control_ratio: f64,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            utf16_control_ratio: default_utf16_control_ratio(),
        }
    }
}

impl EncodingConfig {
    /// Convert to resolver options
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            utf16_control_ratio: self.utf16_control_ratio,
        }
    }
}

/// Preview settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PreviewConfig {
    /// Maximum number of subtitle text lines collected for a preview
    #[serde(default = "default_preview_max_lines")]
    pub max_lines: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_lines: default_preview_max_lines(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_output_suffix() -> String {
    "rtl".to_string()
}

fn default_utf16_control_ratio() -> f64 {
    DEFAULT_UTF16_CONTROL_RATIO
}

fn default_preview_max_lines() -> usize {
    10
}
