// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure where the tracing logs go, and at what level.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level`: [`tracing::Level`] - The log level to use for tracing.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level: tracing::Level,
}

/// Logs only ever go to a file. Stdout carries the conversion results, and the terminal
/// is drawn on by the interactive prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    File(PathBuf),
}

impl TracingConfig {
    /// Log to the default file when `enable_logging` is set, otherwise nothing is
    /// logged.
    #[must_use]
    pub fn new(enable_logging: bool) -> Self {
        if enable_logging {
            Self::new_file(None)
        } else {
            Self {
                writer_config: WriterConfig::None,
                level: tracing::Level::DEBUG,
            }
        }
    }

    /// Log to `file_path` (or [`DEFAULT_LOG_FILE_NAME`] in the current folder) at debug
    /// level.
    #[must_use]
    pub fn new_file(file_path: Option<PathBuf>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                file_path.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE_NAME)),
            ),
            level: tracing::Level::DEBUG,
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { LevelFilter::from_level(self.level) }
}
