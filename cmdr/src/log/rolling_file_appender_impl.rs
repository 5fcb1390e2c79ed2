// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::{CmdrError, CmdrResult};

/// A file appender that never rotates, so the whole log lands in `path`.
///
/// Note that if you wrap this up in a non blocking writer, as shown below, the guard
/// has to outlive every log call, otherwise lines are dropped:
///
/// ```ignore
/// tracing_appender::non_blocking(try_create(path)?);
/// ```
///
/// # Errors
///
/// Returns [`CmdrError::InitLogging`] if `path` has no file name, or the file can't be
/// created.
pub fn try_create(path: &Path) -> CmdrResult<RollingFileAppender> {
    let init_logging_error = |source: Box<dyn std::error::Error + Send + Sync>| {
        CmdrError::InitLogging {
            path: path.to_path_buf(),
            source,
        }
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| init_logging_error("missing file name".into()))?;
    let parent = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it.to_path_buf(),
        _ => PathBuf::from("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .map_err(|error| init_logging_error(Box::new(error)))
}
