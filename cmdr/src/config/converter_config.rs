// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fs,
          io::ErrorKind,
          path::{Path, PathBuf}};

use hexconv_core::ColorFormat;
use miette::{NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};

use crate::{CmdrError, CmdrResult, try_get_default_config_file_path};

/// User settings, stored as JSON. Missing keys fall back to [`Default`]:
///
/// ```json
/// {
///   "enabled_formats": ["RGB", "RGBA", "HSL", "HSB", "HWB", "CMYK", "HEX8"],
///   "confirm_replace": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Formats the app is allowed to convert to.
    pub enabled_formats: Vec<ColorFormat>,
    /// Ask before replacing text in a document.
    pub confirm_replace: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            enabled_formats: ColorFormat::all(),
            confirm_replace: true,
        }
    }
}

impl ConverterConfig {
    #[must_use]
    pub fn is_enabled(&self, format: ColorFormat) -> bool {
        self.enabled_formats.contains(&format)
    }

    /// # Errors
    ///
    /// Returns [`CmdrError::FormatNotEnabled`] if `format` is not in
    /// [`Self::enabled_formats`].
    pub fn ensure_enabled(&self, format: ColorFormat) -> CmdrResult<()> {
        if self.is_enabled(format) {
            Ok(())
        } else {
            Err(CmdrError::FormatNotEnabled { format })
        }
    }

    /// Parse JSON text. `source_name` is only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns [`CmdrError::ParseConfig`], pointing at the offending spot in `json`.
    pub fn try_parse(source_name: &str, json: &str) -> CmdrResult<Self> {
        serde_json::from_str(json).map_err(|error| {
            let offset = offset_of(json, error.line(), error.column());
            let len = usize::from(offset < json.len());
            CmdrError::ParseConfig {
                message: error.to_string(),
                src: NamedSource::new(source_name, json.to_string()),
                span: SourceSpan::from((offset, len)),
            }
        })
    }

    /// Load from `path`, or from the default location in the user's config folder when
    /// `path` is `None`. A missing file means [`Default`] settings.
    ///
    /// # Errors
    ///
    /// Returns [`CmdrError::ReadConfig`] if the file exists but can't be read,
    /// [`CmdrError::ParseConfig`] if it isn't valid, or
    /// [`CmdrError::ConfigFolderPathCouldNotBeAccessed`] if there is no default location.
    pub fn try_load(path: Option<&Path>) -> CmdrResult<Self> {
        let path: PathBuf = match path {
            Some(it) => it.to_path_buf(),
            None => try_get_default_config_file_path()?,
        };

        match fs::read_to_string(&path) {
            Ok(json) => {
                let config = Self::try_parse(&path.display().to_string(), &json)?;
                // % is Display, ? is Debug.
                tracing::debug!(message = "Loaded config", path = %path.display(), config = ?config);
                Ok(config)
            }
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!(message = "No config file, using defaults", path = %path.display());
                Ok(Self::default())
            }
            Err(source) => Err(CmdrError::ReadConfig { path, source }),
        }
    }
}

/// Byte offset of a 1 based `line` and `column` (as reported by [`serde_json::Error`]).
fn offset_of(text: &str, line: usize, column: usize) -> usize {
    let line_start = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum::<usize>();
    (line_start + column.saturating_sub(1)).min(text.len())
}
