// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use hexconv_core::{ColorFormat, ConvertError};
use miette::{Diagnostic, NamedSource, SourceSpan};

use crate::ui_str;

pub type CmdrResult<T> = Result<T, CmdrError>;

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum CmdrError {
    #[error("{msg} (line {line}, column {column})", msg = ui_str::NO_HEX_AT_CURSOR)]
    #[diagnostic(
        code(hexconv::no_hex_at_cursor),
        help("Put the cursor on, or right after, a code like #336699")
    )]
    NoHexAtCursor { line: usize, column: usize },

    #[error("{msg} '{found}'", msg = ui_str::NOT_A_VALID_HEX)]
    #[diagnostic(
        code(hexconv::not_a_valid_hex),
        help("Only 6 digit codes can be converted, eg: #336699")
    )]
    NotAValidHexColor { found: String },

    #[error("🚫 Format {format} is not enabled")]
    #[diagnostic(
        code(hexconv::format_not_enabled),
        help("Add it to `enabled_formats` in the config file, or run `hexconv formats`")
    )]
    FormatNotEnabled { format: ColorFormat },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Convert(#[from] ConvertError),

    #[error("{msg} The document changed while converting", msg = ui_str::CONVERSION_FAILED)]
    #[diagnostic(code(hexconv::stale_document))]
    StaleDocument,

    #[error("📑 Could not access config folder")]
    #[diagnostic(code(hexconv::config_folder))]
    ConfigFolderPathCouldNotBeAccessed,

    #[error("📑 Could not read config file: '{path}'")]
    #[diagnostic(code(hexconv::read_config))]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("📑 Could not parse config file: {message}")]
    #[diagnostic(code(hexconv::parse_config))]
    ParseConfig {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("📄 Could not read document: '{path}'")]
    #[diagnostic(code(hexconv::read_document))]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("📄 Could not write document: '{path}'")]
    #[diagnostic(code(hexconv::write_document))]
    WriteDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("🖨️ Could not write output")]
    #[diagnostic(code(hexconv::write_output))]
    WriteOutput(#[source] std::io::Error),

    #[error("⌨️ Could not read answer from terminal")]
    #[diagnostic(code(hexconv::read_prompt))]
    ReadPrompt(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("📜 Could not set up logging to '{path}'")]
    #[diagnostic(code(hexconv::init_logging))]
    InitLogging {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CmdrError {
    /// The terminal prompts report [`miette::Report`]s.
    #[must_use]
    pub fn read_prompt(report: miette::Report) -> Self { Self::ReadPrompt(report.into()) }
}
