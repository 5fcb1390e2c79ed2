// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::Write, path::Path};

use hexconv_core::TextPosition;

use crate::{AtCursorOutcome, AtCursorRequest, CLIArg, CLICommand, CmdrError, CmdrResult,
            ConverterConfig, Prompt, TerminalPrompt, TracingConfig, convert_all,
            convert_at_cursor, convert_one, try_initialize_logging_global, ui_str};

/// Entry point for the `hexconv` binary: set up logging, load the config, and run the
/// command, printing results to stdout and asking questions on the terminal.
///
/// # Errors
///
/// Returns any [`CmdrError`] from the steps above.
pub async fn run_app(cli_arg: CLIArg) -> CmdrResult<()> {
    try_initialize_logging_global(&TracingConfig::new(
        cli_arg.global_options.enable_logging,
    ))?;
    tracing::debug!(message = "Start hexconv", cli_arg = ?cli_arg);

    let config = ConverterConfig::try_load(cli_arg.global_options.config.as_deref())?;
    let mut prompt = TerminalPrompt;
    let mut stdout = std::io::stdout();

    run_command(cli_arg.command, &config, &mut prompt, &mut stdout).await
}

/// # Errors
///
/// Returns any [`CmdrError`] from the command, or [`CmdrError::WriteOutput`] if `out`
/// can't be written.
pub async fn run_command(
    command: CLICommand,
    config: &ConverterConfig,
    prompt: &mut impl Prompt,
    out: &mut impl Write,
) -> CmdrResult<()> {
    match command {
        CLICommand::Convert { hex, format, alpha } => {
            let converted =
                convert_one(&hex, format, alpha.alpha.as_deref(), config, prompt).await?;
            writeln!(out, "{converted}").map_err(CmdrError::WriteOutput)
        }
        CLICommand::All { hex, alpha } => {
            for (format, converted) in convert_all(&hex, alpha.alpha.as_deref(), config)? {
                writeln!(out, "{}", ui_str::format_line(format, &converted))
                    .map_err(CmdrError::WriteOutput)?;
            }
            Ok(())
        }
        CLICommand::Formats => {
            for format in &config.enabled_formats {
                writeln!(out, "{format}").map_err(CmdrError::WriteOutput)?;
            }
            Ok(())
        }
        CLICommand::At {
            file,
            line,
            column,
            format,
            alpha,
            yes,
        } => {
            let request = AtCursorRequest {
                position: TextPosition::new(line.get() - 1, column.get() - 1),
                format,
                alpha_text: alpha.alpha,
                skip_confirm: yes,
            };
            run_at(&file, &request, config, prompt, out).await
        }
    }
}

/// Read `file`, run [`convert_at_cursor`] on it, and write it back if the value was
/// replaced.
///
/// # Errors
///
/// Returns [`CmdrError::ReadDocument`] / [`CmdrError::WriteDocument`] for IO problems,
/// and anything [`convert_at_cursor`] returns.
pub async fn run_at(
    file: &Path,
    request: &AtCursorRequest,
    config: &ConverterConfig,
    prompt: &mut impl Prompt,
    out: &mut impl Write,
) -> CmdrResult<()> {
    let document = tokio::fs::read_to_string(file)
        .await
        .map_err(|source| CmdrError::ReadDocument {
            path: file.to_path_buf(),
            source,
        })?;

    let message = match convert_at_cursor(&document, request, config, prompt).await? {
        AtCursorOutcome::Replaced {
            hex_match,
            converted,
            document,
        } => {
            tokio::fs::write(file, document)
                .await
                .map_err(|source| CmdrError::WriteDocument {
                    path: file.to_path_buf(),
                    source,
                })?;
            // % is Display, ? is Debug.
            tracing::info!(
                message = "Replaced hex color",
                file = %file.display(),
                original = %hex_match.text,
                %converted
            );
            ui_str::replaced_msg(&hex_match.text, &converted)
        }
        AtCursorOutcome::Kept {
            hex_match,
            converted,
        } => ui_str::kept_msg(&hex_match.text, &converted),
    };

    writeln!(out, "{message}").map_err(CmdrError::WriteOutput)
}

#[cfg(test)]
mod tests {
    use std::{fs, num::NonZeroUsize};

    use super::*;
    use crate::AlphaOption;
    use hexconv_core::ColorFormat;
    use pretty_assertions::assert_eq;

    /// Never asked anything in these tests.
    struct NoPrompt;

    impl Prompt for NoPrompt {
        async fn ask(&mut self, question: &str) -> CmdrResult<Option<String>> {
            panic!("unexpected question: {question}")
        }

        async fn confirm(&mut self, question: &str) -> CmdrResult<bool> {
            panic!("unexpected confirmation: {question}")
        }
    }

    async fn run_to_string(command: CLICommand, config: &ConverterConfig) -> CmdrResult<String> {
        let mut out = vec![];
        run_command(command, config, &mut NoPrompt, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn one_based(it: usize) -> NonZeroUsize { NonZeroUsize::new(it).unwrap() }

    #[tokio::test]
    async fn test_convert_command() {
        let command = CLICommand::Convert {
            hex: "#ff0000".to_string(),
            format: ColorFormat::Hsb,
            alpha: AlphaOption { alpha: None },
        };
        let it = run_to_string(command, &ConverterConfig::default()).await.unwrap();
        assert_eq!(it, "hsb(0, 100%, 100%)\n");
    }

    #[tokio::test]
    async fn test_all_command() {
        let config = ConverterConfig {
            enabled_formats: vec![ColorFormat::Rgb, ColorFormat::Hex8],
            confirm_replace: true,
        };
        let command = CLICommand::All {
            hex: "336699".to_string(),
            alpha: AlphaOption {
                alpha: Some("0.5".to_string()),
            },
        };
        let it = run_to_string(command, &config).await.unwrap();
        assert_eq!(it, "RGB: rgb(51, 102, 153)\nHEX8: #33669980\n");
    }

    #[tokio::test]
    async fn test_formats_command() {
        let config = ConverterConfig {
            enabled_formats: vec![ColorFormat::Cmyk, ColorFormat::Hwb],
            confirm_replace: true,
        };
        let it = run_to_string(CLICommand::Formats, &config).await.unwrap();
        assert_eq!(it, "CMYK\nHWB\n");
    }

    #[tokio::test]
    async fn test_at_command_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("style.css");
        fs::write(&file, "a {\n  color: #1E90FF;\n}\n").unwrap();

        let command = CLICommand::At {
            file: file.clone(),
            line: one_based(2),
            column: one_based(10),
            format: ColorFormat::Hex8,
            alpha: AlphaOption {
                alpha: Some("1".to_string()),
            },
            yes: true,
        };
        let it = run_to_string(command, &ConverterConfig::default()).await.unwrap();

        assert_eq!(it, "Replaced #1E90FF with #1E90FFff\n");
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "a {\n  color: #1E90FFff;\n}\n"
        );
    }

    #[tokio::test]
    async fn test_at_command_first_line_and_column() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("color.txt");
        fs::write(&file, "#336699\n").unwrap();

        let command = CLICommand::At {
            file: file.clone(),
            line: one_based(1),
            column: one_based(1),
            format: ColorFormat::Rgb,
            alpha: AlphaOption { alpha: None },
            yes: true,
        };
        let it = run_to_string(command, &ConverterConfig::default()).await.unwrap();

        assert_eq!(it, "Replaced #336699 with rgb(51, 102, 153)\n");
        assert_eq!(fs::read_to_string(&file).unwrap(), "rgb(51, 102, 153)\n");
    }

    #[tokio::test]
    async fn test_at_command_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let command = CLICommand::At {
            file: dir.path().join("nope.css"),
            line: one_based(1),
            column: one_based(1),
            format: ColorFormat::Rgb,
            alpha: AlphaOption { alpha: None },
            yes: true,
        };
        let result = run_to_string(command, &ConverterConfig::default()).await;
        assert!(matches!(result, Err(CmdrError::ReadDocument { .. })));
    }
}
