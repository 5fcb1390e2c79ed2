// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use hexconv_core::ColorFormat;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "hexconv")]
#[command(about = "🎨 Convert hex color codes to RGB, RGBA, HSL, HSB, HWB, CMYK or HEX8")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  hexconv [\x1b[32mcommand\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    /// Convert one hex color code and print the result.
    Convert {
        /// Hex color code, eg: `#336699` or `336699`.
        hex: String,

        #[arg(long, short = 'f', help = "Target format: RGB, RGBA, HSL, HSB, HWB, CMYK, HEX8")]
        format: ColorFormat,

        #[command(flatten)]
        alpha: AlphaOption,
    },

    /// Convert one hex color code to every enabled format.
    All {
        /// Hex color code, eg: `#336699` or `336699`.
        hex: String,

        #[command(flatten)]
        alpha: AlphaOption,
    },

    /// Convert the hex color code at a cursor position in a file, and replace it.
    At {
        /// File that contains the hex color code.
        file: PathBuf,

        #[arg(long, short = 'L', help = "Cursor line, starting at 1")]
        line: NonZeroUsize,

        #[arg(long, short = 'C', help = "Cursor column, starting at 1")]
        column: NonZeroUsize,

        #[arg(long, short = 'f', help = "Target format: RGB, RGBA, HSL, HSB, HWB, CMYK, HEX8")]
        format: ColorFormat,

        #[command(flatten)]
        alpha: AlphaOption,

        #[arg(long, short = 'y', help = "Replace without asking for confirmation")]
        yes: bool,
    },

    /// List the enabled formats.
    Formats,
}

#[derive(Debug, Args)]
pub struct AlphaOption {
    #[arg(
        long,
        short = 'a',
        help = "Alpha value (0-1) for RGBA and HEX8. Asked for interactively when missing"
    )]
    pub alpha: Option<String>,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        short = 'c',
        help = "Path to the config file. Defaults to `hexconv/config.json` in the user config folder."
    )]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_cli_is_well_formed() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_parse_convert() {
        let it = CLIArg::try_parse_from(["hexconv", "convert", "#336699", "-f", "hex8", "-a", "0.5"])
            .unwrap();
        let CLICommand::Convert { hex, format, alpha } = it.command else {
            panic!("expected convert");
        };
        assert_eq!(hex, "#336699");
        assert_eq!(format, ColorFormat::Hex8);
        assert_eq!(alpha.alpha.as_deref(), Some("0.5"));
        assert!(!it.global_options.enable_logging);
    }

    #[test]
    fn test_parse_at_with_global_options() {
        let it = CLIArg::try_parse_from([
            "hexconv", "at", "style.css", "-L", "3", "-C", "12", "-f", "HSL", "--yes", "-l",
            "-c", "/tmp/config.json",
        ])
        .unwrap();
        let CLICommand::At {
            file,
            line,
            column,
            format,
            yes,
            ..
        } = it.command
        else {
            panic!("expected at");
        };
        assert_eq!(file, PathBuf::from("style.css"));
        assert_eq!((line.get(), column.get()), (3, 12));
        assert_eq!(format, ColorFormat::Hsl);
        assert!(yes);
        assert!(it.global_options.enable_logging);
        assert_eq!(it.global_options.config, Some(PathBuf::from("/tmp/config.json")));
    }

    #[test_case("-L", "0", "-C", "1"; "line zero")]
    #[test_case("-L", "1", "-C", "0"; "column zero")]
    #[test_case("-L", "-1", "-C", "1"; "negative line")]
    fn test_parse_at_rejects_non_positive_cursor(l: &str, line: &str, c: &str, column: &str) {
        let it = CLIArg::try_parse_from([
            "hexconv", "at", "style.css", l, line, c, column, "-f", "rgb",
        ]);
        assert!(it.is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let it = CLIArg::try_parse_from(["hexconv", "convert", "#336699", "-f", "lab"]);
        assert!(it.is_err());
    }
}
