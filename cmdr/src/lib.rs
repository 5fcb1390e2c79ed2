// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # hexconv
//!
//! Command line front end for [`hexconv_core`]. It plays the part an editor plays for
//! an editor extension: it finds the hex color code under a cursor in a file, asks for
//! an alpha value when the target format needs one, converts the code, and replaces it
//! in place after asking for confirmation.
//!
//! ```text
//! hexconv convert '#336699' --format hsl        # hsl(210, 50%, 40%)
//! hexconv all 336699 --alpha 0.5                # every enabled format
//! hexconv at style.css -L 12 -C 10 -f rgba      # asks for alpha, then to replace
//! hexconv formats                               # enabled formats
//! ```
//!
//! Settings live in `hexconv/config.json` in the user config folder (see
//! [`ConverterConfig`]). Pass `-l` to write a debug log to `log.txt`.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod app;
pub mod clap_config;
pub mod common;
pub mod config;
pub mod error;
pub mod log;
pub mod ui_str;

// Re-export.
pub use app::*;
pub use clap_config::*;
pub use common::*;
pub use config::*;
pub use error::*;
pub use log::*;
