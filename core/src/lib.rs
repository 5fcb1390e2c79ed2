// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # hexconv_core
//!
//! Converts a 6 digit hex color code (`#RRGGBB` or `RRGGBB`, any case) into one of the
//! notations described by [`ColorFormat`]:
//!
//! | Format | Output                    |
//! |--------|---------------------------|
//! | `RGB`  | `rgb(255, 0, 0)`          |
//! | `RGBA` | `rgba(255, 0, 0, 0.5)`    |
//! | `HSL`  | `hsl(0, 100%, 50%)`       |
//! | `HSB`  | `hsb(0, 100%, 100%)`      |
//! | `HWB`  | `hwb(0, 0%, 0%)`          |
//! | `CMYK` | `cmyk(0.0%, 100.0%, 100.0%, 0.0%)` |
//! | `HEX8` | `#ff000080`               |
//!
//! Everything in this crate is a pure function. There is no configuration, no IO, and
//! no global state. Invalid input is reported as [`ConvertError::InvalidHexInput`],
//! never as a panic or as partial output.
//!
//! ```
//! use hexconv_core::{AlphaValue, ColorFormat, convert};
//!
//! assert_eq!(convert("#ff0000", ColorFormat::Hsl, None).unwrap(), "hsl(0, 100%, 50%)");
//! let alpha = AlphaValue::try_new(0.5).unwrap();
//! assert_eq!(convert("336699", ColorFormat::Hex8, Some(alpha)).unwrap(), "#33669980");
//! assert!(convert("#fff", ColorFormat::Rgb, None).is_err());
//! ```
//!
//! The [`locate`] module finds the hex color code under a text cursor, and splices a
//! converted value back into the document. Callers that talk to a user (prompting for
//! alpha, confirming a replacement) live outside of this crate.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod alpha_value;
pub mod color_format;
pub mod convert;
pub mod error;
pub mod hex_color;
pub mod locate;

// Re-export.
pub use alpha_value::*;
pub use color_format::*;
pub use convert::*;
pub use error::*;
pub use hex_color::*;
pub use locate::*;
