// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod cmyk;
pub mod convert_api;
pub mod cylindrical;
pub mod hue;
pub mod rgb_notation;
pub mod rounding;

// Re-export.
pub use cmyk::*;
pub use convert_api::*;
pub use cylindrical::*;
pub use hue::*;
pub use rgb_notation::*;
pub use rounding::*;
