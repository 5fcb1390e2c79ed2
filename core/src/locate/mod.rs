// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod hex_at_cursor;
pub mod replace_match;

// Re-export.
pub use hex_at_cursor::*;
pub use replace_match::*;
