// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod commands;
pub mod prompt;
pub mod run_app;

// Re-export.
pub use commands::*;
pub use prompt::*;
pub use run_app::*;
