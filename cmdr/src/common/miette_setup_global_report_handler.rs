// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Customizes how [miette](https://docs.rs/miette/latest/miette/index.html) displays
//! the error report when `main() -> miette::Result<_>` returns an error.
//!
//! The hook is lazy: it only runs when a report is actually displayed, so the terminal
//! width is only looked up when an error happens.

use miette::MietteHandlerOpts;

pub const ISSUES_URL: &str = "https://github.com/hexconv/hexconv/issues";

/// Fallback when the terminal size can't be determined, eg: no terminal is attached.
const DEFAULT_TERMINAL_WIDTH: u16 = 80;

fn terminal_width() -> usize {
    let columns = crossterm::terminal::size()
        .ok()
        .map(|(columns, _rows)| columns)
        .filter(|it| *it > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH);
    usize::from(columns)
}

pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = terminal_width();
        tracing::debug!("miette::set_hook -> terminal_width: {}", terminal_width);
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .force_graphical(true)
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
