// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use hexconv_cmdr::{CLIArg, ISSUES_URL, run_app, setup_default_miette_global_report_handler};

#[tokio::main]
async fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);
    // If no args are passed, help is printed thanks to `arg_required_else_help(true)`.
    let cli_arg = CLIArg::parse();
    run_app(cli_arg).await?;
    Ok(())
}
