// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use colorconv_cmdr::{App, CLIArg, CLICommand, OutputMode, Settings, UiStrings,
                     try_initialize_logging_global};

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    let tracing_config = cli_arg.global_options.tracing_config();
    let enable_logging = tracing_config.is_some();
    if let Some(tracing_config) = tracing_config {
        try_initialize_logging_global(tracing_config).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let CLIArg {
        command,
        global_options,
    } = cli_arg;

    let settings = Settings::load_or_default(global_options.settings.as_deref());
    let language = settings.resolve_language(global_options.language);
    let ui = UiStrings::from(language);
    let app = App::new(ui, OutputMode::detect());

    let result = app.run_command(
        command.unwrap_or(CLICommand::Interactive),
        &mut std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
    );

    if let Err(ref report) = result {
        // % is Display, ? is Debug.
        tracing::error!(
            message = "Could not run colorconv due to the following problem",
            error = ?report
        );
        eprintln!("{}:", ui.unrecoverable_error_message());
    }

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    result
}
