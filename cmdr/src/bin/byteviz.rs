// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use byteviz_cmdr::{AppConfig, CLIArg, CLICommand, Palette, try_run_command,
                   unrecoverable_error_message};
use byteviz_core::{CommonResult, setup_default_miette_global_report_handler, throws,
                   try_initialize_logging_global};
use clap::Parser;

const ERROR_REPORT_FOOTER: &str =
    "Run again with --enable-logging to write the details to log.txt";

#[tokio::main]
#[allow(clippy::needless_return)]
async fn main() -> CommonResult<()> {
    throws!({
        setup_default_miette_global_report_handler(ERROR_REPORT_FOOTER);

        // If no args are passed, the following line will fail, and help will be printed
        // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
        let cli_arg = CLIArg::parse();

        let enable_logging = cli_arg.global_options.enable_logging;
        enable_logging.then(|| {
            try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
            // % is Display, ? is Debug.
            tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
        });

        // `config init --force` has to work even when the file on disk is broken.
        let config = match cli_arg.command {
            CLICommand::Config { .. } => AppConfig::default(),
            _ => AppConfig::try_load(cli_arg.global_options.config.as_deref())?,
        };
        let palette = Palette::detect(cli_arg.global_options.no_color, config.color);

        let succeeded = launch_byteviz(&cli_arg, &config, palette).await;

        enable_logging.then(|| {
            tracing::debug!(message = "Stop logging...");
        });

        if !succeeded {
            std::process::exit(1);
        }
    })
}

/// Returns `false` if the command failed, after the problem has been printed.
async fn launch_byteviz(cli_arg: &CLIArg, config: &AppConfig, palette: Palette) -> bool {
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let output = tokio::io::stdout();

    let config_path = cli_arg.global_options.config.as_deref();
    match try_run_command(&cli_arg.command, config, config_path, palette, input, output)
        .await
    {
        Ok(()) => true,
        // Handle unrecoverable / unknown errors here.
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not run byteviz due to the following problem",
                error = ?error
            );
            eprintln!("{}", unrecoverable_error_message(palette, &error));
            false
        }
    }
}
