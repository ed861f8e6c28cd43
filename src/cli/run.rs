//! CLI entry point and dispatch logic
//!
//! `run()` parses arguments, discovers configuration, installs logging,
//! dispatches to the command handlers and owns all error output.

use clap::Parser;
use copygen_utils::error::{
    ConfigError, ConfigurationError, GatewayError, GenerationError, UserFriendlyError,
};
use copygen_utils::exit_codes::{ExitCode, ToExitCode};
use copygen_utils::logging::init_tracing;

use super::args::{Cli, Commands};
use super::commands;
use crate::{CliArgs, Config};

/// Main CLI execution function.
///
/// Prints all output including errors. On failure returns the exit code
/// for main.rs to pass to `std::process::exit`.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    let cli_args = build_cli_args(&cli);

    let config = match Config::discover(&cli_args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err.display_for_user());
            return Err(err.to_exit_code());
        }
    };

    if let Err(e) = init_tracing(config.logging.verbose) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    match cli.command {
        Commands::Kinds { json } => print_rendered(commands::render_kinds(json)),
        Commands::Config { json } => print_rendered(commands::render_config(&config, json)),
        Commands::Generate(args) => {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    eprintln!("✗ Failed to create async runtime: {e}");
                    return Err(ExitCode::RUNTIME);
                }
            };

            let outcome = match rt.block_on(commands::execute_generate_command(&config, &args)) {
                Ok(outcome) => outcome,
                Err(err) => return Err(report_error(&err)),
            };

            print_rendered(commands::render_outcome(&outcome, args.pretty))?;
            if outcome.has_failures() {
                Err(ExitCode::PARTIAL_FAILURE)
            } else {
                Ok(())
            }
        }
    }
}

/// Map parsed flags onto configuration overrides.
fn build_cli_args(cli: &Cli) -> CliArgs {
    let mut cli_args = CliArgs {
        config_path: cli.config.clone(),
        backend_url: cli.backend_url.clone(),
        timeout_secs: cli.timeout,
        // Only an explicit flag overrides the config file
        verbose: cli.verbose.then_some(true),
        ..CliArgs::default()
    };

    if let Commands::Generate(args) = &cli.command {
        cli_args.tone.clone_from(&args.tone);
        cli_args.length.clone_from(&args.length);
        cli_args.style.clone_from(&args.style);
        cli_args.platform.clone_from(&args.platform);
    }

    cli_args
}

fn print_rendered(rendered: anyhow::Result<String>) -> Result<(), ExitCode> {
    match rendered {
        Ok(text) => {
            print!("{text}");
            if !text.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        Err(err) => Err(report_error(&err)),
    }
}

/// Print an error for the user and pick its exit code.
fn report_error(err: &anyhow::Error) -> ExitCode {
    if let Some(e) = err.downcast_ref::<GenerationError>() {
        eprintln!("{}", e.display_for_user());
        e.to_exit_code()
    } else if let Some(e) = err.downcast_ref::<ConfigurationError>() {
        eprintln!("{}", e.display_for_user());
        e.to_exit_code()
    } else if let Some(e) = err.downcast_ref::<ConfigError>() {
        eprintln!("{}", e.display_for_user());
        e.to_exit_code()
    } else if let Some(e) = err.downcast_ref::<GatewayError>() {
        eprintln!("Error: {e}");
        e.to_exit_code()
    } else {
        eprintln!("Error: {err:#}");
        ExitCode::RUNTIME
    }
}
