//! Entry point and command dispatch.

use crate::cli::{Cli, SyncCommand};
use crate::commands::{
    handle_export_command, handle_help_command, handle_import_command, handle_status_command,
    print_usage,
};
use anyhow::Result;
use clap::Parser;
use extsync_sync::{ProcessRunner, SyncConfig, SystemRunner};

/// The main entry point for the `extsync` application.
///
/// Always returns `Ok`: failures are printed, never turned into an exit code.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    let Some(raw) = cli.command else {
        print_usage();
        return Ok(());
    };

    let command = match raw.parse::<SyncCommand>() {
        Ok(command) => command,
        Err(unknown) => {
            println!("{unknown}");
            println!("Use 'extsync help' for usage information.");
            return Ok(());
        }
    };

    if command == SyncCommand::Help {
        handle_help_command();
        return Ok(());
    }

    let config = match SyncConfig::detect() {
        Ok(config) => config,
        Err(err) => {
            println!("Error: {err:#}");
            return Ok(());
        }
    };

    if let Err(err) = dispatch(command, &config, &SystemRunner) {
        tracing::debug!(?command, error = ?err, "command failed");
        println!("Error: {err:#}");
    }
    Ok(())
}

pub(crate) fn dispatch<R: ProcessRunner>(
    command: SyncCommand,
    config: &SyncConfig,
    runner: &R,
) -> Result<()> {
    tracing::debug!(?command, "dispatching");
    match command {
        SyncCommand::Export => handle_export_command(config, runner),
        SyncCommand::Import => handle_import_command(config, runner),
        SyncCommand::Status => handle_status_command(config, runner),
        SyncCommand::Help => {
            handle_help_command();
            Ok(())
        }
    }
}
