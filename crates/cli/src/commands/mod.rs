//! CLI command handlers for the extsync application.

mod export;
mod help;
mod import;
mod status;

pub(crate) use export::handle_export_command;
pub(crate) use help::{handle_help_command, print_usage};
pub(crate) use import::handle_import_command;
pub(crate) use status::handle_status_command;

use extsync_sync::{enumerate, Editor, ExtensionId, ProcessRunner, SyncConfig};

/// Message shown whenever the installed list cannot be obtained.
pub(crate) fn listing_failed_message(config: &SyncConfig) -> String {
    format!(
        "Error: Could not run '{} --list-extensions'. Make sure {} is installed and accessible.",
        config.profile.binary, config.profile.display_name
    )
}

/// Lists installed extensions, printing a warning and returning an empty
/// list when that is not possible.
pub(crate) fn installed_or_warn<R: ProcessRunner>(
    editor: Option<&Editor<'_, R>>,
    config: &SyncConfig,
) -> Vec<ExtensionId> {
    match enumerate(editor, config.profile.display_name) {
        Ok(installed) => installed,
        Err(err) => {
            tracing::debug!(error = %err, "treating installed extensions as unknown");
            println!("{}", listing_failed_message(config));
            Vec::new()
        }
    }
}
