use anyhow::Result;
use extsync_sync::{
    export_document, resolve, ConfigDocument, ExtensionStore, MirrorOutcome, ProcessRunner,
    SyncConfig,
};

use super::installed_or_warn;

/// Handle the `export` command: editor → project.
///
/// Each step reports its own failure and the remaining steps still run.
pub(crate) fn handle_export_command<R: ProcessRunner>(config: &SyncConfig, runner: &R) -> Result<()> {
    println!(
        "Exporting current {} setup...",
        config.profile.display_name
    );

    let editor = resolve(runner, &config.candidates);
    let installed = installed_or_warn(editor.as_ref(), config);
    // An empty listing carries no information; keep the existing store.
    if !installed.is_empty() {
        let store = ExtensionStore::new(config.extensions_file());
        match store.save(&installed) {
            Ok(count) => println!("Saved {} extensions to {}", count, store.path().display()),
            Err(err) => println!("Error: {err:#}"),
        }
    }

    for doc in ConfigDocument::ALL {
        match export_document(config, doc) {
            Ok(MirrorOutcome::Copied {
                destination,
                changed: true,
            }) => println!("Exported {} to {}", doc, destination.display()),
            Ok(MirrorOutcome::Copied { destination, .. }) => {
                println!("{} unchanged at {}", doc, destination.display())
            }
            Ok(MirrorOutcome::SourceMissing { source }) => {
                tracing::debug!(source = %source.display(), "nothing to export");
            }
            Err(err) => println!("Error: {err:#}"),
        }
    }

    println!("Export completed!");
    Ok(())
}
