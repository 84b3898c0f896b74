use anyhow::Result;
use extsync_sync::{
    install_missing, resolve, sync_document, ConfigDocument, EditorError, ExtensionId,
    ExtensionStore, InstallOutcome, InstallProgress, MirrorOutcome, ProcessRunner, SyncConfig,
};

use super::listing_failed_message;

/// Handle the `import` command: project → editor.
pub(crate) fn handle_import_command<R: ProcessRunner>(config: &SyncConfig, runner: &R) -> Result<()> {
    println!("Importing {} setup...", config.profile.display_name);

    let store = ExtensionStore::new(config.extensions_file());
    match store.load() {
        Ok(desired) if desired.is_empty() => {
            tracing::debug!(path = %store.path().display(), "no saved extensions");
            println!("No extensions to install.");
        }
        Ok(desired) => install_extensions(config, runner, &desired),
        Err(err) => println!("Error: {err:#}"),
    }

    for doc in ConfigDocument::ALL {
        match sync_document(config, doc) {
            Ok(MirrorOutcome::Copied {
                destination,
                changed: true,
            }) => println!("Synced {} to {}", doc, destination.display()),
            Ok(MirrorOutcome::Copied { destination, .. }) => {
                println!("{} unchanged at {}", doc, destination.display())
            }
            Ok(MirrorOutcome::SourceMissing { .. }) => {
                println!("No {} found to sync.", doc.file_name())
            }
            Err(err) => println!("Error: {err:#}"),
        }
    }

    println!("Import completed!");
    Ok(())
}

fn install_extensions<R: ProcessRunner>(config: &SyncConfig, runner: &R, desired: &[ExtensionId]) {
    let editor = resolve(runner, &config.candidates);
    let result = install_missing(
        editor.as_ref(),
        config.profile.display_name,
        desired,
        |progress| print_progress(config, progress),
    );

    match result {
        Ok(report) if report.attempted() > 0 => println!("{}", report.format_summary()),
        Ok(_) => {}
        Err(EditorError::NotFound { editor: name }) => {
            println!("Error: Could not find {name} executable.")
        }
        Err(err) => println!("Error: {err}"),
    }
}

fn print_progress(config: &SyncConfig, progress: InstallProgress<'_>) {
    match progress {
        InstallProgress::Checking => println!("Checking for already installed extensions..."),
        InstallProgress::ListingFailed(_) => println!("{}", listing_failed_message(config)),
        InstallProgress::AlreadyInstalled(ids) => {
            println!("[OK] {} extensions already installed:", ids.len());
            for id in ids {
                println!("  - {id}");
            }
        }
        InstallProgress::UpToDate => println!("All extensions are already installed!"),
        InstallProgress::Starting { total } => {
            println!("\nInstalling {total} new extensions...")
        }
        InstallProgress::Installing { index, total, id } => {
            println!("[{index}/{total}] Installing {id}...")
        }
        InstallProgress::Finished { id, outcome } => match outcome {
            InstallOutcome::Failed(err) => {
                println!("  [ERROR] Warning: Failed to install {id}: {err}")
            }
            _ => println!("  [OK] Successfully installed {id}"),
        },
    }
}
