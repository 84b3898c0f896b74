use anyhow::Result;
use extsync_sync::{resolve, ConfigDocument, ExtensionId, ExtensionStore, ProcessRunner, SyncConfig};

use super::installed_or_warn;

/// Handle the `status` command. Read-only.
pub(crate) fn handle_status_command<R: ProcessRunner>(config: &SyncConfig, runner: &R) -> Result<()> {
    println!(
        "=== {} Extensions Sync Status ===",
        config.profile.display_name
    );

    let editor = resolve(runner, &config.candidates);
    let installed = installed_or_warn(editor.as_ref(), config);
    print_list("Installed extensions", installed);

    let saved = ExtensionStore::new(config.extensions_file())
        .load()
        .unwrap_or_else(|err| {
            println!("Error: {err:#}");
            Vec::new()
        });
    print_list("Saved extensions", saved);

    println!(
        "\nSettings file: {}",
        mark(config.project_file(ConfigDocument::Settings).exists())
    );
    println!(
        "Keybindings file: {}",
        mark(config.project_file(ConfigDocument::Keybindings).exists())
    );
    Ok(())
}

fn print_list(title: &str, mut ids: Vec<ExtensionId>) {
    ids.sort();
    println!("\n{}: {}", title, ids.len());
    for id in &ids {
        println!("  - {id}");
    }
}

fn mark(present: bool) -> &'static str {
    if present {
        "✓"
    } else {
        "✗"
    }
}
