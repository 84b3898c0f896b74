//! Verbatim copies of the editor's JSON config files.
//!
//! Files are never parsed or merged: the whole document is copied byte
//! for byte, replacing whatever was at the destination.

use crate::config::SyncConfig;
use crate::report::MirrorOutcome;
use crate::utils::hash_content;
use crate::Result;
use anyhow::Context;
use std::fmt;
use std::fs;
use std::path::Path;

/// The two documents kept in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDocument {
    Settings,
    Keybindings,
}

impl ConfigDocument {
    pub const ALL: [ConfigDocument; 2] = [ConfigDocument::Settings, ConfigDocument::Keybindings];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Settings => "settings.json",
            Self::Keybindings => "keybindings.json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Keybindings => "keybindings",
        }
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Copies the project's document into the editor's user directory.
pub fn sync_document(config: &SyncConfig, doc: ConfigDocument) -> Result<MirrorOutcome> {
    copy_verbatim(&config.project_file(doc), &config.editor_file(doc))
}

/// Copies the editor's document into the project directory.
pub fn export_document(config: &SyncConfig, doc: ConfigDocument) -> Result<MirrorOutcome> {
    copy_verbatim(&config.editor_file(doc), &config.project_file(doc))
}

fn copy_verbatim(source: &Path, destination: &Path) -> Result<MirrorOutcome> {
    if !source.exists() {
        tracing::debug!(source = %source.display(), "mirror source missing, skipping");
        return Ok(MirrorOutcome::SourceMissing {
            source: source.to_path_buf(),
        });
    }

    let content =
        fs::read(source).with_context(|| format!("Failed to read {}", source.display()))?;
    let changed = match fs::read(destination) {
        Ok(existing) => hash_content(&existing) != hash_content(&content),
        Err(_) => true,
    };

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(destination, &content)
        .with_context(|| format!("Failed to write {}", destination.display()))?;

    tracing::debug!(
        source = %source.display(),
        destination = %destination.display(),
        bytes = content.len(),
        changed,
        "mirrored config document"
    );
    Ok(MirrorOutcome::Copied {
        destination: destination.to_path_buf(),
        changed,
    })
}
