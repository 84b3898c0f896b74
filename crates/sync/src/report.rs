//! Reporting types for install and mirror operations. Nothing here is persisted.

use crate::extension::ExtensionId;
use std::path::PathBuf;

/// Per-identifier result of an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// An extension with the same identity was already present.
    AlreadyInstalled,
    /// The install command succeeded.
    Installed,
    /// The install command failed; holds the underlying error text.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallEntry {
    pub id: ExtensionId,
    pub outcome: InstallOutcome,
}

/// Outcomes for every desired identifier, in input order.
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    pub entries: Vec<InstallEntry>,
}

impl InstallReport {
    pub fn push(&mut self, id: ExtensionId, outcome: InstallOutcome) {
        self.entries.push(InstallEntry { id, outcome });
    }

    pub fn already_installed(&self) -> impl Iterator<Item = &ExtensionId> {
        self.entries
            .iter()
            .filter(|e| e.outcome == InstallOutcome::AlreadyInstalled)
            .map(|e| &e.id)
    }

    pub fn installed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome == InstallOutcome::Installed)
            .count()
    }

    /// Failed identifiers with their error text.
    pub fn failures(&self) -> impl Iterator<Item = (&ExtensionId, &str)> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            InstallOutcome::Failed(err) => Some((&e.id, err.as_str())),
            _ => None,
        })
    }

    /// Number of identifiers an install was attempted for.
    pub fn attempted(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome != InstallOutcome::AlreadyInstalled)
            .count()
    }

    pub fn format_summary(&self) -> String {
        format!(
            "Installed {} of {} new extensions ({} failed, {} already present)",
            self.installed_count(),
            self.attempted(),
            self.failures().count(),
            self.already_installed().count()
        )
    }
}

/// Result of mirroring one configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorOutcome {
    /// The source file was absent; nothing was touched.
    SourceMissing { source: PathBuf },
    /// The source was copied over the destination.
    Copied {
        destination: PathBuf,
        /// False when the destination already held identical bytes.
        changed: bool,
    },
}
