//! Installs the extensions from the store that the editor does not have yet.

use crate::editor::{enumerate, Editor};
use crate::error::EditorError;
use crate::extension::ExtensionId;
use crate::process::ProcessRunner;
use crate::report::{InstallOutcome, InstallReport};

/// Progress notifications emitted while installing, in order.
#[derive(Debug)]
pub enum InstallProgress<'a> {
    /// About to list what the editor already has.
    Checking,
    /// Listing failed; every desired extension will be attempted.
    ListingFailed(&'a EditorError),
    /// Desired extensions whose identity is already installed.
    AlreadyInstalled(&'a [ExtensionId]),
    /// Nothing left to install.
    UpToDate,
    /// `total` install commands are about to run.
    Starting { total: usize },
    /// Install `index` (1-based) of `total` is starting.
    Installing {
        index: usize,
        total: usize,
        id: &'a ExtensionId,
    },
    /// An install attempt finished.
    Finished {
        id: &'a ExtensionId,
        outcome: &'a InstallOutcome,
    },
}

/// Splits `desired` into (already installed, to install), keeping input order.
///
/// Identity ignores anything after the first `@`.
pub fn partition_installed(
    desired: &[ExtensionId],
    installed: &[ExtensionId],
) -> (Vec<ExtensionId>, Vec<ExtensionId>) {
    desired
        .iter()
        .cloned()
        .partition(|id| installed.iter().any(|have| have.matches(id)))
}

/// Installs every desired extension the editor is missing.
///
/// Fails only when no editor was resolved. Each install is attempted once,
/// sequentially; a failed install is recorded and the loop moves on.
/// Report entries list the already-installed identifiers first, then the
/// install attempts in input order.
pub fn install_missing<R: ProcessRunner>(
    editor: Option<&Editor<'_, R>>,
    editor_name: &str,
    desired: &[ExtensionId],
    mut progress: impl FnMut(InstallProgress<'_>),
) -> Result<InstallReport, EditorError> {
    let editor = editor.ok_or_else(|| EditorError::NotFound {
        editor: editor_name.to_string(),
    })?;

    progress(InstallProgress::Checking);
    let installed = match enumerate(Some(editor), editor_name) {
        Ok(installed) => installed,
        Err(err) => {
            progress(InstallProgress::ListingFailed(&err));
            Vec::new()
        }
    };

    let (already, to_install) = partition_installed(desired, &installed);
    let mut report = InstallReport::default();

    if !already.is_empty() {
        progress(InstallProgress::AlreadyInstalled(&already));
    }
    for id in already {
        report.push(id, InstallOutcome::AlreadyInstalled);
    }

    if to_install.is_empty() {
        progress(InstallProgress::UpToDate);
        return Ok(report);
    }

    let total = to_install.len();
    progress(InstallProgress::Starting { total });
    for (i, id) in to_install.into_iter().enumerate() {
        progress(InstallProgress::Installing {
            index: i + 1,
            total,
            id: &id,
        });
        let outcome = match editor.install_extension(&id) {
            Ok(()) => InstallOutcome::Installed,
            Err(err) => {
                tracing::warn!(extension = %id, error = %err, "extension install failed");
                InstallOutcome::Failed(err.to_string())
            }
        };
        progress(InstallProgress::Finished {
            id: &id,
            outcome: &outcome,
        });
        report.push(id, outcome);
    }

    Ok(report)
}
