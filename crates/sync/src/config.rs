//! Paths and editor settings resolved once per invocation.

use crate::mirror::ConfigDocument;
use crate::platform::{appdata_dir, editor_user_dir, home_dir, EditorProfile, OsFamily};
use crate::Result;
use anyhow::Context;
use std::path::PathBuf;

/// Store file name inside the project directory.
pub const EXTENSIONS_FILE: &str = "extensions.txt";

/// Everything an operation needs to know about where things live.
///
/// Built once at startup and passed by reference to every operation.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub profile: EditorProfile,
    /// Directory holding `extensions.txt`, `settings.json` and `keybindings.json`.
    pub project_dir: PathBuf,
    /// The editor's per-user configuration directory.
    pub editor_user_dir: PathBuf,
    /// Executable candidates, probed in order.
    pub candidates: Vec<String>,
}

impl SyncConfig {
    /// Detects paths for the current platform, using the working directory as the project.
    pub fn detect() -> Result<Self> {
        let project_dir =
            std::env::current_dir().context("Could not determine the current directory")?;
        Ok(Self::for_platform(
            EditorProfile::default(),
            OsFamily::current(),
            project_dir,
        ))
    }

    /// Resolves the editor directory and executable candidates for `family`.
    pub fn for_platform(profile: EditorProfile, family: OsFamily, project_dir: PathBuf) -> Self {
        let editor_user_dir =
            editor_user_dir(family, &profile, &home_dir(), appdata_dir().as_deref());
        let username = std::env::var("USERNAME").ok();
        let candidates = profile.executable_candidates(family, username.as_deref());
        tracing::debug!(
            project = %project_dir.display(),
            editor_dir = %editor_user_dir.display(),
            ?candidates,
            "resolved sync configuration"
        );
        Self {
            profile,
            project_dir,
            editor_user_dir,
            candidates,
        }
    }

    /// Creates a config with explicit directories (for testing or embedding).
    pub fn with_dirs(project_dir: impl Into<PathBuf>, editor_user_dir: impl Into<PathBuf>) -> Self {
        let profile = EditorProfile::default();
        let candidates = vec![profile.binary.to_string()];
        Self {
            profile,
            project_dir: project_dir.into(),
            editor_user_dir: editor_user_dir.into(),
            candidates,
        }
    }

    /// Replaces the executable candidate list.
    pub fn with_candidates(mut self, candidates: Vec<String>) -> Self {
        self.candidates = candidates;
        self
    }

    pub fn extensions_file(&self) -> PathBuf {
        self.project_dir.join(EXTENSIONS_FILE)
    }

    /// Project-side copy of a configuration document.
    pub fn project_file(&self, doc: ConfigDocument) -> PathBuf {
        self.project_dir.join(doc.file_name())
    }

    /// Editor-side copy of a configuration document.
    pub fn editor_file(&self, doc: ConfigDocument) -> PathBuf {
        self.editor_user_dir.join(doc.file_name())
    }
}
