//! Locating the editor executable and querying its extensions.

use crate::error::EditorError;
use crate::extension::{parse_lines, ExtensionId};
use crate::process::{EditorCommand, ProcessRunner};

/// A probed, working editor executable.
#[derive(Debug)]
pub struct Editor<'r, R: ProcessRunner> {
    program: String,
    runner: &'r R,
}

impl<'r, R: ProcessRunner> Editor<'r, R> {
    /// Wraps a program without probing it.
    pub fn new(program: impl Into<String>, runner: &'r R) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    /// The invocation string that passed the probe.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Runs `--list-extensions --show-versions` and parses one identifier per line.
    pub fn list_extensions(&self) -> Result<Vec<ExtensionId>, EditorError> {
        let output = self
            .runner
            .run(&self.program, &EditorCommand::ListExtensions)?;
        Ok(parse_lines(&output.stdout))
    }

    /// Runs `--install-extension <id>`.
    pub fn install_extension(&self, id: &ExtensionId) -> Result<(), EditorError> {
        self.runner
            .run(&self.program, &EditorCommand::InstallExtension(id.clone()))
            .map(|_| ())
    }
}

/// Probes `candidates` in order and returns the first that answers `--version`.
///
/// Probe failures are not reported; they only move on to the next candidate.
pub fn resolve<'r, R: ProcessRunner>(runner: &'r R, candidates: &[String]) -> Option<Editor<'r, R>> {
    candidates.iter().find_map(|candidate| {
        match runner.run(candidate, &EditorCommand::Version) {
            Ok(_) => {
                tracing::debug!(program = %candidate, "editor executable resolved");
                Some(Editor::new(candidate.clone(), runner))
            }
            Err(err) => {
                tracing::debug!(program = %candidate, error = %err, "editor probe failed");
                None
            }
        }
    })
}

/// Lists installed extensions through an already-resolved editor.
///
/// Callers treat an error as "no information", not as "nothing installed".
pub fn enumerate<R: ProcessRunner>(
    editor: Option<&Editor<'_, R>>,
    editor_name: &str,
) -> Result<Vec<ExtensionId>, EditorError> {
    let editor = editor.ok_or_else(|| EditorError::NotFound {
        editor: editor_name.to_string(),
    })?;
    let installed = editor.list_extensions().inspect_err(|err| {
        tracing::warn!(program = editor.program(), error = %err, "listing extensions failed");
    })?;
    tracing::debug!(count = installed.len(), "enumerated installed extensions");
    Ok(installed)
}
