//! Subprocess seam for the editor's command line.

use crate::error::EditorError;
use crate::extension::ExtensionId;
use std::process::{Command, Stdio};

#[cfg(test)]
use mockall::automock;

/// Sub-commands understood by the editor executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    /// Cheap availability probe (`--version`).
    Version,
    /// `--list-extensions --show-versions`, one `id@version` per line.
    ListExtensions,
    /// `--install-extension <id>`.
    InstallExtension(ExtensionId),
}

impl EditorCommand {
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::Version => vec!["--version".to_string()],
            Self::ListExtensions => vec![
                "--list-extensions".to_string(),
                "--show-versions".to_string(),
            ],
            Self::InstallExtension(id) => {
                vec!["--install-extension".to_string(), id.to_string()]
            }
        }
    }
}

/// Captured output of a successful invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs editor sub-commands. A non-zero exit is reported as an error.
#[cfg_attr(test, automock)]
pub trait ProcessRunner {
    fn run(&self, program: &str, command: &EditorCommand) -> Result<ProcessOutput, EditorError>;
}

/// Runs commands as real child processes and blocks until they exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, command: &EditorCommand) -> Result<ProcessOutput, EditorError> {
        let args = command.args();
        tracing::debug!(program, ?args, "running editor command");

        let output = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| EditorError::SpawnFailed {
                program: program.to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            tracing::debug!(program, code = ?output.status.code(), "editor command failed");
            return Err(EditorError::ProcessFailed {
                program: program.to_string(),
                exit_code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(ProcessOutput { stdout, stderr })
    }
}
