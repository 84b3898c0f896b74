//! Errors raised while talking to the editor's command line.

use std::io;
use thiserror::Error;

/// Errors that can occur when invoking the editor executable.
#[derive(Error, Debug)]
pub enum EditorError {
    /// No candidate executable answered the `--version` probe.
    #[error("could not find {editor} executable")]
    NotFound { editor: String },

    /// The process could not be started (missing binary, permissions).
    #[error("failed to spawn '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The process ran but exited unsuccessfully.
    #[error("'{program}' exited with code {exit_code:?}: {stderr}")]
    ProcessFailed {
        program: String,
        exit_code: Option<i32>,
        stderr: String,
    },
}
