//! Editor extension and configuration sync for extsync.
//!
//! Keeps an editor's installed extensions and its `settings.json` /
//! `keybindings.json` in plain files that live next to a project, so the
//! whole setup can be committed and replayed on another machine. The
//! editor itself is only ever reached through its command line.
//!
//! # Examples
//!
//! ```
//! use extsync_sync::{
//!     install_missing, resolve, EditorCommand, EditorError, ExtensionId, ProcessOutput,
//!     ProcessRunner,
//! };
//!
//! struct FakeEditor;
//!
//! impl ProcessRunner for FakeEditor {
//!     fn run(&self, _program: &str, command: &EditorCommand) -> Result<ProcessOutput, EditorError> {
//!         let stdout = match command {
//!             EditorCommand::ListExtensions => "foo.bar@1.0.0\n".to_string(),
//!             _ => String::new(),
//!         };
//!         Ok(ProcessOutput { stdout, stderr: String::new() })
//!     }
//! }
//!
//! let runner = FakeEditor;
//! let editor = resolve(&runner, &["cursor".to_string()]);
//! let desired = vec![ExtensionId::new("foo.bar@2.0.0"), ExtensionId::new("baz.qux")];
//! let report = install_missing(editor.as_ref(), "Cursor", &desired, |_| {}).unwrap();
//! assert_eq!(report.already_installed().count(), 1);
//! assert_eq!(report.installed_count(), 1);
//! ```

#![deny(unsafe_code)]

pub type Error = anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub mod config;
pub mod editor;
pub mod error;
pub mod extension;
pub mod installer;
pub mod mirror;
pub mod platform;
pub mod process;
pub mod report;
pub mod store;
pub(crate) mod utils;

pub use config::SyncConfig;
pub use editor::{enumerate, resolve, Editor};
pub use error::EditorError;
pub use extension::ExtensionId;
pub use installer::{install_missing, partition_installed, InstallProgress};
pub use mirror::{export_document, sync_document, ConfigDocument};
pub use platform::{editor_user_dir, EditorProfile, OsFamily};
pub use process::{EditorCommand, ProcessOutput, ProcessRunner, SystemRunner};
pub use report::{InstallEntry, InstallOutcome, InstallReport, MirrorOutcome};
pub use store::ExtensionStore;
