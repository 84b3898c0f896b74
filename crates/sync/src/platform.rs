//! Per-platform locations of the editor's user config and executable.

use std::path::{Path, PathBuf};

/// Operating system families with distinct directory conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    MacOs,
    /// Linux and every other Unix-like target.
    Linux,
}

impl OsFamily {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` value; unknown systems are treated as Linux.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            _ => Self::Linux,
        }
    }
}

/// Names that tie the tool to one particular editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorProfile {
    /// Human-facing name used in messages.
    pub display_name: &'static str,
    /// Command name looked up on `PATH`.
    pub binary: &'static str,
    /// Directory under the platform config root holding `User/`.
    pub data_dir_name: &'static str,
    /// Install directory name used by the Windows installers.
    pub install_dir_name: &'static str,
}

impl EditorProfile {
    pub fn cursor() -> Self {
        Self {
            display_name: "Cursor",
            binary: "cursor",
            data_dir_name: "Cursor",
            install_dir_name: "cursor",
        }
    }

    /// Ordered executable candidates: the bare command first, then fixed
    /// Windows install locations (system-wide, then per-user).
    pub fn executable_candidates(&self, family: OsFamily, username: Option<&str>) -> Vec<String> {
        let mut candidates = vec![self.binary.to_string()];
        if family == OsFamily::Windows {
            candidates.push(format!(
                r"C:\Program Files\{}\resources\app\bin\{}.cmd",
                self.install_dir_name, self.binary
            ));
            if let Some(user) = username.filter(|u| !u.is_empty()) {
                candidates.push(format!(
                    r"C:\Users\{}\AppData\Local\Programs\{}\resources\app\bin\{}.cmd",
                    user, self.install_dir_name, self.binary
                ));
            }
        }
        candidates
    }
}

impl Default for EditorProfile {
    fn default() -> Self {
        Self::cursor()
    }
}

/// Returns the editor's per-user configuration directory.
///
/// Pure path computation: nothing is created and there is no failure
/// path. `appdata` is only consulted on Windows.
pub fn editor_user_dir(
    family: OsFamily,
    profile: &EditorProfile,
    home: &Path,
    appdata: Option<&Path>,
) -> PathBuf {
    let root = match family {
        OsFamily::Windows => appdata.map(Path::to_path_buf).unwrap_or_default(),
        OsFamily::MacOs => home.join("Library").join("Application Support"),
        OsFamily::Linux => home.join(".config"),
    };
    root.join(profile.data_dir_name).join("User")
}

/// Returns the user's home directory, or an empty path when it cannot be determined.
pub fn home_dir() -> PathBuf {
    #[cfg(unix)]
    if let Some(home) = std::env::var_os("HOME").filter(|h| !h.is_empty()) {
        return PathBuf::from(home);
    }
    dirs::home_dir().unwrap_or_default()
}

/// Returns the Windows roaming application-data directory (`%APPDATA%`).
pub fn appdata_dir() -> Option<PathBuf> {
    std::env::var_os("APPDATA")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}
