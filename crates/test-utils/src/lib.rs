//! Shared test utilities for extsync crates.
//!
//! Provides env-var guards plus a temporary workspace with a project
//! directory, a fake home, and (on Unix) a scriptable stand-in for the
//! editor executable.

use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = extsync_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value"
/// // When _guard drops, MY_VAR is restored to its original value
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// Temporary project, home and editor directories.
///
/// The tempdir is automatically cleaned up when this struct is dropped.
pub struct SyncFixture {
    pub tempdir: tempfile::TempDir,
    /// Directory holding `extensions.txt` and the JSON copies.
    pub project_dir: PathBuf,
    /// Stand-in for `$HOME`.
    pub home_dir: PathBuf,
    /// Linux-style editor user dir under the fake home (`.config/Cursor/User`).
    pub editor_dir: PathBuf,
    /// Directory for fake executables; prepend it to `PATH`.
    pub bin_dir: PathBuf,
}

impl SyncFixture {
    /// Creates the project, home and bin directories.
    ///
    /// The editor directory is NOT created so tests can observe whether
    /// an operation creates it.
    pub fn new() -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let project_dir = tempdir.path().join("project");
        let home_dir = tempdir.path().join("home");
        let bin_dir = tempdir.path().join("bin");
        let editor_dir = home_dir.join(".config/Cursor/User");

        std::fs::create_dir_all(&project_dir)?;
        std::fs::create_dir_all(&home_dir)?;
        std::fs::create_dir_all(&bin_dir)?;

        Ok(Self {
            tempdir,
            project_dir,
            home_dir,
            editor_dir,
            bin_dir,
        })
    }

    /// Create an RAII guard that sets HOME to this fixture's home directory.
    pub fn home_guard(&self) -> EnvVarGuard {
        set_env_var("HOME", Some(self.home_dir.to_str().unwrap()))
    }

    /// Writes a file relative to the project directory.
    pub fn write_project_file(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.project_dir.join(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Writes a file into the editor user directory, creating it first.
    pub fn write_editor_file(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(&self.editor_dir)?;
        let path = self.editor_dir.join(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// File the fake editor reads for `--list-extensions` and appends to on install.
    pub fn installed_list(&self) -> PathBuf {
        self.tempdir.path().join("fake-editor-installed.txt")
    }

    /// Log of every `--install-extension` argument the fake editor received.
    pub fn install_log(&self) -> PathBuf {
        self.tempdir.path().join("fake-editor-installs.log")
    }

    /// Identifiers passed to `--install-extension`, in call order.
    pub fn installs(&self) -> Vec<String> {
        std::fs::read_to_string(self.install_log())
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// Writes an executable shell script named `name` into `dir` that behaves
/// like the editor CLI.
///
/// - `--version` succeeds.
/// - `--list-extensions --show-versions` prints `installed_list`.
/// - `--install-extension <id>` fails for ids in `failing`, otherwise
///   appends to `installed_list` and `install_log`.
#[cfg(unix)]
pub fn write_fake_editor(
    dir: &Path,
    name: &str,
    installed_list: &Path,
    install_log: &Path,
    failing: &[&str],
) -> std::io::Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let script = format!(
        r#"#!/bin/sh
case "$1" in
  --version)
    echo "0.42.0-fake"
    exit 0
    ;;
  --list-extensions)
    cat "{installed}" 2>/dev/null
    exit 0
    ;;
  --install-extension)
    echo "$2" >> "{log}"
    case " {failing} " in
      *" $2 "*)
        echo "Extension '$2' not found." >&2
        exit 1
        ;;
    esac
    echo "$2" >> "{installed}"
    exit 0
    ;;
esac
exit 2
"#,
        installed = installed_list.display(),
        log = install_log.display(),
        failing = failing.join(" "),
    );

    let path = dir.join(name);
    std::fs::write(&path, script)?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
    Ok(path)
}

/// Writes an executable that fails every invocation.
#[cfg(unix)]
pub fn write_broken_editor(dir: &Path, name: &str) -> std::io::Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, "#!/bin/sh\necho 'broken' >&2\nexit 1\n")?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_env_var_sets_and_restores() {
        let _g = env_guard();

        const KEY: &str = "EXTSYNC_TEST_UTILS_TEST_VAR";
        std::env::remove_var(KEY);

        {
            let _guard = set_env_var(KEY, Some("test_value"));
            assert_eq!(std::env::var(KEY).ok(), Some("test_value".to_string()));
        }
        assert!(std::env::var(KEY).is_err());
    }

    #[test]
    fn test_set_env_var_removes_when_none() {
        let _g = env_guard();

        const KEY: &str = "EXTSYNC_TEST_REMOVE_VAR";
        std::env::set_var(KEY, "exists");

        {
            let _guard = set_env_var(KEY, None);
            assert!(std::env::var(KEY).is_err());
        }
        assert_eq!(std::env::var(KEY).ok(), Some("exists".to_string()));

        std::env::remove_var(KEY);
    }

    #[test]
    fn test_fixture_leaves_editor_dir_absent() {
        let fixture = SyncFixture::new().expect("fixture creation");
        assert!(fixture.project_dir.is_dir());
        assert!(fixture.bin_dir.is_dir());
        assert!(!fixture.editor_dir.exists());
        assert!(fixture.editor_dir.starts_with(&fixture.home_dir));
    }

    #[test]
    fn test_fixture_home_guard() {
        let _g = env_guard();
        let fixture = SyncFixture::new().expect("fixture creation");

        let original_home = std::env::var("HOME").ok();
        {
            let _home_guard = fixture.home_guard();
            assert_eq!(
                std::env::var("HOME").unwrap(),
                fixture.home_dir.to_str().unwrap()
            );
        }
        assert_eq!(std::env::var("HOME").ok(), original_home);
    }

    #[cfg(unix)]
    #[test]
    fn test_fake_editor_records_installs() {
        let fixture = SyncFixture::new().expect("fixture creation");
        let editor = write_fake_editor(
            &fixture.bin_dir,
            "cursor",
            &fixture.installed_list(),
            &fixture.install_log(),
            &["bad.ext"],
        )
        .unwrap();

        let ok = std::process::Command::new(&editor)
            .args(["--install-extension", "good.ext"])
            .status()
            .unwrap();
        let bad = std::process::Command::new(&editor)
            .args(["--install-extension", "bad.ext"])
            .status()
            .unwrap();

        assert!(ok.success());
        assert!(!bad.success());
        assert_eq!(fixture.installs(), vec!["good.ext", "bad.ext"]);
        let listed = std::process::Command::new(&editor)
            .args(["--list-extensions", "--show-versions"])
            .output()
            .unwrap();
        assert_eq!(String::from_utf8_lossy(&listed.stdout), "good.ext\n");
    }
}
