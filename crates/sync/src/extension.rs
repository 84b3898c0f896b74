//! Extension identifiers as reported by `--list-extensions --show-versions`.

use std::fmt;

/// A `publisher.name` identifier, optionally suffixed with `@version`.
///
/// Two identifiers refer to the same extension when the text before the
/// first `@` is equal; the version is ignored.
///
/// ```
/// use extsync_sync::ExtensionId;
///
/// let pinned = ExtensionId::new("rust-lang.rust-analyzer@0.3.2000");
/// assert_eq!(pinned.base(), "rust-lang.rust-analyzer");
/// assert_eq!(pinned.version(), Some("0.3.2000"));
/// assert!(pinned.matches(&ExtensionId::new("rust-lang.rust-analyzer")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExtensionId(String);

impl ExtensionId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Parses one line of editor output or store content.
    ///
    /// Returns `None` for blank lines.
    pub fn parse_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        (!trimmed.is_empty()).then(|| Self::new(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identity portion: everything before the first `@`.
    pub fn base(&self) -> &str {
        self.0.split_once('@').map_or(self.0.as_str(), |(base, _)| base)
    }

    /// Everything after the first `@`, if present.
    pub fn version(&self) -> Option<&str> {
        self.0.split_once('@').map(|(_, version)| version)
    }

    /// True when both identifiers name the same extension, ignoring versions.
    pub fn matches(&self, other: &ExtensionId) -> bool {
        self.base() == other.base()
    }
}

impl fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExtensionId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Parses line-oriented text into identifiers, skipping blank lines.
pub fn parse_lines(text: &str) -> Vec<ExtensionId> {
    text.lines().filter_map(ExtensionId::parse_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_without_version_is_whole_identifier() {
        let id = ExtensionId::new("esbenp.prettier-vscode");
        assert_eq!(id.base(), "esbenp.prettier-vscode");
        assert_eq!(id.version(), None);
    }

    #[test]
    fn matches_ignores_version_suffix() {
        /*
        GIVEN the same extension at two different versions
        WHEN comparing identity
        THEN they match
        */
        let installed = ExtensionId::new("foo.bar@1.0.0");
        let desired = ExtensionId::new("foo.bar@2.0.0");
        assert!(installed.matches(&desired));
        assert!(!installed.matches(&ExtensionId::new("foo.baz@1.0.0")));
    }

    #[test]
    fn splits_on_first_at_only() {
        let id = ExtensionId::new("odd.ext@1.0@beta");
        assert_eq!(id.base(), "odd.ext");
        assert_eq!(id.version(), Some("1.0@beta"));
        assert!(id.matches(&ExtensionId::new("odd.ext@2")));
    }

    #[test]
    fn parse_lines_trims_and_drops_blanks() {
        let ids = parse_lines("  a.b@1\n\n\t\nc.d  \r\n");
        assert_eq!(ids, vec![ExtensionId::new("a.b@1"), ExtensionId::new("c.d")]);
    }
}
