//! Target path handling

use std::path::{Path, PathBuf};

/// Path of a file an edit is applied to.
///
/// On Windows, separators are stored as forward slashes so log lines and
/// reports look the same on every platform; converted back with
/// [`TargetPath::to_native`] at the I/O boundary. Elsewhere a backslash is
/// an ordinary file name character and is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetPath {
    inner: String,
}

impl TargetPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy();
        Self {
            inner: normalize_separators(&raw),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Platform-native form for I/O.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// True for absolute paths, including `C:/` style drive paths.
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/')
            || self
                .inner
                .as_bytes()
                .get(1..3)
                .is_some_and(|rest| rest == b":/")
    }

    /// Resolve `segment` relative to this path. Absolute segments win.
    pub fn join(&self, segment: impl AsRef<Path>) -> Self {
        let other = Self::new(segment);
        if other.is_absolute() || self.inner.is_empty() {
            return other;
        }
        let base = self.inner.trim_end_matches('/');
        Self {
            inner: format!("{}/{}", base, other.inner),
        }
    }

    /// Directory containing this path, if any.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            Some(idx) => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            None => None,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.inner
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
    }

    /// Extension without the dot. Dotfiles like `.env` have none.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }

    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }
}

#[cfg(windows)]
fn normalize_separators(raw: &str) -> String {
    raw.replace('\\', "/")
}

#[cfg(not(windows))]
fn normalize_separators(raw: &str) -> String {
    raw.to_string()
}

impl AsRef<Path> for TargetPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for TargetPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<&str> for TargetPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TargetPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for TargetPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for TargetPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
