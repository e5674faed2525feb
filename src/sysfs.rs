use crate::error::{Error, Result};
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
#[cfg(test)]
use std::sync::{LazyLock, Mutex};

#[cfg(test)]
static DENIED_PATHS: LazyLock<Mutex<Vec<PathBuf>>> = LazyLock::new(|| Mutex::new(Vec::new()));

/// Abstraction over sysfs/procfs filesystem root.
/// Defaults to `/` in production, redirectable to a temp directory for testing
/// or to a container rootfs.
#[derive(Debug, Clone)]
pub struct SysfsRoot {
    root: PathBuf,
}

impl Default for SysfsRoot {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/"),
        }
    }
}

impl SysfsRoot {
    /// Create a SysfsRoot pointing at the real system.
    pub fn system() -> Self {
        Self::default()
    }

    /// Create a SysfsRoot pointing at a custom directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a path relative to this root.
    /// e.g., `path("sys/class/net")` -> `/sys/class/net` or `<test_root>/sys/class/net`
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Read a single-value control file, trimming whitespace.
    ///
    /// Returns `None` if the file does not exist, including when a parent is a
    /// plain file (`sys/class/net/bonding_masters/ifindex`). Content that is not
    /// UTF-8 is `MalformedData`; permission problems are errors.
    pub fn read_optional(&self, relative: impl AsRef<Path>) -> Result<Option<String>> {
        let path = self.path(relative);
        match read_bytes(&path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(s) => Ok(Some(s.trim().to_string())),
                Err(e) => Err(Error::MalformedData {
                    path,
                    detail: format!("not valid UTF-8: {}", e),
                }),
            },
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                Ok(None)
            }
            Err(e) => Err(Error::from_io(path, e)),
        }
    }

    /// Read a pseudo-file line by line.
    /// A missing file is reported as `SourceUnavailable`.
    pub fn read_lines(&self, relative: impl AsRef<Path>) -> Result<Vec<String>> {
        let path = self.path(relative);
        let file = std::fs::File::open(&path).map_err(|e| unavailable_or_io(&path, e))?;
        let mut lines = Vec::new();
        for line in BufReader::new(file).lines() {
            lines.push(line.map_err(|e| Error::from_io(path.clone(), e))?);
        }
        Ok(lines)
    }

    /// List entries in a directory, sorted by name.
    /// A missing directory is reported as `SourceUnavailable`.
    pub fn list_dir(&self, relative: impl AsRef<Path>) -> Result<Vec<String>> {
        let path = self.path(relative);
        let entries = std::fs::read_dir(&path).map_err(|e| unavailable_or_io(&path, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::from_io(path.clone(), e))?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    tracing::debug!("skipping non UTF-8 entry {:?} in {}", raw, path.display())
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Check if a path is a directory (following symlinks, as sysfs needs).
    pub fn is_dir(&self, relative: impl AsRef<Path>) -> bool {
        self.path(relative).is_dir()
    }

    /// Get the root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn read_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    #[cfg(test)]
    {
        let denied = DENIED_PATHS.lock().expect("denied paths lock poisoned");
        if denied.iter().any(|p| p == path) {
            return Err(std::io::Error::from(ErrorKind::PermissionDenied));
        }
    }
    std::fs::read(path)
}

/// Reads of `path` fail with `PermissionDenied` until the guard is dropped.
/// Root ignores file modes, so tests cannot rely on `chmod 000`.
#[cfg(test)]
pub(crate) struct DeniedPathGuard {
    path: PathBuf,
}

#[cfg(test)]
impl Drop for DeniedPathGuard {
    fn drop(&mut self) {
        DENIED_PATHS
            .lock()
            .expect("denied paths lock poisoned")
            .retain(|p| p != &self.path);
    }
}

#[cfg(test)]
pub(crate) fn deny_path_for_tests(path: PathBuf) -> DeniedPathGuard {
    DENIED_PATHS
        .lock()
        .expect("denied paths lock poisoned")
        .push(path.clone());
    DeniedPathGuard { path }
}

fn unavailable_or_io(path: &Path, e: std::io::Error) -> Error {
    if e.kind() == ErrorKind::NotFound {
        Error::SourceUnavailable {
            path: path.to_path_buf(),
        }
    } else {
        Error::from_io(path.to_path_buf(), e)
    }
}
