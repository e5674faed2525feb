use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backing directory or pseudo-file of a discovery source is absent.
    #[error("source unavailable: {path}")]
    SourceUnavailable { path: PathBuf },

    #[error("permission denied: {path}: {source}")]
    PermissionDenied {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("interface not found: {name}")]
    InterfaceNotFound { name: String },

    #[error("no interface corresponds to index {index}")]
    IndexNotFound { index: u32 },

    #[error("malformed data in {path}: {detail}")]
    MalformedData { path: PathBuf, detail: String },

    #[error("read failed: {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid input '{input}': {detail}")]
    Parse { input: String, detail: String },
}

impl Error {
    /// Sort an I/O failure on `path` into the error taxonomy.
    ///
    /// `NotFound` is reported as `Read` here; callers that give absence a
    /// meaning of their own check the kind before calling this.
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Error::PermissionDenied { path, source },
            _ => Error::Read { path, source },
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Error::PermissionDenied { .. })
    }

    /// True for "nothing there" conditions: missing source, interface or index.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::SourceUnavailable { .. }
                | Error::InterfaceNotFound { .. }
                | Error::IndexNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_from_io_permission_denied() {
        let err = Error::from_io(
            PathBuf::from("/sys/class/net/eth0/ifindex"),
            IoError::from(ErrorKind::PermissionDenied),
        );
        assert!(err.is_permission_denied());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_from_io_other_is_read() {
        let err = Error::from_io(PathBuf::from("/x"), IoError::from(ErrorKind::Interrupted));
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn test_not_found_variants() {
        assert!(Error::IndexNotFound { index: 7 }.is_not_found());
        assert!(
            Error::InterfaceNotFound {
                name: "eth9".into()
            }
            .is_not_found()
        );
        let malformed = Error::MalformedData {
            path: PathBuf::from("/x"),
            detail: "bad".into(),
        };
        assert!(!malformed.is_not_found());
        assert!(!malformed.is_permission_denied());
    }
}
