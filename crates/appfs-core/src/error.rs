//! Errors from directory resolution and the file facade.

use std::io;
use std::path::{Path, PathBuf};

/// Coarse classification of an [`AppFsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The platform could not report the executable path, config root or program name.
    PlatformQuery,
    /// The target file does not exist.
    NotFound,
    /// Any other open, read, write or directory-creation failure.
    PlatformIo,
}

#[derive(Debug, thiserror::Error)]
pub enum AppFsError {
    #[error("could not determine executable path: {0}")]
    ExecutablePath(#[source] io::Error),
    #[error("executable path has no parent directory: {0}")]
    NoExecutableDir(PathBuf),
    #[error("could not determine user config directory")]
    NoConfigDir,
    #[error("could not determine program name from argv[0]")]
    NoProgramName,
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppFsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppFsError::ExecutablePath(_)
            | AppFsError::NoExecutableDir(_)
            | AppFsError::NoConfigDir
            | AppFsError::NoProgramName => ErrorKind::PlatformQuery,
            AppFsError::NotFound(_) => ErrorKind::NotFound,
            AppFsError::CreateDir { .. } | AppFsError::NotADirectory(_) | AppFsError::Io { .. } => {
                ErrorKind::PlatformIo
            }
        }
    }

    /// Maps an I/O error on `path`, keeping "not found" distinct from other failures.
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            AppFsError::NotFound(path.to_path_buf())
        } else {
            AppFsError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
