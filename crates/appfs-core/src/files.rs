//! Open, read and write files relative to the executable or app data directory.
//!
//! Each call resolves its base directory afresh; nothing is cached. Fragments are
//! joined with [`Path::join`], so an absolute fragment replaces the base.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_data::app_data_dir;
use crate::category::DataCategory;
use crate::error::AppFsError;
use crate::exe_dir::executable_dir;

/// Which directory a path fragment is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// The directory containing the running executable.
    Executable,
    /// The program's app data directory for the given category (created on demand).
    AppData(DataCategory),
}

impl Base {
    /// Resolves the base directory.
    pub fn resolve(self) -> Result<PathBuf, AppFsError> {
        match self {
            Base::Executable => executable_dir(),
            Base::AppData(category) => app_data_dir(category),
        }
    }
}

/// Joins `fragment` onto the resolved base without touching the file.
pub fn resolve_path(base: Base, fragment: impl AsRef<Path>) -> Result<PathBuf, AppFsError> {
    Ok(base.resolve()?.join(fragment))
}

/// Opens a file read-only. Never creates it.
pub fn open_file(base: Base, fragment: impl AsRef<Path>) -> Result<File, AppFsError> {
    open_in(&base.resolve()?, fragment.as_ref())
}

/// Reads the whole file into memory.
pub fn read_file(base: Base, fragment: impl AsRef<Path>) -> Result<Vec<u8>, AppFsError> {
    read_in(&base.resolve()?, fragment.as_ref())
}

/// Reads the whole file as UTF-8 text.
pub fn read_to_string(base: Base, fragment: impl AsRef<Path>) -> Result<String, AppFsError> {
    read_string_in(&base.resolve()?, fragment.as_ref())
}

/// Creates or truncates the file, writes all of `data`, and returns the byte count.
pub fn write_file(
    base: Base,
    fragment: impl AsRef<Path>,
    data: impl AsRef<[u8]>,
) -> Result<usize, AppFsError> {
    write_in(&base.resolve()?, fragment.as_ref(), data.as_ref())
}

pub(crate) fn open_in(dir: &Path, fragment: &Path) -> Result<File, AppFsError> {
    let path = dir.join(fragment);
    File::open(&path).map_err(|e| AppFsError::from_io(&path, e))
}

pub(crate) fn read_in(dir: &Path, fragment: &Path) -> Result<Vec<u8>, AppFsError> {
    let path = dir.join(fragment);
    std::fs::read(&path).map_err(|e| AppFsError::from_io(&path, e))
}

pub(crate) fn read_string_in(dir: &Path, fragment: &Path) -> Result<String, AppFsError> {
    let path = dir.join(fragment);
    std::fs::read_to_string(&path).map_err(|e| AppFsError::from_io(&path, e))
}

/// The handle lives only inside this function and closes when it drops; the close
/// result itself is not observable.
pub(crate) fn write_in(dir: &Path, fragment: &Path, data: &[u8]) -> Result<usize, AppFsError> {
    let path = dir.join(fragment);
    let io_err = |source: std::io::Error| AppFsError::Io {
        path: path.clone(),
        source,
    };
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .map_err(io_err)?;
    file.write_all(data).map_err(io_err)?;
    file.flush().map_err(io_err)?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "wrote file");
    Ok(data.len())
}
