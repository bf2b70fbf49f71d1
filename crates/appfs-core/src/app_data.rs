//! Where a program keeps its per-user data.
//!
//! Layout: `{config_root}/{category}/{program}` where `config_root` is the
//! platform's user config directory (`$XDG_CONFIG_HOME` or `~/.config` on Linux,
//! `~/Library/Application Support` on macOS, `%APPDATA%` on Windows) and
//! `program` is argv[0] without its extension. `DataCategory::None` drops the
//! category segment.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::category::DataCategory;
use crate::error::AppFsError;
use crate::program::program_name;

/// Returns the app data directory for `category`, creating it if it doesn't exist.
pub fn app_data_dir(category: DataCategory) -> Result<PathBuf, AppFsError> {
    let program = program_name()?;
    let root = config_root()?;
    app_data_dir_in(&root, category, &program)
}

/// The user's config root as reported by the platform.
pub fn config_root() -> Result<PathBuf, AppFsError> {
    let dirs = directories::BaseDirs::new().ok_or(AppFsError::NoConfigDir)?;
    Ok(dirs.config_dir().to_path_buf())
}

/// Same as [`app_data_dir`] with the config root and program name given explicitly.
pub fn app_data_dir_in(
    config_root: &Path,
    category: DataCategory,
    program: &OsStr,
) -> Result<PathBuf, AppFsError> {
    if program.is_empty() {
        return Err(AppFsError::NoProgramName);
    }
    let mut dir = config_root.to_path_buf();
    let label = category.label();
    if !label.is_empty() {
        dir.push(label);
    }
    dir.push(program);
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Creates `dir` and any missing parents. Succeeds if it already exists as a directory.
fn ensure_dir(dir: &Path) -> Result<(), AppFsError> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(AppFsError::NotADirectory(dir.to_path_buf()));
    }
    std::fs::create_dir_all(dir).map_err(|source| AppFsError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::debug!(dir = %dir.display(), "created app data directory");
    Ok(())
}
