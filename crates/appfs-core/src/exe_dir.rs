//! The directory holding the running executable.

use std::path::PathBuf;

use crate::error::AppFsError;

/// Returns the directory containing the current executable.
/// Fails if the platform can't report the executable path (e.g. it was deleted after launch).
pub fn executable_dir() -> Result<PathBuf, AppFsError> {
    let exe = std::env::current_exe().map_err(AppFsError::ExecutablePath)?;
    let dir = exe
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_path_buf())
        .ok_or_else(|| AppFsError::NoExecutableDir(exe.clone()))?;
    tracing::trace!(dir = %dir.display(), "resolved executable directory");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executable_dir_is_a_directory() {
        let dir = executable_dir().unwrap();
        assert!(dir.is_dir());
    }
}
