//! The program's own name, as used for its app data directory.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::error::AppFsError;

/// Final component of `arg0` with its last extension removed.
///
/// `bin/myapp.exe` gives `myapp`, `myapp` stays `myapp`. A dotfile such as
/// `.hidden` is kept whole. Returns `None` when `arg0` has no file name.
pub fn base_name(arg0: &OsStr) -> Option<&OsStr> {
    Path::new(arg0).file_stem().filter(|s| !s.is_empty())
}

/// Base name of the running program, taken from argv[0].
pub fn program_name() -> Result<OsString, AppFsError> {
    let arg0 = std::env::args_os().next().ok_or(AppFsError::NoProgramName)?;
    base_name(&arg0)
        .map(OsStr::to_os_string)
        .ok_or(AppFsError::NoProgramName)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Option<&str> {
        base_name(OsStr::new(s)).and_then(OsStr::to_str)
    }

    #[test]
    fn strips_extension() {
        assert_eq!(name("myapp.exe"), Some("myapp"));
        assert_eq!(name("myapp"), Some("myapp"));
    }

    #[test]
    fn strips_only_last_extension() {
        assert_eq!(name("my.app.exe"), Some("my.app"));
    }

    #[test]
    fn uses_final_component() {
        assert_eq!(name("/usr/local/bin/myapp"), Some("myapp"));
        assert_eq!(name("./target/debug/myapp.bin"), Some("myapp"));
    }

    #[test]
    fn keeps_dotfile_whole() {
        assert_eq!(name(".hidden"), Some(".hidden"));
    }

    #[test]
    fn empty_has_no_name() {
        assert_eq!(name(""), None);
        assert_eq!(name("/"), None);
    }

    #[test]
    fn current_program_has_name() {
        let n = program_name().unwrap();
        assert!(!n.is_empty());
    }
}
