//! Exercises the real platform resolvers: current executable, user config root, argv[0].

use std::ffi::OsStr;
use std::path::PathBuf;

use appfs_core::{
    app_data_dir, app_data_dir_in, config_root, executable_dir, open_file, program_name, read_file,
    read_to_string, resolve_path, write_file, Base, DataCategory, ErrorKind,
};

/// Removes an app data directory when dropped, along with its category
/// directory if that is left empty. The config root itself is never removed.
struct Cleanup {
    dir: PathBuf,
    root: PathBuf,
}

impl Cleanup {
    fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            root: config_root().unwrap(),
        }
    }
}

impl Drop for Cleanup {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
        if let Some(parent) = self.dir.parent() {
            if parent != self.root {
                // Fails when the directory still has other entries, which is fine.
                let _ = std::fs::remove_dir(parent);
            }
        }
    }
}

#[test]
fn executable_dir_is_a_directory() {
    assert!(executable_dir().unwrap().is_dir());
}

#[test]
fn app_data_dir_none_sits_directly_under_config_root() {
    let dir = app_data_dir(DataCategory::None).unwrap();
    let _cleanup = Cleanup::new(dir.clone());
    assert_eq!(dir.parent().unwrap(), config_root().unwrap());
    assert_eq!(dir.file_name().unwrap(), program_name().unwrap());
}

#[test]
fn app_data_dir_is_stable_across_calls() {
    let first = app_data_dir(DataCategory::LocalLow).unwrap();
    let _cleanup = Cleanup::new(first.clone());
    let second = app_data_dir(DataCategory::LocalLow).unwrap();
    assert_eq!(first, second);
    assert!(second.is_dir());
    assert!(first.ends_with(std::path::Path::new("LocalLow").join(program_name().unwrap())));
}

#[test]
fn round_trip_through_app_data() {
    let base = Base::AppData(DataCategory::Roaming);
    let _cleanup = Cleanup::new(base.resolve().unwrap());

    let n = write_file(base, "state.txt", "first, longer contents").unwrap();
    assert_eq!(n, 22);
    write_file(base, "state.txt", "second").unwrap();
    assert_eq!(read_file(base, "state.txt").unwrap(), b"second");
    assert_eq!(read_to_string(base, "state.txt").unwrap(), "second");
    assert!(open_file(base, "state.txt").is_ok());
    assert!(resolve_path(base, "state.txt").unwrap().is_file());
}

#[test]
fn cleanup_removes_empty_category_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let program = OsStr::new("myapp");
    let dir = app_data_dir_in(tmp.path(), DataCategory::Local, program).unwrap();
    drop(Cleanup {
        dir: dir.clone(),
        root: tmp.path().to_path_buf(),
    });
    assert!(!tmp.path().join("Local").exists());

    let dir = app_data_dir_in(tmp.path(), DataCategory::Roaming, program).unwrap();
    std::fs::write(tmp.path().join("Roaming").join("keep.txt"), b"x").unwrap();
    drop(Cleanup {
        dir: dir.clone(),
        root: tmp.path().to_path_buf(),
    });
    assert!(!dir.exists());
    assert!(tmp.path().join("Roaming").join("keep.txt").exists());

    let dir = app_data_dir_in(tmp.path(), DataCategory::None, program).unwrap();
    drop(Cleanup {
        dir,
        root: tmp.path().to_path_buf(),
    });
    assert!(tmp.path().is_dir());
}

#[test]
fn missing_fragment_is_not_found() {
    let base = Base::AppData(DataCategory::Local);
    let _cleanup = Cleanup::new(base.resolve().unwrap());

    assert_eq!(read_file(base, "does-not-exist").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(open_file(base, "does-not-exist").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(
        read_file(Base::Executable, "does-not-exist-either").unwrap_err().kind(),
        ErrorKind::NotFound
    );
}
