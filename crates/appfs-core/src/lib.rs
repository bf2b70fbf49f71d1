//! File-system conveniences for an application's own directories.
//!
//! Two base directories are supported: the one holding the running executable
//! (see [exe_dir]) and the per-user app data directory for a [DataCategory]
//! (see [app_data]). [files] reads and writes paths relative to either one, and
//! [config] layers typed settings files on top.

pub mod app_data;
pub mod category;
pub mod config;
pub mod error;
pub mod exe_dir;
pub mod files;
pub mod program;

pub use app_data::{app_data_dir, app_data_dir_in, config_root};
pub use category::{DataCategory, ParseCategoryError};
pub use config::{load_config, load_config_or_default, save_config, ConfigError, ConfigFormat};
pub use error::{AppFsError, ErrorKind};
pub use exe_dir::executable_dir;
pub use files::{open_file, read_file, read_to_string, resolve_path, write_file, Base};
pub use program::{base_name, program_name};
