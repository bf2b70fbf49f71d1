//! Typed settings files stored relative to a [`Base`].
//!
//! The format follows the file extension: `.toml`, `.json`, `.yaml` or `.yml`.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppFsError, ErrorKind};
use crate::files::{read_string_in, write_in, Base};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }

    fn parse<T: DeserializeOwned>(self, s: &str) -> Result<T, ConfigError> {
        let parsed = match self {
            ConfigFormat::Toml => toml::from_str(s).map_err(BoxError::from),
            ConfigFormat::Json => serde_json::from_str(s).map_err(BoxError::from),
            ConfigFormat::Yaml => serde_yaml::from_str(s).map_err(BoxError::from),
        };
        parsed.map_err(ConfigError::Parse)
    }

    fn render<T: Serialize>(self, value: &T) -> Result<String, ConfigError> {
        let rendered = match self {
            ConfigFormat::Toml => toml::to_string_pretty(value).map_err(BoxError::from),
            ConfigFormat::Json => serde_json::to_string_pretty(value).map_err(BoxError::from),
            ConfigFormat::Yaml => serde_yaml::to_string(value).map_err(BoxError::from),
        };
        rendered.map_err(ConfigError::Serialize)
    }
}

/// Load a settings file. Returns `Ok(None)` if the file doesn't exist.
pub fn load_config<T: DeserializeOwned>(
    base: Base,
    fragment: impl AsRef<Path>,
) -> Result<Option<T>, ConfigError> {
    load_config_in(&base.resolve()?, fragment.as_ref())
}

/// Load a settings file. Returns the default if it is missing or invalid.
pub fn load_config_or_default<T: DeserializeOwned + Default>(
    base: Base,
    fragment: impl AsRef<Path>,
) -> T {
    let fragment = fragment.as_ref();
    match base.resolve() {
        Ok(dir) => load_config_or_default_in(&dir, fragment),
        Err(e) => {
            tracing::warn!(file = %fragment.display(), error = %e, "using default config");
            T::default()
        }
    }
}

/// Save a settings file, replacing any previous contents. Returns bytes written.
pub fn save_config<T: Serialize>(
    base: Base,
    fragment: impl AsRef<Path>,
    value: &T,
) -> Result<usize, ConfigError> {
    save_config_in(&base.resolve()?, fragment.as_ref(), value)
}

pub(crate) fn load_config_in<T: DeserializeOwned>(
    dir: &Path,
    fragment: &Path,
) -> Result<Option<T>, ConfigError> {
    let format = format_of(fragment)?;
    let s = match read_string_in(dir, fragment) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    format.parse(&s).map(Some)
}

pub(crate) fn load_config_or_default_in<T: DeserializeOwned + Default>(
    dir: &Path,
    fragment: &Path,
) -> T {
    match load_config_in(dir, fragment) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(file = %fragment.display(), error = %e, "using default config");
            T::default()
        }
    }
}

pub(crate) fn save_config_in<T: Serialize>(
    dir: &Path,
    fragment: &Path,
    value: &T,
) -> Result<usize, ConfigError> {
    let s = format_of(fragment)?.render(value)?;
    Ok(write_in(dir, fragment, s.as_bytes())?)
}

fn format_of(fragment: &Path) -> Result<ConfigFormat, ConfigError> {
    ConfigFormat::from_path(fragment).ok_or_else(|| ConfigError::UnknownFormat(fragment.to_path_buf()))
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported config format (use .toml, .json or .yaml): {0}")]
    UnknownFormat(std::path::PathBuf),
    #[error("failed to parse config")]
    Parse(#[source] BoxError),
    #[error("failed to serialize config")]
    Serialize(#[source] BoxError),
    #[error(transparent)]
    Fs(#[from] AppFsError),
}
