//! Categories of per-user application data.
//!
//! These mirror the Windows split between roaming profile data, machine-local
//! data and low-integrity (`LocalLow`) data. The category label becomes a path
//! segment under the user's config root; `None` adds no segment at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which flavour of app data directory to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataCategory {
    /// No category segment: `{config}/{program}`.
    #[default]
    None,
    /// Data that stays on this machine.
    Local,
    /// Data readable by low-privilege runs of the program.
    LocalLow,
    /// Data that follows the user between machines.
    Roaming,
}

impl DataCategory {
    /// Every category, in declaration order.
    pub const ALL: [DataCategory; 4] = [
        DataCategory::None,
        DataCategory::Local,
        DataCategory::LocalLow,
        DataCategory::Roaming,
    ];

    /// The path segment for this category. Empty for [`DataCategory::None`].
    pub fn label(self) -> &'static str {
        match self {
            DataCategory::None => "",
            DataCategory::Local => "Local",
            DataCategory::LocalLow => "LocalLow",
            DataCategory::Roaming => "Roaming",
        }
    }
}

impl fmt::Display for DataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DataCategory {
    type Err = ParseCategoryError;

    /// Accepts a label in any case, plus `none` or an empty string for `None`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(DataCategory::None);
        }
        DataCategory::ALL
            .into_iter()
            .find(|c| !c.label().is_empty() && c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown data category: {0:?} (expected none, local, locallow or roaming)")]
pub struct ParseCategoryError(pub String);
