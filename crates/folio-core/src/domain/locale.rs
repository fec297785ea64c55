//! Supported content locales.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FolioError;

/// A content language. Localized resources are fetched per locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    /// Two-letter code used in resource paths.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Name of the language in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
        }
    }

    /// Parse loosely, falling back to the default locale.
    ///
    /// Accepts region-qualified tags such as `fr-FR` or `en_GB`.
    pub fn normalize(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl FromStr for Locale {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let primary = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.code() == primary)
            .ok_or_else(|| FolioError::UnsupportedLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Notification sent to observers when the active locale changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleChange {
    pub previous: Locale,
    pub current: Locale,
}
