//! Build mode supplied by the invoking tool.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ConfigError, Result};

/// A build variant selecting among precomputed option sets.
///
/// Only `production` and `development` are named modes. Any other value,
/// including an omitted one, is carried verbatim in [`BuildMode::Other`] and
/// resolves to the fallback option set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BuildMode {
    Production,
    Development,
    Other(String),
}

impl BuildMode {
    pub const PRODUCTION: &'static str = "production";
    pub const DEVELOPMENT: &'static str = "development";

    /// Parse a mode, rejecting anything other than the two named modes.
    ///
    /// # Example
    ///
    /// ```
    /// use scriptpack_config::BuildMode;
    ///
    /// assert_eq!(BuildMode::parse_strict("production").unwrap(), BuildMode::Production);
    /// assert!(BuildMode::parse_strict("staging").is_err());
    /// ```
    pub fn parse_strict(value: &str) -> Result<Self> {
        match Self::from(value) {
            Self::Other(other) => Err(ConfigError::UnknownMode(other)),
            mode => Ok(mode),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Production => Self::PRODUCTION,
            Self::Development => Self::DEVELOPMENT,
            Self::Other(other) => other,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Whether this is one of the named modes.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for BuildMode {
    /// An omitted mode.
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<&str> for BuildMode {
    fn from(value: &str) -> Self {
        match value {
            Self::PRODUCTION => Self::Production,
            Self::DEVELOPMENT => Self::Development,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<Option<&str>> for BuildMode {
    fn from(value: Option<&str>) -> Self {
        value.map(Self::from).unwrap_or_default()
    }
}

impl FromStr for BuildMode {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BuildMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BuildMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}
