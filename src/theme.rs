//! The two-variant theme and its wire format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The active visual mode.
///
/// Serializes to the lowercase strings `"light"` and `"dark"`, which are also
/// the literal values written to persistent storage, so a preference embedded
/// in a host's own config file and one written by a
/// [`FileStore`](crate::FileStore) are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The wire representation: `"light"` or `"dark"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other variant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nightswitch::Theme;
    ///
    /// assert_eq!(Theme::Light.toggled(), Theme::Dark);
    /// assert_eq!(Theme::Dark.toggled(), Theme::Light);
    /// ```
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Whether this is the dark variant.
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    /// Parses exactly `"light"` or `"dark"`; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError {
                value: other.to_string(),
            }),
        }
    }
}

/// Error returned when a string is not a recognized theme value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeError {
    value: String,
}

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized theme '{}', expected 'light' or 'dark'",
            self.value
        )
    }
}

impl std::error::Error for ParseThemeError {}
