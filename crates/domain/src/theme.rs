//! Theme — the persisted light/dark preference and its toggle presentation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseThemeError;

/// Visual theme applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Attribute / storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Resolve a stored or attribute value.
    ///
    /// Absent and unrecognised values both resolve to the default
    /// ([`Theme::Light`]).
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    /// What the toggle control shows while this theme is active.
    #[must_use]
    pub fn appearance(self) -> ToggleAppearance {
        match self {
            Self::Dark => ToggleAppearance {
                glyph: "\u{1F31E}",
                label: "Switch to light mode",
            },
            Self::Light => ToggleAppearance {
                glyph: "\u{1F31A}",
                label: "Switch to dark mode",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError {
                value: other.to_string(),
            }),
        }
    }
}

/// Icon glyph and tooltip describing the action the toggle will perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleAppearance {
    /// Text placed in the icon element.
    pub glyph: &'static str,
    /// Tooltip placed on the icon's container.
    pub label: &'static str,
}
