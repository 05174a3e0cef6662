//! Theme choice and its resolved forms

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// The user's persisted preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Light,
    Dark,
    /// Follow the system color scheme
    #[default]
    Auto,
}

impl ThemeChoice {
    pub const ALL: [ThemeChoice; 3] = [ThemeChoice::Light, ThemeChoice::Dark, ThemeChoice::Auto];

    /// Next choice for the compact toggle button
    pub fn next(self) -> ThemeChoice {
        match self {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Auto,
            ThemeChoice::Auto => ThemeChoice::Light,
        }
    }

    /// Indicator glyph shown for this choice
    pub fn glyph(self) -> IconGlyph {
        match self {
            ThemeChoice::Light => IconGlyph::LightMode,
            ThemeChoice::Dark => IconGlyph::DarkMode,
            ThemeChoice::Auto => IconGlyph::Contrast,
        }
    }

    /// Parse a stored or attached value, coercing anything unrecognized to `Auto`.
    pub fn parse_or_auto(value: &str) -> ThemeChoice {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %value, "Unrecognized theme choice, falling back to auto");
            ThemeChoice::Auto
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeChoice::Light => "light",
            ThemeChoice::Dark => "dark",
            ThemeChoice::Auto => "auto",
        }
    }
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ThemeChoice {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeChoice::Light),
            "dark" => Ok(ThemeChoice::Dark),
            "auto" => Ok(ThemeChoice::Auto),
            _ => Err(ThemeError::UnknownChoice(s.to_string())),
        }
    }
}

/// The concrete theme actually rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl EffectiveTheme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            EffectiveTheme::Dark
        } else {
            EffectiveTheme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, EffectiveTheme::Dark)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EffectiveTheme::Light => "light",
            EffectiveTheme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for EffectiveTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Icon identifiers (Material Symbols ligatures)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconGlyph {
    LightMode,
    DarkMode,
    Contrast,
}

impl IconGlyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconGlyph::LightMode => "light_mode",
            IconGlyph::DarkMode => "dark_mode",
            IconGlyph::Contrast => "contrast",
        }
    }
}

impl std::fmt::Display for IconGlyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
