//! User display preferences
//!
//! The page template substitutes the three preference strings directly into
//! the bootstrap call. They are applied verbatim; only the theme is ever
//! interpreted, and only as a dark/light switch.

use serde::{Deserialize, Serialize};

/// Template-injected display preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPreferences {
    /// Raw theme string, `"dark"` or anything else
    #[serde(default = "default_theme")]
    pub theme: String,
    /// CSS font-size token
    #[serde(default = "default_font_size")]
    pub font_size: String,
    /// CSS color token for `--accent-color`
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_font_size() -> String {
    "medium".to_string()
}

fn default_accent_color() -> String {
    "#007bff".to_string()
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            font_size: default_font_size(),
            accent_color: default_accent_color(),
        }
    }
}

impl UserPreferences {
    /// Take the three template values as-is
    pub fn from_template(
        theme: impl Into<String>,
        font_size: impl Into<String>,
        accent_color: impl Into<String>,
    ) -> Self {
        Self {
            theme: theme.into(),
            font_size: font_size.into(),
            accent_color: accent_color.into(),
        }
    }

    /// Interpreted theme
    pub fn theme(&self) -> Theme {
        Theme::from_raw(&self.theme)
    }

    /// Inline colors for the suggestions box under this theme
    pub fn suggestions_palette(&self) -> SuggestionsPalette {
        self.theme().suggestions_palette()
    }
}

/// Dark/light interpretation of the raw theme string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Exactly `"dark"` is dark; every other string is light
    pub fn from_raw(raw: &str) -> Self {
        if raw == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn suggestions_palette(self) -> SuggestionsPalette {
        match self {
            Theme::Dark => SuggestionsPalette {
                color: "#fff",
                background_color: "#333",
            },
            Theme::Light => SuggestionsPalette {
                color: "#333",
                background_color: "#fff",
            },
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

/// Text/background pair applied to the suggestions element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionsPalette {
    pub color: &'static str,
    pub background_color: &'static str,
}
