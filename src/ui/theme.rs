//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML files with a name and a flat table of hex colors. Two are
//! compiled in; any other file can be loaded by path.
//!
//! # Built-in Themes
//!
//! - `ocean-professional`: Blue and amber accents on a light surface (default)
//! - `ocean-night`: The same accents on a dark surface
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#111827"
//! selection_fg = "#111827"
//! selection_bg = "#dbeafe"
//! text_normal = "#111827"
//! text_dim = "#6b7280"
//! border = "#d1d5db"
//! search_bar_border = "#2563eb"
//! accent = "#2563eb"
//! accent_secondary = "#f59e0b"
//! error_fg = "#ef4444"
//! notice_fg = "#b45309"
//! button_fg = "#ffffff"
//! button_bg = "#2563eb"
//! empty_state_fg = "#2563eb"
//! ```
//!
//! # Example
//!
//! ```rust
//! use simple_notes::ui::theme::Theme;
//!
//! let theme = Theme::from_name("ocean-night").unwrap();
//! print!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert_eq!(theme.name, "ocean-night");
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::error::{NotesError, Result};
use crate::domain::NoteColor;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "ocean-professional";

const OCEAN_PROFESSIONAL: &str = include_str!("../../themes/ocean-professional.toml");
const OCEAN_NIGHT: &str = include_str!("../../themes/ocean-night.toml");

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Brand and title text.
    pub header_fg: String,
    /// Optional status bar background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Previews, dates, hints.
    pub text_dim: String,

    pub border: String,
    /// Border of the focused search box and editor rule.
    pub search_bar_border: String,

    /// Primary accent; also the `blue` note color.
    pub accent: String,
    /// Secondary accent; also the `amber` note color.
    pub accent_secondary: String,

    pub error_fg: String,
    pub notice_fg: String,

    /// Enabled primary button.
    pub button_fg: String,
    pub button_bg: String,

    pub empty_state_fg: String,
}

impl ThemeColors {
    /// Swatch for a note color tag.
    #[must_use]
    pub fn note_color(&self, color: NoteColor) -> &str {
        match color {
            NoteColor::Blue => &self.accent,
            NoteColor::Amber => &self.accent_secondary,
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name. `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "ocean-professional" => OCEAN_PROFESSIONAL,
            "ocean-night" => OCEAN_NIGHT,
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| NotesError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| NotesError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Converts a hex color to an RGB tuple. Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// 24-bit foreground escape sequence for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The `ocean-professional` theme.
    ///
    /// Falls back to an inline copy of the palette if the bundled file does
    /// not parse.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(|| Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors {
                header_fg: "#111827".to_string(),
                header_bg: None,
                selection_fg: "#111827".to_string(),
                selection_bg: "#dbeafe".to_string(),
                text_normal: "#111827".to_string(),
                text_dim: "#6b7280".to_string(),
                border: "#d1d5db".to_string(),
                search_bar_border: "#2563eb".to_string(),
                accent: "#2563eb".to_string(),
                accent_secondary: "#f59e0b".to_string(),
                error_fg: "#ef4444".to_string(),
                notice_fg: "#b45309".to_string(),
                button_fg: "#ffffff".to_string(),
                button_bg: "#2563eb".to_string(),
                empty_state_fg: "#2563eb".to_string(),
            },
        })
    }
}
