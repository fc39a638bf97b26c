//! Note domain model.
//!
//! This module defines [`Note`], the only entity the application manages, along
//! with the partial-update type [`NotePatch`] and the editor-side [`NoteDraft`].
//! Field names serialize as camelCase so the same types describe both the
//! on-device JSON array and the REST wire format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::rules::normalize_title;

/// Title given to notes created without one.
pub const UNTITLED: &str = "Untitled";

/// A single note.
///
/// `id` and `created_at` never change after creation. `updated_at` is refreshed
/// by every mutation. Timestamps are RFC 3339 strings in UTC with millisecond
/// precision (`2026-10-16T09:30:00.000Z`); they stay strings so that records
/// written by other clients round-trip untouched, and are parsed only when
/// sorting or formatting.
///
/// Decoding is lenient: missing, `null` or mistyped fields in stored or
/// received records fall back to their defaults. Only `id` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub updated_at: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub pinned: bool,
    #[serde(default, deserialize_with = "lenient::color")]
    pub color: NoteColor,
}

/// Field decoders that accept any JSON value.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::NoteColor;

    /// Strings pass through, numbers and booleans are stringified, anything
    /// else is empty.
    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
        })
    }

    /// `true`, `"true"` and non-zero numbers are set; everything else is not.
    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(b) => b,
            Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
            Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Value::Null | Value::Array(_) | Value::Object(_) => false,
        })
    }

    pub fn color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NoteColor, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => s.parse().unwrap_or_default(),
            _ => NoteColor::default(),
        })
    }
}

/// Color tag from the fixed palette.
///
/// Unknown values coming from storage or the backend deserialize as
/// [`NoteColor::Blue`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    Amber,
    #[default]
    #[serde(other)]
    Blue,
}

impl NoteColor {
    /// The other palette entry. The editor's color control flips between the two.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Blue => Self::Amber,
            Self::Amber => Self::Blue,
        }
    }

    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Amber => "amber",
        }
    }

    /// Capitalized label used in the editor toolbar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Amber => "Amber",
        }
    }
}

impl fmt::Display for NoteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for NoteColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blue" => Ok(Self::Blue),
            "amber" => Ok(Self::Amber),
            other => Err(format!("unknown color '{other}' (expected blue or amber)")),
        }
    }
}

/// Partial set of note fields.
///
/// Used as the "partial" passed to `create` (absent fields take defaults) and
/// as the patch passed to `update` (absent fields are left alone). Absent
/// fields are omitted from the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<NoteColor>,
}

impl NotePatch {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub const fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = Some(pinned);
        self
    }

    #[must_use]
    pub const fn color(mut self, color: NoteColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.pinned.is_none() && self.color.is_none()
    }

    /// Merges the patch into `note`.
    ///
    /// A patched title is normalized. Timestamps are left to the caller.
    pub fn apply_to(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = normalize_title(title);
        }
        if let Some(content) = &self.content {
            note.content.clone_from(content);
        }
        if let Some(pinned) = self.pinned {
            note.pinned = pinned;
        }
        if let Some(color) = self.color {
            note.color = color;
        }
    }
}

/// The editor's working copy of a note's title and content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn from_note(note: &Note) -> Self {
        Self::new(note.title.clone(), note.content.clone())
    }

    /// Patch that persists this draft: normalized title plus content verbatim.
    #[must_use]
    pub fn to_patch(&self) -> NotePatch {
        NotePatch::default()
            .title(normalize_title(&self.title))
            .content(self.content.clone())
    }
}
