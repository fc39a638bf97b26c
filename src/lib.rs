//! Simple Notes: a terminal notes app with on-device storage and an optional
//! REST backend.
//!
//! Notes have a title, free-form content, a pin flag and one of two accent
//! colors. They are listed pinned-first and then by last update, can be
//! searched as you type, and are edited in place with explicit saves.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal runtime + CLI (main.rs)                   │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Reducer
//! │  - Event handling and key bindings                  │
//! │  - Action execution (controller)                    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Local JSON  │   │ - Ordered     │
//! │ - Theming     │   │ - REST client │   │   requests    │
//! │ - Components  │   │ - Fallback    │   │ - Responses   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Errors, Note model, rules (domain/)              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing → OpenTelemetry → OTLP JSON file         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Read from `config.toml` in the platform config directory (or the file
//! named by `SIMPLE_NOTES_CONFIG`), then overridden by environment variables:
//!
//! ```toml
//! backend_url = "https://notes.example.com/api"
//! data_dir = "~/notes"
//! theme = "ocean-night"
//! trace_level = "debug"
//! ```
//!
//! | Key           | Environment                                           |
//! |---------------|-------------------------------------------------------|
//! | `backend_url` | `SIMPLE_NOTES_BACKEND_URL`, then `SIMPLE_NOTES_API_BASE` |
//! | `data_dir`    | `SIMPLE_NOTES_DATA_DIR`                               |
//! | `theme`       | `SIMPLE_NOTES_THEME`                                  |
//! | `theme_file`  | `SIMPLE_NOTES_THEME_FILE`                             |
//! | `trace_level` | `SIMPLE_NOTES_TRACE_LEVEL`                            |
//!
//! A non-empty backend URL switches every operation to the REST backend;
//! otherwise notes stay on this device.
//!
//! # Example
//!
//! ```rust
//! use simple_notes::{handle_event, initialize, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! let (should_render, actions) = handle_event(&mut state, &Event::Load);
//! assert!(should_render);
//! assert_eq!(actions.len(), 1);
//! assert!(state.loading);
//! ```

pub mod app;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, map_key, Action, AppState, Event, Focus, NotesController};
pub use domain::{Note, NoteColor, NoteDraft, NotePatch, NotesError, Result};
pub use storage::{NoteStore, StorageMode};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::worker::NotesWorker;

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_VAR: &str = "SIMPLE_NOTES_CONFIG";

/// Environment variables read as overrides, with the config key each one sets.
///
/// Earlier entries win when two variables map to the same key.
const ENV_OVERRIDES: [(&str, &str); 6] = [
    ("SIMPLE_NOTES_BACKEND_URL", "backend_url"),
    ("SIMPLE_NOTES_API_BASE", "backend_url"),
    ("SIMPLE_NOTES_DATA_DIR", "data_dir"),
    ("SIMPLE_NOTES_THEME", "theme"),
    ("SIMPLE_NOTES_THEME_FILE", "theme_file"),
    ("SIMPLE_NOTES_TRACE_LEVEL", "trace_level"),
];

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the REST backend. Blank means local storage.
    pub backend_url: Option<String>,

    /// Directory holding `simpleNotes.notes.v1.json` and trace files.
    pub data_dir: PathBuf,

    /// Built-in theme name: `ocean-professional` or `ocean-night`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing level directive. Options: `trace`, `debug`, `info`, `warn`,
    /// `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: None,
            data_dir: infrastructure::data_dir(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

/// On-disk shape of `config.toml`.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    backend_url: Option<String>,
    data_dir: Option<String>,
    theme: Option<String>,
    theme_file: Option<String>,
    trace_level: Option<String>,
}

impl FileConfig {
    fn into_map(self) -> BTreeMap<String, String> {
        [
            ("backend_url", self.backend_url),
            ("data_dir", self.data_dir),
            ("theme", self.theme),
            ("theme_file", self.theme_file),
            ("trace_level", self.trace_level),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .collect()
    }
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

impl Config {
    /// Builds a configuration from a key/value map.
    ///
    /// Values are trimmed and blank values count as unset. Keys:
    /// `backend_url`, `data_dir` (a leading `~` is expanded), `theme`,
    /// `theme_file`, `trace_level`.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use simple_notes::{Config, StorageMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("backend_url".to_string(), "  http://localhost:3001  ".to_string());
    /// map.insert("data_dir".to_string(), "/tmp/notes".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.backend_url(), Some("http://localhost:3001"));
    /// assert_eq!(config.mode(), StorageMode::Remote);
    /// assert_eq!(config.data_dir, std::path::PathBuf::from("/tmp/notes"));
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let data_dir = non_blank(map.get("data_dir")).map_or_else(
            infrastructure::data_dir,
            |dir| infrastructure::expand_tilde(&dir),
        );

        Self {
            backend_url: non_blank(map.get("backend_url")),
            data_dir,
            theme_name: non_blank(map.get("theme")),
            theme_file: non_blank(map.get("theme_file")),
            trace_level: non_blank(map.get("trace_level")),
        }
    }

    /// Parses the contents of a `config.toml` into a key/value map.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::Config`] if the text is not valid TOML for the
    /// known keys.
    pub fn parse_file(text: &str) -> Result<BTreeMap<String, String>> {
        let file: FileConfig =
            toml::from_str(text).map_err(|e| NotesError::Config(e.to_string()))?;
        Ok(file.into_map())
    }

    /// Loads configuration from `file` (when it exists) overlaid with `env`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(file: Option<&Path>, env: &BTreeMap<String, String>) -> Result<Self> {
        let mut map = match file {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "reading config file");
                Self::parse_file(&std::fs::read_to_string(path)?)?
            }
            _ => BTreeMap::new(),
        };

        for (key, value) in env_overrides(env) {
            map.insert(key, value);
        }

        Ok(Self::from_map(&map))
    }

    /// Loads configuration from the default file location and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let env: BTreeMap<String, String> = std::env::vars().collect();
        let file = non_blank(env.get(CONFIG_PATH_VAR))
            .map_or_else(infrastructure::config_file, |p| infrastructure::expand_tilde(&p));

        Self::load_from(Some(&file), &env)
    }

    /// Trimmed backend URL, if one is configured.
    #[must_use]
    pub fn backend_url(&self) -> Option<&str> {
        self.backend_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Storage mode implied by the configuration.
    #[must_use]
    pub fn mode(&self) -> StorageMode {
        if self.backend_url().is_some() {
            StorageMode::Remote
        } else {
            StorageMode::Local
        }
    }
}

/// Config keys set by the environment. The first non-blank variable for a
/// key wins.
fn env_overrides(env: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    let mut overrides = BTreeMap::new();
    for (var, key) in ENV_OVERRIDES {
        if overrides.contains_key(key) {
            continue;
        }
        if let Some(value) = non_blank(env.get(var)) {
            overrides.insert(key.to_string(), value);
        }
    }
    overrides
}

/// Resolves the configured theme: file first, then name, then the default.
///
/// Failures are logged and fall back to the default theme.
#[must_use]
pub fn resolve_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        return Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

/// Creates the initial application state for `config`.
///
/// Notes start empty; they arrive after [`Event::Load`] is dispatched.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(mode = %config.mode(), "initializing simple notes");
    AppState::new(config.mode(), resolve_theme(config))
}

/// Opens the configured store, spawns its worker and wraps both with fresh
/// state in a controller.
///
/// Must be called from within a tokio runtime.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn start(config: &Config) -> Result<NotesController> {
    let store = storage::open_store(config)?;
    let worker = NotesWorker::new(store).spawn();
    Ok(NotesController::new(initialize(config), worker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn blank_backend_url_means_local() {
        let config = Config::from_map(&env(&[("backend_url", "   ")]));
        assert_eq!(config.backend_url(), None);
        assert_eq!(config.mode(), StorageMode::Local);
    }

    #[test]
    fn backend_url_var_wins_over_api_base() {
        let overrides = env_overrides(&env(&[
            ("SIMPLE_NOTES_BACKEND_URL", "http://a"),
            ("SIMPLE_NOTES_API_BASE", "http://b"),
        ]));
        assert_eq!(overrides.get("backend_url").map(String::as_str), Some("http://a"));
    }

    #[test]
    fn blank_backend_url_var_falls_back_to_api_base() {
        let overrides = env_overrides(&env(&[
            ("SIMPLE_NOTES_BACKEND_URL", "  "),
            ("SIMPLE_NOTES_API_BASE", " http://b "),
        ]));
        assert_eq!(overrides.get("backend_url").map(String::as_str), Some("http://b"));
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "backend_url = \"http://file\"\ntheme = \"ocean-night\"\ntrace_level = \"warn\"\n",
        )
        .unwrap();

        let config = Config::load_from(
            Some(&path),
            &env(&[
                ("SIMPLE_NOTES_TRACE_LEVEL", "debug"),
                ("SIMPLE_NOTES_DATA_DIR", "/tmp/simple-notes-test"),
            ]),
        )
        .unwrap();

        assert_eq!(config.backend_url(), Some("http://file"));
        assert_eq!(config.theme_name.as_deref(), Some("ocean-night"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/simple-notes-test"));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(Some(&dir.path().join("absent.toml")), &BTreeMap::new()).unwrap();
        assert_eq!(config.mode(), StorageMode::Local);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let err = Config::parse_file("backend_url = [").unwrap_err();
        assert!(matches!(err, NotesError::Config(_)));
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&config).name, Theme::default().name);
    }

    #[test]
    fn initialize_uses_configured_mode() {
        let config = Config {
            backend_url: Some("http://localhost:3001".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.mode, StorageMode::Remote);
        assert!(state.notes.is_empty());
    }
}
