//! Platform paths for Simple Notes.
//!
//! Data and configuration live in the per-user directories reported by the
//! `directories` crate (`~/.local/share/simple-notes` and
//! `~/.config/simple-notes` on Linux). When the platform reports no home
//! directory, both fall back to `.simple-notes` under the working directory.

use std::path::PathBuf;

use directories::ProjectDirs;

const FALLBACK_DIR: &str = ".simple-notes";

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "simple-notes", "simple-notes")
}

/// Directory holding the notes file and trace logs.
#[must_use]
pub fn data_dir() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from(FALLBACK_DIR),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

/// Directory searched for `config.toml`.
#[must_use]
pub fn config_dir() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from(FALLBACK_DIR),
        |dirs| dirs.config_dir().to_path_buf(),
    )
}

/// Default location of the configuration file.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, and all paths when no home directory is known, are
/// returned unchanged.
///
/// ```
/// use simple_notes::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/var/notes"), std::path::PathBuf::from("/var/notes"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());

    match (path, home) {
        ("~", Some(home)) => home,
        (rest, Some(home)) if rest.starts_with("~/") => home.join(&rest[2..]),
        _ => PathBuf::from(path),
    }
}
