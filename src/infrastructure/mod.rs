//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where notes, configuration and traces live on this machine.

pub mod paths;

pub use paths::{config_dir, config_file, data_dir, expand_tilde, CONFIG_FILE_NAME};
