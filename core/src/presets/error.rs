//! Error types for preset storage

use thiserror::Error;

/// Errors during preset lookup and persistence
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("failed to load configuration")]
    Load(#[source] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),

    #[error("preset '{name}' not found")]
    NotFound { name: String },

    #[error("preset name must not be empty")]
    EmptyName,
}
