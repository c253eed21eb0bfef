//! Named configuration presets
//!
//! Presets are opaque name → configuration string pairs stored in the
//! persisted `AppConfig`. Nothing here parses the configuration text.

mod config;
mod error;

#[cfg(test)]
mod config_tests;

pub use config::{APP_NAME, AppConfigExt, CONFIG_NAME};
pub use error::PresetError;
pub use steep_types::{AppConfig, AudioSettings, DEFAULT_CEREMONY, Preset};
