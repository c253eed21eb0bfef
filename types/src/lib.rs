//! Shared configuration types for steep
//!
//! This crate contains serializable configuration types that are shared between
//! the core library (steep-core) and any front end driving it.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Presets
// ─────────────────────────────────────────────────────────────────────────────

/// A named, saved configuration string.
///
/// The configuration text is stored verbatim; it is only parsed when the
/// preset is loaded into a timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub config: String,
}

impl Preset {
    pub fn new(name: impl Into<String>, config: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: config.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Audio Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Audio settings for cue playback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSettings {
    /// Master toggle
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Volume (0-100)
    #[serde(default = "default_volume")]
    pub volume: u8,

    /// Length of a single tone of the continuous cue
    #[serde(default = "default_tone_ms")]
    pub tone_ms: u64,

    /// Spacing between tone starts of the continuous cue
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Pitch of the one-shot alert chime
    #[serde(default = "default_alert_hz")]
    pub alert_hz: f32,

    /// Pitch of the continuous cue (C5)
    #[serde(default = "default_continuous_hz")]
    pub continuous_hz: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: default_volume(),
            tone_ms: default_tone_ms(),
            interval_ms: default_interval_ms(),
            alert_hz: default_alert_hz(),
            continuous_hz: default_continuous_hz(),
        }
    }
}

fn default_volume() -> u8 {
    80
}

fn default_tone_ms() -> u64 {
    300
}

fn default_interval_ms() -> u64 {
    800
}

fn default_alert_hz() -> f32 {
    440.0
}

fn default_continuous_hz() -> f32 {
    523.25
}

// ─────────────────────────────────────────────────────────────────────────────
// App Config
// ─────────────────────────────────────────────────────────────────────────────

/// Ceremony loaded when no other configuration has been chosen.
pub const DEFAULT_CEREMONY: &str = "(3-5 -> 5-7) -> 10 -> 10-12 -> 15 -> 20 -> 25-30 -> 35-40 -> 50-60 -> 70-80 -> 90-100 -> 120-180";

/// Persistent application configuration.
///
/// Note: Persistence methods (load/save) are provided by steep-core via the
/// `AppConfigExt` trait, as they require the confy backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration string loaded at startup
    #[serde(default = "default_ceremony")]
    pub default_config: String,
    #[serde(default)]
    pub presets: Vec<Preset>,
    #[serde(default)]
    pub active_preset_name: Option<String>,
    #[serde(default)]
    pub audio: AudioSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_config: default_ceremony(),
            presets: Vec::new(),
            active_preset_name: None,
            audio: AudioSettings::default(),
        }
    }
}

impl AppConfig {
    /// The configuration string of the active preset, falling back to the default.
    pub fn startup_config(&self) -> &str {
        self.active_preset_name
            .as_deref()
            .and_then(|name| self.presets.iter().find(|p| p.name == name))
            .map(|p| p.config.as_str())
            .unwrap_or(&self.default_config)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}

fn default_ceremony() -> String {
    DEFAULT_CEREMONY.to_string()
}
