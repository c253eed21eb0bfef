//! Application configuration persistence
//!
//! This module provides persistence and preset management for `AppConfig`
//! (defined in steep-types) through the confy TOML backend.

use std::path::{Path, PathBuf};

use super::PresetError;
use steep_types::{AppConfig, Preset};

pub const APP_NAME: &str = "steep";
pub const CONFIG_NAME: &str = "config";

// ─────────────────────────────────────────────────────────────────────────────
// AppConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for AppConfig persistence and preset management
pub trait AppConfigExt: Sized {
    /// Load from the platform config dir, falling back to defaults
    fn load() -> Self;
    fn load_from(path: &Path) -> Result<Self, PresetError>;
    fn save(&self) -> Result<(), PresetError>;
    fn save_to(&self, path: &Path) -> Result<(), PresetError>;
    fn config_path() -> Option<PathBuf>;

    fn preset(&self, name: &str) -> Option<&Preset>;
    fn preset_names(&self) -> Vec<String>;
    fn save_preset(&mut self, name: &str, config: &str) -> Result<(), PresetError>;
    fn update_preset(
        &mut self,
        old_name: &str,
        new_name: &str,
        config: &str,
    ) -> Result<(), PresetError>;
    fn rename_preset(&mut self, old_name: &str, new_name: &str) -> Result<(), PresetError>;
    fn delete_preset(&mut self, name: &str) -> Result<(), PresetError>;
    fn activate_preset(&mut self, name: &str) -> Result<&Preset, PresetError>;
}

impl AppConfigExt for AppConfig {
    fn load() -> Self {
        match confy::load(APP_NAME, CONFIG_NAME) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load configuration, using defaults");
                AppConfig::default()
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self, PresetError> {
        confy::load_path(path).map_err(PresetError::Load)
    }

    fn save(&self) -> Result<(), PresetError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(PresetError::Save)?;
        tracing::info!(presets = self.presets.len(), "configuration saved");
        Ok(())
    }

    fn save_to(&self, path: &Path) -> Result<(), PresetError> {
        confy::store_path(path, self).map_err(PresetError::Save)
    }

    fn config_path() -> Option<PathBuf> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).ok()
    }

    fn preset(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    fn preset_names(&self) -> Vec<String> {
        self.presets.iter().map(|p| p.name.clone()).collect()
    }

    /// Insert a preset, or replace the config of an existing one in place
    fn save_preset(&mut self, name: &str, config: &str) -> Result<(), PresetError> {
        let name = checked_name(name)?;

        if let Some(preset) = self.presets.iter_mut().find(|p| p.name == name) {
            preset.config = config.to_string();
        } else {
            self.presets.push(Preset::new(name, config));
        }
        Ok(())
    }

    /// Rename and/or edit a preset.
    ///
    /// Renaming onto another existing name replaces that other preset.
    fn update_preset(
        &mut self,
        old_name: &str,
        new_name: &str,
        config: &str,
    ) -> Result<(), PresetError> {
        let new_name = checked_name(new_name)?;
        if self.preset(old_name).is_none() {
            return Err(PresetError::NotFound {
                name: old_name.to_string(),
            });
        }

        if old_name != new_name {
            self.presets.retain(|p| p.name != new_name);
        }

        if let Some(preset) = self.presets.iter_mut().find(|p| p.name == old_name) {
            preset.name = new_name.to_string();
            preset.config = config.to_string();
        }

        if self.active_preset_name.as_deref() == Some(old_name) {
            self.active_preset_name = Some(new_name.to_string());
        }
        Ok(())
    }

    fn rename_preset(&mut self, old_name: &str, new_name: &str) -> Result<(), PresetError> {
        let config = self
            .preset(old_name)
            .map(|p| p.config.clone())
            .ok_or_else(|| PresetError::NotFound {
                name: old_name.to_string(),
            })?;
        self.update_preset(old_name, new_name, &config)
    }

    fn delete_preset(&mut self, name: &str) -> Result<(), PresetError> {
        let len_before = self.presets.len();
        self.presets.retain(|p| p.name != name);
        if self.presets.len() == len_before {
            return Err(PresetError::NotFound {
                name: name.to_string(),
            });
        }
        if self.active_preset_name.as_deref() == Some(name) {
            self.active_preset_name = None;
        }
        Ok(())
    }

    fn activate_preset(&mut self, name: &str) -> Result<&Preset, PresetError> {
        let index = self
            .presets
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| PresetError::NotFound {
                name: name.to_string(),
            })?;
        self.active_preset_name = Some(name.to_string());
        Ok(&self.presets[index])
    }
}

fn checked_name(name: &str) -> Result<&str, PresetError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PresetError::EmptyName);
    }
    Ok(name)
}
