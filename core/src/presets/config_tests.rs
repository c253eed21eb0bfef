//! Tests for preset management and persistence

use super::{AppConfig, AppConfigExt, Preset, PresetError};

fn config_with(presets: &[(&str, &str)]) -> AppConfig {
    let mut config = AppConfig::default();
    for (name, text) in presets {
        config.save_preset(name, text).unwrap();
    }
    config
}

#[test]
fn test_save_appends_then_replaces_in_place() {
    let mut config = config_with(&[("green", "30 -> 45"), ("puer", "(5) -> 10")]);
    config.save_preset("green", "20 -> 25").unwrap();

    assert_eq!(
        config.presets,
        vec![Preset::new("green", "20 -> 25"), Preset::new("puer", "(5) -> 10")]
    );
}

#[test]
fn test_save_rejects_blank_name() {
    let mut config = AppConfig::default();
    assert!(matches!(
        config.save_preset("  ", "10"),
        Err(PresetError::EmptyName)
    ));
    assert!(config.presets.is_empty());
}

#[test]
fn test_update_onto_existing_name_leaves_one_entry() {
    let mut config = config_with(&[("a", "1"), ("b", "2"), ("c", "3")]);
    config.update_preset("c", "a", "30").unwrap();

    assert_eq!(
        config.presets,
        vec![Preset::new("b", "2"), Preset::new("a", "30")]
    );
}

#[test]
fn test_update_missing_preset() {
    let mut config = config_with(&[("a", "1")]);
    let err = config.update_preset("zzz", "b", "2").unwrap_err();
    assert!(matches!(err, PresetError::NotFound { ref name } if name == "zzz"));
    assert_eq!(config.presets.len(), 1);
}

#[test]
fn test_rename_follows_active_preset() {
    let mut config = config_with(&[("daily", "10 -> 20")]);
    config.activate_preset("daily").unwrap();
    config.rename_preset("daily", "morning").unwrap();

    assert_eq!(config.active_preset_name.as_deref(), Some("morning"));
    assert_eq!(config.preset("morning").unwrap().config, "10 -> 20");
    assert!(config.preset("daily").is_none());
}

#[test]
fn test_delete_clears_active_preset() {
    let mut config = config_with(&[("a", "1"), ("b", "2")]);
    config.activate_preset("a").unwrap();
    config.delete_preset("a").unwrap();

    assert_eq!(config.preset_names(), vec!["b".to_string()]);
    assert!(config.active_preset_name.is_none());
    assert!(matches!(
        config.delete_preset("a"),
        Err(PresetError::NotFound { .. })
    ));
}

#[test]
fn test_persistence_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = config_with(&[("shou", "(10) -> 15 -> 20-25")]);
    config.activate_preset("shou").unwrap();
    config.audio.volume = 40;
    config.save_to(&path).unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.startup_config(), "(10) -> 15 -> 20-25");
}

#[test]
fn test_load_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded, AppConfig::default());
}
