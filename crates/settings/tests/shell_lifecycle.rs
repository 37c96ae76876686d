//! Exercises the contract the windowing shell relies on: construct both
//! managers at startup, let the preferences dialog adjust them, persist once
//! at shutdown, and find the same state after a restart.

use paneshell_settings::{AppearanceCatalog, ConfigManager, LocalizationManager, TranslationTable};
use serde_json::{json, Map, Value};
use tempfile::tempdir;

fn config_defaults() -> Map<String, Value> {
    let Value::Object(map) = json!({
        "language": "fr",
        "appearance_mode": "Azure",
        "color_theme": "dark",
        "geometry": "1024x640+100+80",
        "separator_pos": null,
        "appearances": {
            "Azure": ["light", "dark"],
            "Forest": ["light", "dark"]
        }
    }) else {
        unreachable!()
    };
    map
}

fn translations() -> TranslationTable {
    serde_json::from_value(json!({
        "en": {"greet": "Hello", "menu.exit": "Exit"},
        "fr": {"greet": "Bonjour", "menu.exit": "Quitter"}
    }))
    .expect("table")
}

#[test]
fn startup_preferences_shutdown_and_restart() {
    let temp = tempdir().expect("tempdir");
    let config_path = temp.path().join("config.json");

    // First launch: no config file yet, so defaults are materialized on disk.
    let mut config = ConfigManager::new(Some(config_path.clone()), config_defaults());
    assert!(config_path.exists());

    let startup_lang = config
        .get("language")
        .expect("language key")
        .as_str()
        .expect("language is a string")
        .to_string();
    let mut i18n = LocalizationManager::new(None, translations(), &startup_lang);
    assert_eq!(i18n.text("menu.exit"), "Quitter");

    // The preferences dialog fills its choice controls from both managers.
    let catalog = AppearanceCatalog::from_config(config.get("appearances").expect("appearances"));
    let groups: Vec<_> = catalog.group_names().collect();
    assert_eq!(groups, vec!["Azure", "Forest"]);
    assert_eq!(i18n.defined_languages(), ["en".to_string(), "fr".to_string()]);

    // The user switches to English and to the Forest appearance; the dialog
    // preselects the group's first variant.
    assert!(i18n.set_active_language("en"));
    let variant = catalog.first_variant("Forest").expect("variant").to_string();
    config.set("appearance_mode", "Forest");
    config.set("color_theme", variant);
    assert_eq!(i18n.text("menu.exit"), "Exit");

    // Shutdown: the shell records geometry, language, and pane position,
    // then saves exactly once.
    config.set("geometry", "1280x720+60+40");
    config.set("language", i18n.current_language());
    config.set("separator_pos", 240);
    config.save();

    // Second launch sees everything the first one persisted.
    let config = ConfigManager::new(Some(config_path), config_defaults());
    assert_eq!(config.get("appearance_mode").unwrap(), &json!("Forest"));
    assert_eq!(config.get("color_theme").unwrap(), &json!("light"));
    assert_eq!(config.get("geometry").unwrap(), &json!("1280x720+60+40"));
    assert_eq!(config.get("separator_pos").unwrap(), &json!(240));

    let lang = config.get("language").unwrap().as_str().unwrap();
    let i18n = LocalizationManager::new(None, translations(), lang);
    assert_eq!(i18n.text("greet"), "Hello");
}

#[test]
fn corrupt_config_still_boots_the_shell() {
    let temp = tempdir().expect("tempdir");
    let config_path = temp.path().join("config.json");
    std::fs::write(&config_path, "{ corrupted").expect("write garbage");

    let config = ConfigManager::new(Some(config_path), config_defaults());
    let lang = config.get("language").unwrap().as_str().unwrap();
    let i18n = LocalizationManager::new(None, translations(), lang);

    assert_eq!(lang, "fr");
    assert_eq!(i18n.text("greet"), "Bonjour");
    assert!(!AppearanceCatalog::from_config(config.get("appearances").unwrap()).is_empty());
}
