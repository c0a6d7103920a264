//! Loading documents written by older shells

use nyx_shell_settings::prelude::*;
use nyx_shell_settings::{prune_unknown_keys, CURRENT_CONFIG_VERSION, PLUGIN_SETTINGS_FILE_NAME};
use serde_json::{json, Map, Value};
use std::cell::Cell;
use std::fs;
use std::rc::Rc;
use tempfile::tempdir;

fn parse(value: Value) -> ShellSettings {
    match value {
        Value::Object(map) => ShellSettings::from_json(&map).settings,
        _ => panic!("expected an object"),
    }
}

#[test]
fn test_current_key_beats_legacy_alias() {
    let settings = parse(json!({
        "dankBarTransparency": 0.4,
        "topBarTransparency": 90,
    }));
    assert_eq!(settings.get_f64("dankBarTransparency"), Some(0.4));
}

#[test]
fn test_current_theme_name_beats_theme_index() {
    let settings = parse(json!({
        "currentThemeName": "coral",
        "themeIndex": 2,
    }));
    assert_eq!(settings.get_str("currentThemeName"), Some("coral"));
}

#[test]
fn test_current_position_beats_at_bottom_flag() {
    let settings = parse(json!({
        "dankBarPosition": 2,
        "topBarAtBottom": true,
    }));
    assert_eq!(settings.bar_position(), BarPosition::Left);
}

#[test]
fn test_full_legacy_document() {
    let settings = parse(json!({
        "themeIndex": 4,
        "themeIsDynamic": false,
        "topBarWidgetOrder": ["launcherButton", "clock", "battery", "unknownWidget"],
        "useOSLogo": true,
        "osLogoBrightness": 0.8,
        "mediaCompactMode": true,
        "topBarTransparency": 75,
        "topBarAtBottom": true,
    }));

    assert_eq!(settings.get_str("currentThemeName"), Some("orange"));
    assert_eq!(settings.get_str_list("dankBarLeftWidgets"), Some(vec!["launcherButton"]));
    assert_eq!(settings.get_str_list("dankBarCenterWidgets"), Some(vec!["clock"]));
    assert_eq!(settings.get_str_list("dankBarRightWidgets"), Some(vec!["battery"]));
    assert_eq!(settings.get_str("launcherLogoMode"), Some("os"));
    assert_eq!(settings.get_f64("launcherLogoBrightness"), Some(0.8));
    assert_eq!(settings.get_str("launcherLogoColorOverride"), Some(""));
    assert_eq!(settings.get_i64("mediaSize"), Some(0));
    assert_eq!(settings.get_f64("dankBarTransparency"), Some(0.75));
    assert_eq!(settings.bar_position(), BarPosition::Bottom);
    assert_eq!(settings.config_version(), 0);
}

#[test]
fn test_saved_document_has_no_legacy_keys() {
    let settings = parse(json!({
        "themeIndex": 1,
        "topBarAtBottom": false,
        "useOSLogo": false,
        "pluginSettings": { "weather": { "city": "Oslo" } },
    }));

    let saved = settings.to_json();
    for key in ["themeIndex", "topBarAtBottom", "useOSLogo", "pluginSettings"] {
        assert!(!saved.contains_key(key), "{}", key);
    }
    assert_eq!(saved.keys().count(), schema().valid_keys().len());
    assert_eq!(prune_unknown_keys(&settings.to_json_string().unwrap()), None);
}

#[test]
fn test_saved_document_round_trips() {
    let original = parse(json!({
        "themeIndex": 7,
        "topBarWidgetOrder": ["workspaceSwitcher", "music", "systemTray"],
        "mediaCompactMode": false,
        "popupTransparency": 60,
    }));

    let saved = original.to_json();
    let reparsed = ShellSettings::from_json(&saved).settings;
    assert_eq!(reparsed.to_json(), saved);
    assert_eq!(reparsed.get_str("currentThemeName"), Some("pink"));
    assert_eq!(reparsed.get_f64("popupTransparency"), Some(0.6));
}

#[test]
fn test_hooks_fire_on_set() {
    let fired = Rc::new(Cell::new(0));
    let counter = fired.clone();
    let hooks = HookTable::new().with(Hook::ApplyStoredTheme, move |settings| {
        assert_eq!(settings.get_str("currentThemeName"), Some("green"));
        counter.set(counter.get() + 1);
    });

    let mut settings = ShellSettings::new();
    let saves = Cell::new(0);
    assert!(settings.set("currentThemeName", "green", || saves.set(saves.get() + 1), &hooks));
    assert!(settings.set("showSeconds", true, || saves.set(saves.get() + 1), &hooks));

    assert_eq!(fired.get(), 1);
    assert_eq!(saves.get(), 2);
}

#[test]
fn test_upgrade_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shell-settings.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(&json!({
            "themeIndex": 0,
            "topBarAtBottom": true,
            "pluginSettings": { "clock": { "format": "HH:mm" } },
            "removedLongAgo": "yes",
        }))
        .unwrap(),
    )
    .unwrap();

    let file = SettingsFile::new(&path);
    let loaded = file.load().unwrap();
    assert!(loaded.needs_save);
    file.save(&loaded.settings).unwrap();

    let stored: Map<String, Value> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(stored.get("currentThemeName"), Some(&json!("blue")));
    assert_eq!(stored.get("dankBarPosition"), Some(&json!(1)));
    assert_eq!(stored.get("configVersion"), Some(&json!(CURRENT_CONFIG_VERSION)));
    assert!(!stored.contains_key("removedLongAgo"));
    assert!(!stored.contains_key("pluginSettings"));

    let plugins: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(PLUGIN_SETTINGS_FILE_NAME)).unwrap())
            .unwrap();
    assert_eq!(plugins, json!({ "clock": { "format": "HH:mm" } }));

    let reloaded = file.load().unwrap();
    assert!(!reloaded.needs_save);
    assert_eq!(reloaded.settings, loaded.settings);
}
