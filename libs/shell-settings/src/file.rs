//! Settings documents on disk
//!
//! The engine itself never touches the filesystem. This adapter reads the
//! settings document and the sibling plugin document, runs the parse
//! pipeline and decides whether the result has to be written back.

use crate::cleanup::prune_unknown_keys;
use crate::error::{Result, SettingsError};
use crate::schema::schema;
use crate::store::{Parsed, ShellSettings, CURRENT_CONFIG_VERSION};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Settings document file name
pub const SETTINGS_FILE_NAME: &str = "shell-settings.json";

/// Plugin settings document, stored next to the settings document
pub const PLUGIN_SETTINGS_FILE_NAME: &str = "plugin_settings.json";

/// Outcome of [`SettingsFile::load`]
#[derive(Debug, Clone)]
pub struct Loaded {
    pub settings: ShellSettings,
    /// The stored document is stale and should be rewritten with
    /// [`SettingsFile::save`]
    pub needs_save: bool,
}

impl Loaded {
    fn defaults(plugin_settings: Option<Value>) -> Self {
        let mut settings = ShellSettings::new();
        if let Some(blob) = plugin_settings {
            settings.set_plugin_settings(blob);
        }
        Self {
            settings,
            needs_save: false,
        }
    }
}

/// A settings document location
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
    plugin_path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let plugin_path = path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(PLUGIN_SETTINGS_FILE_NAME);
        Self { path, plugin_path }
    }

    /// `<config dir>/nyx/shell-settings.json`
    pub fn default_location() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nyx")
            .join(SETTINGS_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn plugin_path(&self) -> &Path {
        &self.plugin_path
    }

    /// Load settings, falling back to defaults.
    ///
    /// A missing, blank or unparsable document yields defaults and leaves
    /// the file untouched. Only I/O failures other than "not found" are
    /// errors.
    pub fn load(&self) -> Result<Loaded> {
        let plugin_settings = self.load_plugin_settings()?;

        let Some(text) = read_optional(&self.path)? else {
            info!("No settings at {:?}, using defaults", self.path);
            return Ok(Loaded::defaults(plugin_settings));
        };

        let document = match parse_document(&text) {
            Some(document) => document,
            None => {
                warn!("Unreadable settings at {:?}, using defaults", self.path);
                return Ok(Loaded::defaults(plugin_settings));
            }
        };

        let Parsed {
            mut settings,
            plugins_migrated,
        } = ShellSettings::from_json(&document);

        if !plugins_migrated {
            if let Some(blob) = plugin_settings {
                settings.set_plugin_settings(blob);
            }
        }

        let stale = settings.config_version() < CURRENT_CONFIG_VERSION;
        if stale {
            info!(
                "Upgrading settings from version {} to {}",
                settings.config_version(),
                CURRENT_CONFIG_VERSION
            );
            settings.set_config_version(CURRENT_CONFIG_VERSION);
        }

        let has_unknown_keys = document.keys().any(|key| !schema().is_valid_key(key));

        info!("Loaded settings from {:?}", self.path);
        Ok(Loaded {
            settings,
            needs_save: plugins_migrated || stale || has_unknown_keys,
        })
    }

    /// Write the settings document, and the plugin document when there is
    /// plugin data or a readable plugin file already exists.
    ///
    /// An unreadable plugin file is never replaced by an empty blob.
    pub fn save(&self, settings: &ShellSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SettingsError::io(parent, e))?;
        }

        let content = settings.to_json_string()?;
        fs::write(&self.path, content).map_err(|e| SettingsError::io(&self.path, e))?;

        let blob = settings.plugin_settings();
        if !is_empty_blob(blob) || self.load_plugin_settings()?.is_some() {
            let content = serde_json::to_string_pretty(blob)?;
            fs::write(&self.plugin_path, content)
                .map_err(|e| SettingsError::io(&self.plugin_path, e))?;
        }

        debug!("Saved settings to {:?}", self.path);
        Ok(())
    }

    /// Remove unknown keys from the stored document in place.
    ///
    /// Returns whether the file was rewritten.
    pub fn cleanup(&self) -> Result<bool> {
        let Some(text) = read_optional(&self.path)? else {
            return Ok(false);
        };

        match prune_unknown_keys(&text) {
            Some(cleaned) => {
                fs::write(&self.path, cleaned).map_err(|e| SettingsError::io(&self.path, e))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn load_plugin_settings(&self) -> Result<Option<Value>> {
        let Some(text) = read_optional(&self.plugin_path)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) => {
                warn!("Ignoring unreadable plugin settings at {:?}: {}", self.plugin_path, e);
                Ok(None)
            }
        }
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SettingsError::io(path, e)),
    }
}

fn parse_document(text: &str) -> Option<Map<String, Value>> {
    if text.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(text) {
        Ok(Value::Object(document)) => Some(document),
        Ok(_) => None,
        Err(e) => {
            warn!("Failed to parse settings: {}", e);
            None
        }
    }
}

fn is_empty_blob(blob: &Value) -> bool {
    match blob {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::HookTable;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let file = SettingsFile::new(dir.path().join(SETTINGS_FILE_NAME));

        let loaded = file.load().unwrap();
        assert!(!loaded.needs_save);
        assert_eq!(loaded.settings, ShellSettings::new());
        assert!(!file.path().exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let file = SettingsFile::new(dir.path().join("nested").join(SETTINGS_FILE_NAME));

        let mut settings = ShellSettings::new();
        settings.set("fontFamily", "Iosevka", || {}, &HookTable::new());
        file.save(&settings).unwrap();

        let loaded = file.load().unwrap();
        assert!(!loaded.needs_save);
        assert_eq!(loaded.settings.get_str("fontFamily"), Some("Iosevka"));
        assert!(!file.plugin_path().exists());
    }

    #[test]
    fn test_corrupt_file_gives_defaults_and_is_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "{ broken").unwrap();

        let file = SettingsFile::new(&path);
        let loaded = file.load().unwrap();
        assert!(!loaded.needs_save);
        assert_eq!(loaded.settings, ShellSettings::new());
        assert!(!file.cleanup().unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ broken");
    }

    #[test]
    fn test_legacy_document_needs_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{ "topBarAtBottom": true }"#).unwrap();

        let file = SettingsFile::new(&path);
        let loaded = file.load().unwrap();
        assert!(loaded.needs_save);
        assert_eq!(loaded.settings.config_version(), CURRENT_CONFIG_VERSION);

        file.save(&loaded.settings).unwrap();
        let stored: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(stored["dankBarPosition"], json!(1));
        assert!(stored.get("topBarAtBottom").is_none());

        assert!(!file.load().unwrap().needs_save);
    }

    #[test]
    fn test_embedded_plugin_settings_move_to_own_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(
            &path,
            r#"{ "configVersion": 1, "pluginSettings": { "clock": { "tz": "UTC" } } }"#,
        )
        .unwrap();

        let file = SettingsFile::new(&path);
        let loaded = file.load().unwrap();
        assert!(loaded.needs_save);
        file.save(&loaded.settings).unwrap();

        let plugins: Value =
            serde_json::from_str(&fs::read_to_string(file.plugin_path()).unwrap()).unwrap();
        assert_eq!(plugins, json!({ "clock": { "tz": "UTC" } }));

        let reloaded = file.load().unwrap();
        assert!(!reloaded.needs_save);
        assert_eq!(reloaded.settings.plugin_settings(), &plugins);
    }

    #[test]
    fn test_save_keeps_unreadable_plugin_file() {
        let dir = tempdir().unwrap();
        let file = SettingsFile::new(dir.path().join(SETTINGS_FILE_NAME));
        fs::write(file.plugin_path(), r#"{ "clock": { "tz": "UT"#).unwrap();

        let mut loaded = file.load().unwrap();
        let mut dirty = false;
        loaded.settings.set("showSeconds", true, || dirty = true, &HookTable::new());
        assert!(dirty);
        file.save(&loaded.settings).unwrap();

        assert_eq!(
            fs::read_to_string(file.plugin_path()).unwrap(),
            r#"{ "clock": { "tz": "UT"#
        );
        assert_eq!(file.load().unwrap().settings.get_bool("showSeconds"), Some(true));
    }

    #[test]
    fn test_save_clears_readable_plugin_file() {
        let dir = tempdir().unwrap();
        let file = SettingsFile::new(dir.path().join(SETTINGS_FILE_NAME));
        fs::write(file.plugin_path(), r#"{ "clock": {} }"#).unwrap();

        let mut loaded = file.load().unwrap();
        loaded.settings.set_plugin_settings(json!({}));
        file.save(&loaded.settings).unwrap();

        assert_eq!(fs::read_to_string(file.plugin_path()).unwrap(), "{}");
    }

    #[test]
    fn test_cleanup_rewrites_only_when_needed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{ "showSeconds": true, "oldKey": 1 }"#).unwrap();

        let file = SettingsFile::new(&path);
        assert!(file.cleanup().unwrap());
        let stored: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(stored, json!({ "showSeconds": true }));
        assert!(!file.cleanup().unwrap());
    }

    #[test]
    fn test_cleanup_missing_file() {
        let dir = tempdir().unwrap();
        let file = SettingsFile::new(dir.path().join(SETTINGS_FILE_NAME));
        assert!(!file.cleanup().unwrap());
    }
}
