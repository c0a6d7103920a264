//! Live settings state
//!
//! [`ShellSettings`] is the root object the shell reads from. It always holds
//! a value for every key in the schema: either the default or something
//! derived from a persisted document. Values are stored as
//! [`serde_json::Value`] and only ever inserted under keys the schema knows.

use crate::coerce::truthy;
use crate::hooks::HookTable;
use crate::migration;
use crate::schema::{schema, SettingDef, CONFIG_VERSION_KEY};
use crate::types::{BarPosition, LauncherLogoMode};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Schema version written by this build
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Top-level key under which older documents embedded plugin settings
pub const PLUGIN_SETTINGS_KEY: &str = "pluginSettings";

/// Root settings object
#[derive(Debug, Clone, PartialEq)]
pub struct ShellSettings {
    values: HashMap<&'static str, Value>,
    config_version: u32,
    plugin_settings: Value,
}

/// Result of parsing a persisted document
#[derive(Debug, Clone)]
pub struct Parsed {
    pub settings: ShellSettings,
    /// The document carried an embedded plugin blob that was moved out.
    /// The caller should save so the blob lands in its own file.
    pub plugins_migrated: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellSettings {
    /// Settings holding every default, at the current schema version
    pub fn new() -> Self {
        let mut settings = Self {
            values: HashMap::with_capacity(schema().len()),
            config_version: CURRENT_CONFIG_VERSION,
            plugin_settings: Value::Object(Map::new()),
        };
        settings.initialize_defaults();
        settings
    }

    /// Parse a persisted document.
    ///
    /// Runs defaults, then the legacy migrations, then the overlay of
    /// current keys. Running the overlay last means a value stored under its
    /// current name always wins over one rebuilt from legacy fields. A
    /// document without an integer `configVersion` is treated as version 0.
    pub fn from_json(document: &Map<String, Value>) -> Parsed {
        let mut settings = Self::new();
        let plugins_migrated = migration::migrate(&mut settings, document);
        settings.overlay(document);
        settings.config_version = document
            .get(CONFIG_VERSION_KEY)
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0);

        Parsed {
            settings,
            plugins_migrated,
        }
    }

    /// Reset every schema key, persisted or not, to its default
    pub fn initialize_defaults(&mut self) {
        for def in schema().iter() {
            self.values.insert(def.key, def.default.clone());
        }
    }

    /// Copy values for known, persisted keys from a raw document.
    ///
    /// Values the schema's coercion rejects leave the current value in
    /// place. Unknown keys, runtime-only keys and `null` values are skipped.
    pub fn overlay(&mut self, document: &Map<String, Value>) {
        for (key, raw) in document {
            let Some(def) = schema().get(key) else {
                continue;
            };
            if !def.persist || raw.is_null() {
                continue;
            }
            self.apply(def, raw);
        }
    }

    /// Store a coerced value. Returns false if the coercion rejected it.
    pub(crate) fn apply(&mut self, def: &SettingDef, raw: &Value) -> bool {
        match def.normalize(raw) {
            Some(value) => {
                self.values.insert(def.key, value);
                true
            }
            None => {
                tracing::debug!("Rejected stored value for {}: {}", def.key, raw);
                false
            }
        }
    }

    /// Store a value without coercion under a known key
    pub(crate) fn put(&mut self, key: &str, value: Value) {
        if let Some(def) = schema().get(key) {
            self.values.insert(def.key, value);
        }
    }

    /// Serialise every persisted key in schema order, plus `configVersion`
    pub fn to_json(&self) -> Map<String, Value> {
        let mut out = Map::new();
        for def in schema().persisted() {
            let value = self.values.get(def.key).unwrap_or(&def.default);
            out.insert(def.key.to_string(), value.clone());
        }
        out.insert(
            CONFIG_VERSION_KEY.to_string(),
            Value::from(self.config_version),
        );
        out
    }

    /// Pretty-printed [`Self::to_json`]
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }

    /// Update a setting.
    ///
    /// Unknown keys and `null` values are ignored and `persist` is not
    /// called, since a stored `null` would read back as the default.
    /// Otherwise the value is stored as given, the key's change hook runs if the table
    /// binds it, and `persist` is called, whether or not the value changed.
    pub fn set<V, P>(&mut self, key: &str, value: V, persist: P, hooks: &HookTable) -> bool
    where
        V: Into<Value>,
        P: FnOnce(),
    {
        let Some(def) = schema().get(key) else {
            tracing::debug!("Ignoring unknown setting {}", key);
            return false;
        };
        let value: Value = value.into();
        if value.is_null() {
            tracing::debug!("Ignoring null value for {}", key);
            return false;
        }

        self.values.insert(def.key, value);
        if let Some(hook) = def.on_change {
            hooks.invoke(hook, self);
        }
        persist();
        true
    }

    /// Current value of a setting
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// String entries of a list setting; non-string entries are skipped
    pub fn get_str_list(&self, key: &str) -> Option<Vec<&str>> {
        self.get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
    }

    /// Edge the bar is pinned to
    pub fn bar_position(&self) -> BarPosition {
        match self.get("dankBarPosition") {
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(BarPosition::from_index)
                .unwrap_or_default(),
            Some(flag @ Value::Bool(_)) => BarPosition::from_at_bottom(truthy(flag)),
            _ => BarPosition::default(),
        }
    }

    /// Launcher logo source; unrecognised names read as the default
    pub fn launcher_logo_mode(&self) -> LauncherLogoMode {
        self.get_str("launcherLogoMode")
            .and_then(LauncherLogoMode::parse)
            .unwrap_or_default()
    }

    pub fn config_version(&self) -> u32 {
        self.config_version
    }

    pub fn set_config_version(&mut self, version: u32) {
        self.config_version = version;
    }

    /// Opaque plugin settings blob
    pub fn plugin_settings(&self) -> &Value {
        &self.plugin_settings
    }

    pub fn set_plugin_settings(&mut self, blob: Value) {
        self.plugin_settings = blob;
    }
}

impl Serialize for ShellSettings {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}
