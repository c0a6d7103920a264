//! Settings schema registry
//!
//! The registry is an ordered, immutable table of setting definitions built
//! once per process. Everything else in the crate looks keys up here; a key
//! the registry does not know is never stored and never persisted.

use crate::coerce::Coercion;
use crate::hooks::Hook;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

/// Reserved top-level key tracking the persisted schema version
pub const CONFIG_VERSION_KEY: &str = "configVersion";

static SCHEMA: Lazy<SchemaRegistry> = Lazy::new(crate::table::build);

/// The process-wide settings schema
pub fn schema() -> &'static SchemaRegistry {
    &SCHEMA
}

/// Definition of a single setting
#[derive(Debug, Clone)]
pub struct SettingDef {
    /// Persisted key name
    pub key: &'static str,
    /// Value used when the key is absent from input
    pub default: Value,
    /// Normalisation applied to persisted and migrated values
    pub coerce: Option<Coercion>,
    /// Whether the key is read from and written to storage
    pub persist: bool,
    /// Hook fired after a successful `set`
    pub on_change: Option<Hook>,
    /// Earlier key names, checked in order
    pub legacy_aliases: &'static [&'static str],
}

impl SettingDef {
    fn new(key: &'static str, default: Value) -> Self {
        Self {
            key,
            default,
            coerce: None,
            persist: true,
            on_change: None,
            legacy_aliases: &[],
        }
    }

    /// Attach a coercion
    pub fn coerce(&mut self, coerce: Coercion) -> &mut Self {
        self.coerce = Some(coerce);
        self
    }

    /// Mark as computed at runtime, never persisted
    pub fn runtime_only(&mut self) -> &mut Self {
        self.persist = false;
        self
    }

    /// Attach a change hook
    pub fn on_change(&mut self, hook: Hook) -> &mut Self {
        self.on_change = Some(hook);
        self
    }

    /// Record earlier key names
    pub fn aliases(&mut self, aliases: &'static [&'static str]) -> &mut Self {
        self.legacy_aliases = aliases;
        self
    }

    /// Apply the coercion, if any, to a raw value.
    ///
    /// `None` means the value was rejected.
    pub fn normalize(&self, raw: &Value) -> Option<Value> {
        match self.coerce {
            Some(coerce) => coerce(raw),
            None => Some(raw.clone()),
        }
    }
}

/// Builder for the schema table
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    defs: Vec<SettingDef>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a setting and return it for further configuration
    pub fn setting(&mut self, key: &'static str, default: Value) -> &mut SettingDef {
        self.defs.push(SettingDef::new(key, default));
        let last = self.defs.len() - 1;
        &mut self.defs[last]
    }

    /// Finish the table.
    ///
    /// A repeated key keeps its first definition; later ones are dropped
    /// with a warning.
    pub fn build(self) -> SchemaRegistry {
        let mut defs = Vec::with_capacity(self.defs.len());
        let mut index = HashMap::with_capacity(self.defs.len());

        for def in self.defs {
            if index.contains_key(def.key) {
                tracing::warn!("Duplicate setting definition ignored: {}", def.key);
                continue;
            }
            index.insert(def.key, defs.len());
            defs.push(def);
        }

        SchemaRegistry { defs, index }
    }
}

/// Ordered table of setting definitions
#[derive(Debug)]
pub struct SchemaRegistry {
    defs: Vec<SettingDef>,
    index: HashMap<&'static str, usize>,
}

impl SchemaRegistry {
    /// Look up a definition by key
    pub fn get(&self, key: &str) -> Option<&SettingDef> {
        self.index.get(key).map(|&i| &self.defs[i])
    }

    /// Check whether a key is defined
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All definitions in table order
    pub fn iter(&self) -> impl Iterator<Item = &SettingDef> {
        self.defs.iter()
    }

    /// All keys in table order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.defs.iter().map(|d| d.key)
    }

    /// Definitions that are read from and written to storage
    pub fn persisted(&self) -> impl Iterator<Item = &SettingDef> {
        self.defs.iter().filter(|d| d.persist)
    }

    /// Keys allowed at the top level of a stored document
    pub fn valid_keys(&self) -> Vec<&'static str> {
        self.persisted()
            .map(|d| d.key)
            .chain(std::iter::once(CONFIG_VERSION_KEY))
            .collect()
    }

    /// Check a top-level document key against [`Self::valid_keys`]
    pub fn is_valid_key(&self, key: &str) -> bool {
        key == CONFIG_VERSION_KEY || self.get(key).map(|d| d.persist).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
