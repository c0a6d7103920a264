//! # Nyx Shell Settings
//!
//! Settings schema, default resolution, JSON persistence mapping and
//! legacy migration for the Nyx desktop shell.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     SettingsFile                          │
//! │        shell-settings.json   plugin_settings.json         │
//! └──────────────────────────┬───────────────────────────────┘
//!                            │ serde_json::Map
//! ┌──────────────────────────┴───────────────────────────────┐
//! │                     Store Engine                          │
//! │  migrate ──► overlay ──► ShellSettings ──► to_json        │
//! │                              │                            │
//! │                    set ──► HookTable ──► persist          │
//! └──────────────────────────┬───────────────────────────────┘
//!                            │ lookups
//! ┌──────────────────────────┴───────────────────────────────┐
//! │               SchemaRegistry (static, read-only)          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use nyx_shell_settings::{HookTable, SettingsFile};
//!
//! let file = SettingsFile::new(SettingsFile::default_location());
//! let mut loaded = file.load()?;
//! if loaded.needs_save {
//!     file.save(&loaded.settings)?;
//! }
//!
//! let mut dirty = false;
//! loaded.settings.set("showSeconds", true, || dirty = true, &HookTable::new());
//! if dirty {
//!     file.save(&loaded.settings)?;
//! }
//! # Ok::<(), nyx_shell_settings::SettingsError>(())
//! ```
//!
//! Malformed values never fail a load: a value the schema cannot coerce
//! leaves the default in place, and unknown keys are dropped. Only file I/O
//! in [`SettingsFile`] reports errors.

mod cleanup;
mod coerce;
mod error;
mod file;
mod hooks;
mod migration;
mod schema;
mod store;
mod table;
mod types;

pub use cleanup::prune_unknown_keys;
pub use coerce::{percent_to_unit, truthy, Coercion};
pub use error::{Result, SettingsError};
pub use file::{Loaded, SettingsFile, PLUGIN_SETTINGS_FILE_NAME, SETTINGS_FILE_NAME};
pub use hooks::{Hook, HookFn, HookTable};
pub use migration::{migrate, LEGACY_THEME_NAMES};
pub use schema::{schema, RegistryBuilder, SchemaRegistry, SettingDef, CONFIG_VERSION_KEY};
pub use store::{Parsed, ShellSettings, CURRENT_CONFIG_VERSION, PLUGIN_SETTINGS_KEY};
pub use types::{BarPosition, LauncherLogoMode};

/// Re-export common types
pub mod prelude {
    pub use crate::hooks::{Hook, HookTable};
    pub use crate::schema::{schema, SettingDef};
    pub use crate::store::ShellSettings;
    pub use crate::file::SettingsFile;
    pub use crate::types::{BarPosition, LauncherLogoMode};
}
