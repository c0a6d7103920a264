//! Legacy document migration
//!
//! Older shells stored some settings under different names or shapes. The
//! transforms below read those legacy fields from the raw document and
//! write the equivalent current settings. They never modify the document
//! itself, and each one only fires when its legacy fields are present.
//!
//! `null` counts as absent throughout.

use crate::coerce::truthy;
use crate::schema::schema;
use crate::store::{ShellSettings, PLUGIN_SETTINGS_KEY};
use crate::types::{BarPosition, LauncherLogoMode};
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Named themes, in the order the legacy `themeIndex` counted them
pub const LEGACY_THEME_NAMES: [&str; 10] = [
    "blue", "deepBlue", "purple", "green", "orange", "red", "cyan", "pink", "amber", "coral",
];

const DYNAMIC_THEME: &str = "dynamic";

const LEGACY_WIDGET_ORDER_KEYS: [&str; 2] = ["dankBarWidgetOrder", "topBarWidgetOrder"];
const BAR_BUCKET_KEYS: [&str; 3] = [
    "dankBarLeftWidgets",
    "dankBarCenterWidgets",
    "dankBarRightWidgets",
];
const LEFT_WIDGETS: &[&str] = &["launcherButton", "workspaceSwitcher", "focusedWindow"];
const CENTER_WIDGETS: &[&str] = &["clock", "music", "weather"];
const RIGHT_WIDGETS: &[&str] = &[
    "systemTray",
    "clipboard",
    "systemResources",
    "notificationButton",
    "battery",
    "controlCenterButton",
];

const DEFAULT_LOGO_BRIGHTNESS: f64 = 0.5;
const DEFAULT_LOGO_CONTRAST: i64 = 1;

const LEGACY_AT_BOTTOM_KEYS: [&str; 2] = ["dankBarAtBottom", "topBarAtBottom"];

/// Apply every legacy transform to `settings`.
///
/// Returns true only when an embedded `pluginSettings` blob was carried
/// over, which the caller must persist. The other transforms do not affect
/// the return value.
pub fn migrate(settings: &mut ShellSettings, document: &Map<String, Value>) -> bool {
    let fired = [
        migrate_theme_index(settings, document),
        split_widget_order(settings, document),
        fold_os_logo(settings, document),
        fold_media_compact_mode(settings, document),
        resolve_aliases(settings, document) > 0,
        fold_bar_at_bottom(settings, document),
    ];
    let plugins_migrated = carry_plugin_settings(settings, document);

    let applied = fired.iter().filter(|f| **f).count() + usize::from(plugins_migrated);
    if applied > 0 {
        debug!("Applied {} legacy settings transforms", applied);
    }
    plugins_migrated
}

fn present<'a>(document: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    document.get(key).filter(|v| !v.is_null())
}

/// `themeIndex` / `themeIsDynamic` -> `currentThemeName`
fn migrate_theme_index(settings: &mut ShellSettings, document: &Map<String, Value>) -> bool {
    let is_dynamic = present(document, "themeIsDynamic");
    let index = present(document, "themeIndex");
    if is_dynamic.is_none() && index.is_none() {
        return false;
    }

    let name = if is_dynamic.map(truthy).unwrap_or(false) {
        Some(DYNAMIC_THEME)
    } else {
        index
            .and_then(Value::as_u64)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| LEGACY_THEME_NAMES.get(i).copied())
    };

    match name {
        Some(name) => {
            settings.put("currentThemeName", Value::from(name));
            info!("Migrated theme index {:?} to {}", index, name);
            true
        }
        None => false,
    }
}

/// Single widget order list -> left/center/right bar lists
///
/// Takes the first non-empty legacy list. Older shells let an empty
/// `dankBarWidgetOrder` shadow `topBarWidgetOrder`, which emptied all three
/// sections; an empty list is skipped here instead.
fn split_widget_order(settings: &mut ShellSettings, document: &Map<String, Value>) -> bool {
    let Some(order) = LEGACY_WIDGET_ORDER_KEYS
        .iter()
        .filter_map(|key| present(document, key))
        .filter_map(Value::as_array)
        .find(|order| !order.is_empty())
    else {
        return false;
    };

    if BAR_BUCKET_KEYS.iter().any(|key| present(document, key).is_some()) {
        return false;
    }

    let bucket = |members: &[&str]| -> Value {
        order
            .iter()
            .filter_map(Value::as_str)
            .filter(|id| members.contains(id))
            .map(Value::from)
            .collect()
    };

    let [left, center, right] = BAR_BUCKET_KEYS;
    settings.put(left, bucket(LEFT_WIDGETS));
    settings.put(center, bucket(CENTER_WIDGETS));
    settings.put(right, bucket(RIGHT_WIDGETS));
    info!("Split legacy widget order into bar sections");
    true
}

/// `useOSLogo` + `osLogo*` -> `launcherLogo*`
fn fold_os_logo(settings: &mut ShellSettings, document: &Map<String, Value>) -> bool {
    let Some(use_os_logo) = present(document, "useOSLogo") else {
        return false;
    };

    let mode = if truthy(use_os_logo) {
        LauncherLogoMode::Os
    } else {
        LauncherLogoMode::Apps
    };
    let companion = |key: &str, fallback: Value| present(document, key).cloned().unwrap_or(fallback);

    settings.put("launcherLogoMode", mode.to_value());
    settings.put(
        "launcherLogoColorOverride",
        companion("osLogoColorOverride", Value::from("")),
    );
    settings.put(
        "launcherLogoBrightness",
        companion("osLogoBrightness", Value::from(DEFAULT_LOGO_BRIGHTNESS)),
    );
    settings.put(
        "launcherLogoContrast",
        companion("osLogoContrast", Value::from(DEFAULT_LOGO_CONTRAST)),
    );
    info!("Migrated OS logo settings to launcher logo mode {}", mode.as_str());
    true
}

/// `mediaCompactMode` -> `mediaSize`, unless `mediaSize` is already stored
fn fold_media_compact_mode(settings: &mut ShellSettings, document: &Map<String, Value>) -> bool {
    let Some(compact) = present(document, "mediaCompactMode") else {
        return false;
    };
    if present(document, "mediaSize").is_some() {
        return false;
    }

    let size = if truthy(compact) { 0 } else { 1 };
    settings.put("mediaSize", Value::from(size));
    info!("Migrated media compact mode to media size {}", size);
    true
}

/// Renamed keys listed in the schema's `legacy_aliases`.
///
/// Only fires for keys whose current name is absent; the first alias found
/// wins. Coercion rejections keep the default, as in the overlay.
fn resolve_aliases(settings: &mut ShellSettings, document: &Map<String, Value>) -> usize {
    let mut resolved = 0;

    for def in schema().persisted() {
        if def.legacy_aliases.is_empty() || present(document, def.key).is_some() {
            continue;
        }

        let found = def
            .legacy_aliases
            .iter()
            .find_map(|alias| present(document, alias).map(|raw| (*alias, raw)));

        if let Some((alias, raw)) = found {
            if settings.apply(def, raw) {
                info!("Migrated {} to {}", alias, def.key);
                resolved += 1;
            }
        }
    }

    resolved
}

/// `dankBarAtBottom` / `topBarAtBottom` -> `dankBarPosition`
fn fold_bar_at_bottom(settings: &mut ShellSettings, document: &Map<String, Value>) -> bool {
    let Some(at_bottom) = LEGACY_AT_BOTTOM_KEYS
        .iter()
        .find_map(|key| present(document, key))
    else {
        return false;
    };

    let position = BarPosition::from_at_bottom(truthy(at_bottom));
    settings.put("dankBarPosition", position.to_value());
    info!("Migrated bar bottom flag to position {:?}", position);
    true
}

/// Embedded `pluginSettings` blob -> `ShellSettings::plugin_settings`
fn carry_plugin_settings(settings: &mut ShellSettings, document: &Map<String, Value>) -> bool {
    match present(document, PLUGIN_SETTINGS_KEY) {
        Some(blob) => {
            settings.set_plugin_settings(blob.clone());
            info!("Moved embedded plugin settings out of the settings document");
            true
        }
        None => false,
    }
}
