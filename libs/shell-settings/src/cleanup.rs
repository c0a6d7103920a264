//! Removal of unknown keys from stored documents

use crate::schema::schema;
use serde_json::{Map, Value};
use tracing::{info, warn};

/// Drop top-level keys the schema does not persist.
///
/// Returns the rewritten document only when a key was removed. Blank text,
/// invalid JSON and non-object documents all yield `None` so the caller
/// leaves the file alone; a corrupt file must never abort cleanup.
pub fn prune_unknown_keys(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    let mut document: Map<String, Value> = match serde_json::from_str(text) {
        Ok(Value::Object(document)) => document,
        Ok(_) => {
            warn!("Settings document is not a JSON object, skipping cleanup");
            return None;
        }
        Err(e) => {
            warn!("Failed to clean up unused settings keys: {}", e);
            return None;
        }
    };

    let registry = schema();
    let before = document.len();
    document.retain(|key, _| {
        let keep = registry.is_valid_key(key);
        if !keep {
            info!("Removing unused settings key: {}", key);
        }
        keep
    });

    if document.len() == before {
        return None;
    }

    match serde_json::to_string_pretty(&document) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Failed to encode cleaned settings document: {}", e);
            None
        }
    }
}
