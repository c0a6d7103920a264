//! Change hooks fired by `ShellSettings::set`

use crate::store::ShellSettings;
use std::collections::HashMap;
use std::fmt;

/// Hooks a setting can name as its change handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Re-apply the stored colour theme
    ApplyStoredTheme,
    /// Regenerate GTK/Qt and matugen output
    RegenSystemThemes,
    /// Push gaps and radii to the compositor layout
    UpdateNiriLayout,
    /// Re-apply the stored icon theme
    ApplyStoredIconTheme,
}

impl Hook {
    pub const ALL: [Hook; 4] = [
        Hook::ApplyStoredTheme,
        Hook::RegenSystemThemes,
        Hook::UpdateNiriLayout,
        Hook::ApplyStoredIconTheme,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Hook::ApplyStoredTheme => "applyStoredTheme",
            Hook::RegenSystemThemes => "regenSystemThemes",
            Hook::UpdateNiriLayout => "updateNiriLayout",
            Hook::ApplyStoredIconTheme => "applyStoredIconTheme",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback bound to a hook
pub type HookFn = Box<dyn Fn(&ShellSettings)>;

/// Host-supplied hook implementations, resolved once at startup
#[derive(Default)]
pub struct HookTable {
    hooks: HashMap<Hook, HookFn>,
}

impl HookTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a callback, replacing any previous one
    pub fn register<F>(&mut self, hook: Hook, callback: F)
    where
        F: Fn(&ShellSettings) + 'static,
    {
        self.hooks.insert(hook, Box::new(callback));
    }

    /// Builder-style [`Self::register`]
    pub fn with<F>(mut self, hook: Hook, callback: F) -> Self
    where
        F: Fn(&ShellSettings) + 'static,
    {
        self.register(hook, callback);
        self
    }

    pub fn is_registered(&self, hook: Hook) -> bool {
        self.hooks.contains_key(&hook)
    }

    /// Run a hook if bound. Returns whether anything ran.
    pub fn invoke(&self, hook: Hook, settings: &ShellSettings) -> bool {
        match self.hooks.get(&hook) {
            Some(callback) => {
                tracing::debug!("Running settings hook {}", hook);
                callback(settings);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl fmt::Debug for HookTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.hooks.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_invoke_registered_hook() {
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let table = HookTable::new().with(Hook::UpdateNiriLayout, move |_| seen.set(seen.get() + 1));

        let settings = ShellSettings::new();
        assert!(table.invoke(Hook::UpdateNiriLayout, &settings));
        assert!(!table.invoke(Hook::ApplyStoredTheme, &settings));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_hook_receives_settings() {
        let theme = Rc::new(std::cell::RefCell::new(String::new()));
        let seen = theme.clone();
        let mut table = HookTable::new();
        table.register(Hook::ApplyStoredTheme, move |s| {
            *seen.borrow_mut() = s.get_str("currentThemeName").unwrap_or_default().to_string();
        });

        table.invoke(Hook::ApplyStoredTheme, &ShellSettings::new());
        assert_eq!(theme.borrow().as_str(), "blue");
    }

    #[test]
    fn test_hook_names() {
        let names: Vec<_> = Hook::ALL.iter().map(Hook::as_str).collect();
        assert_eq!(
            names,
            vec!["applyStoredTheme", "regenSystemThemes", "updateNiriLayout", "applyStoredIconTheme"]
        );
    }
}
