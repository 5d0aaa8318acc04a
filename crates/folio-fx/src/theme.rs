//! Theme preference
//!
//! The theme is stored under `theme` as `"light"` or `"dark"`. Pages that
//! predate that key stored a `darkMode` boolean; it is honored on read when
//! `theme` is absent and never written.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::FxError;

/// Storage key of the theme preference
pub const THEME_KEY: &str = "theme";

/// Legacy boolean flag (`"true"` / `"false"`)
pub const LEGACY_DARK_MODE_KEY: &str = "darkMode";

/// String-keyed preference storage (`localStorage` in the browser)
pub trait PreferenceStore {
    /// Read a value; unavailable storage reads as `None`
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> Result<(), FxError>;
}

/// In-memory store, used when browser storage is unavailable and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FxError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Light or dark page theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Resolve the stored preference
    ///
    /// Order: `theme`, then the legacy `darkMode` flag, then dark.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        if let Some(theme) = store.get(THEME_KEY).as_deref().and_then(Theme::from_str) {
            return theme;
        }
        match store.get(LEGACY_DARK_MODE_KEY).as_deref() {
            Some("true") => Theme::Dark,
            Some("false") => Theme::Light,
            _ => Theme::default(),
        }
    }

    /// Persist under `theme`
    pub fn save(self, store: &dyn PreferenceStore) -> Result<(), FxError> {
        store.set(THEME_KEY, self.as_str())
    }

    /// Body class applied for this theme
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Light => "light-mode",
            Theme::Dark => "dark-mode",
        }
    }

    /// `aria-pressed` of the toggle: pressed means dark
    pub fn aria_pressed(self) -> &'static str {
        match self {
            Theme::Light => "false",
            Theme::Dark => "true",
        }
    }

    /// Accessible label describing what the toggle will do
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }

    /// Icon offered by the toggle
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists_and_reloads() {
        let store = MemoryStore::new();
        let theme = Theme::load(&store).toggled();
        theme.save(&store).unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_legacy_flag() {
        let store = MemoryStore::new();
        store.set(LEGACY_DARK_MODE_KEY, "false").unwrap();
        assert_eq!(Theme::load(&store), Theme::Light);

        // The current key wins over the legacy flag
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn test_garbage_falls_back() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn test_toggle_presentation() {
        assert_eq!(Theme::Dark.body_class(), "dark-mode");
        assert_eq!(Theme::Dark.aria_pressed(), "true");
        assert_eq!(Theme::Dark.toggle_icon(), "fa-sun");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
    }
}
