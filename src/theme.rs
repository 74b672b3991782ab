//! Theme model: pure light/dark transitions plus preference persistence.
//!
//! The document carries the theme as a `data-theme` attribute. Precedence
//! for the initial value is explicit stored preference, then the OS
//! color-scheme preference, then no attribute at all (the stylesheet's
//! default). Persistence is a thin adapter over `localStorage`; reads and
//! writes degrade silently when storage is unavailable.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::THEME_STORAGE_KEY;

/// A named visual mode, applied as a document-level attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Attribute / storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse the attribute / storage representation. Anything other than
    /// the two literal values is treated as unset.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Inputs that determine the theme at page load.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeState {
    /// Explicit preference read from storage, if any.
    pub stored: Option<Theme>,
    /// Whether the OS currently prefers a dark color scheme.
    pub system_dark: bool,
}

impl ThemeState {
    /// Theme to apply at load: stored preference wins, else the OS
    /// preference promotes dark, else the attribute stays unset.
    #[must_use]
    pub fn initial(self) -> Option<Theme> {
        match (self.stored, self.system_dark) {
            (Some(theme), _) => Some(theme),
            (None, true) => Some(Theme::Dark),
            (None, false) => None,
        }
    }
}

/// Next theme after a toggle. An unset or light attribute flips to dark;
/// dark flips to light.
#[must_use]
pub fn next_theme(current: Option<Theme>) -> Theme {
    match current {
        Some(Theme::Dark) => Theme::Light,
        Some(Theme::Light) | None => Theme::Dark,
    }
}

/// Persistence adapter for the explicit theme preference.
pub trait PreferenceStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
}

/// `localStorage`-backed store. Absent or failing storage reads as no
/// preference; failed writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebPreferenceStore;

impl WebPreferenceStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for WebPreferenceStore {
    fn load(&self) -> Option<Theme> {
        let value = Self::storage()?.get_item(THEME_STORAGE_KEY).ok().flatten()?;
        Theme::parse(&value)
    }

    fn save(&self, theme: Theme) {
        if let Some(storage) = Self::storage()
            && storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err()
        {
            log::debug!("theme preference was not persisted");
        }
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    slot: std::cell::RefCell<Option<Theme>>,
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<Theme> {
        *self.slot.borrow()
    }

    fn save(&self, theme: Theme) {
        *self.slot.borrow_mut() = Some(theme);
    }
}
