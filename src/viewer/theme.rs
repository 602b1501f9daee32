//! Light/dark preference.
//!
//! Read once at startup, flipped by `toggle`, written back after every
//! flip. Storage failures never surface: the preference just stops
//! surviving restarts.

use std::fmt;

use tracing::{debug, warn};

use super::icons::Icon;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Indicator shown next to the tab bar.
    pub fn indicator(self) -> Icon {
        match self {
            ThemeMode::Light => Icon::Sun,
            ThemeMode::Dark => Icon::Moon,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct ThemePreference {
    mode: ThemeMode,
    indicator: Icon,
    key: String,
    store: Box<dyn KeyValueStore>,
}

impl ThemePreference {
    /// Restore the stored preference. Only the exact value `dark` selects
    /// dark mode; anything else, including a read error, stays light.
    pub fn load_initial(store: Box<dyn KeyValueStore>, key: &str) -> Self {
        let mut pref = Self {
            mode: ThemeMode::Light,
            indicator: ThemeMode::Light.indicator(),
            key: key.to_string(),
            store,
        };
        match pref.store.get(key) {
            Ok(Some(value)) if value == ThemeMode::Dark.as_str() => pref.apply(ThemeMode::Dark),
            Ok(_) => {}
            Err(e) => warn!("could not read theme preference: {e}"),
        }
        debug!(mode = %pref.mode, "theme loaded");
        pref
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn indicator(&self) -> Icon {
        self.indicator
    }

    /// Flip the mode and persist it.
    pub fn toggle(&mut self) {
        self.apply(self.mode.flipped());
        if let Err(e) = self.store.set(&self.key, self.mode.as_str()) {
            warn!("could not persist theme preference: {e}");
        }
        debug!(mode = %self.mode, "theme toggled");
    }

    /// Hand the store back, e.g. to reopen it in a new session.
    pub fn into_store(self) -> Box<dyn KeyValueStore> {
        self.store
    }

    fn apply(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.indicator = mode.indicator();
    }
}
