//! Light/dark theme preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, StorageError};

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

pub struct ThemeStore<S> {
    store: S,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved theme, light when nothing (or something unknown) is stored.
    pub fn get(&self) -> Result<Theme, StorageError> {
        let Some(raw) = self.store.get(THEME_KEY)? else {
            return Ok(Theme::default());
        };

        match raw.parse() {
            Ok(theme) => Ok(theme),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Ignoring stored theme: {}", _e);
                Ok(Theme::default())
            }
        }
    }

    pub fn set(&self, theme: Theme) -> Result<(), StorageError> {
        self.store.set(THEME_KEY, theme.as_str())?;

        #[cfg(feature = "tracing")]
        tracing::info!("Theme set to {}", theme);

        Ok(())
    }

    /// Flips the saved theme and returns the new one.
    pub fn toggle(&self) -> Result<Theme, StorageError> {
        let theme = self.get()?.toggled();
        self.set(theme)?;
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::TempDir;

    #[test]
    fn test_default_is_light() {
        let themes = ThemeStore::new(MemoryStore::new());
        assert_eq!(themes.get().unwrap(), Theme::Light);
    }

    #[test]
    fn test_set_dark_survives_reload() {
        let store = MemoryStore::new();
        ThemeStore::new(store.clone()).set(Theme::Dark).unwrap();

        let reloaded = ThemeStore::new(store);
        assert_eq!(reloaded.get().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_set_dark_survives_file_reload() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("store.json");

        ThemeStore::new(FileStore::open(&path)).set(Theme::Dark).unwrap();

        let reloaded = ThemeStore::new(FileStore::open(&path));
        assert_eq!(reloaded.get().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_stored_value_format() {
        let store = MemoryStore::new();
        ThemeStore::new(store.clone()).set(Theme::Dark).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_unknown_value_reads_as_light() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "solarized").unwrap();
        assert_eq!(ThemeStore::new(store).get().unwrap(), Theme::Light);
    }

    #[test]
    fn test_toggle() {
        let themes = ThemeStore::new(MemoryStore::new());
        assert_eq!(themes.toggle().unwrap(), Theme::Dark);
        assert_eq!(themes.toggle().unwrap(), Theme::Light);
        assert_eq!(themes.get().unwrap(), Theme::Light);
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("Dark".parse::<Theme>(), Err(UnknownTheme("Dark".to_string())));
    }
}
