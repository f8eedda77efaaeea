//! Theme preference selection and persistence.
//!
//! The selector reads a stored preference once at startup, falls back to the
//! host's dark-mode signal when nothing valid is stored, and writes the new
//! value on every selection. Storage is injected through [`ThemeStorage`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Storage key holding the theme preference
pub const THEME_STORAGE_KEY: &str = "theme";

/// Classes owned by the theme selector; exactly one theme's class is active
pub const THEME_CLASSES: &[&str] = &["dark", "eighties"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    Eighties,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::Eighties,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::Eighties => "eighties",
        }
    }

    /// Presentation attributes for this theme
    pub fn attributes(self) -> ThemeAttributes {
        match self {
            ThemePreference::Light => ThemeAttributes {
                class: None,
                data_theme: "github-light",
            },
            ThemePreference::Dark => ThemeAttributes {
                class: Some("dark"),
                data_theme: "github-dark",
            },
            ThemePreference::Eighties => ThemeAttributes {
                class: Some("eighties"),
                data_theme: "synthwave-84",
            },
        }
    }

    /// Default used when nothing valid is stored. Never `Eighties`.
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "eighties" => Ok(ThemePreference::Eighties),
            other => Err(Error::InvalidData(format!(
                "Unknown theme '{}', expected one of: light, dark, eighties",
                other
            ))),
        }
    }
}

/// Visual flags for a theme: an optional class and a `data-theme` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeAttributes {
    pub class: Option<&'static str>,
    pub data_theme: &'static str,
}

/// Durable key/value storage for preferences
pub trait ThemeStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Where the selected theme's attributes get applied
pub trait ThemeTarget {
    fn apply(&mut self, attributes: ThemeAttributes);
}

/// A class list plus `data-theme`, mirroring the document root element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootAttributes {
    pub classes: Vec<String>,
    pub data_theme: Option<String>,
}

impl ThemeTarget for RootAttributes {
    fn apply(&mut self, attributes: ThemeAttributes) {
        self.classes
            .retain(|class| !THEME_CLASSES.contains(&class.as_str()));
        if let Some(class) = attributes.class {
            self.classes.push(class.to_string());
        }
        self.data_theme = Some(attributes.data_theme.to_string());
    }
}

/// Tracks the active theme and persists every change
pub struct ThemeSelector<S: ThemeStorage> {
    storage: S,
    current: ThemePreference,
}

impl<S: ThemeStorage> ThemeSelector<S> {
    /// Initialize from storage, or from `prefers_dark` when nothing valid is stored.
    ///
    /// Initialization reads but does not write; the preference is only
    /// persisted once the user selects one.
    pub fn initialize(storage: S, prefers_dark: bool) -> Self {
        let stored = storage.get(THEME_STORAGE_KEY);
        let current = match stored.as_deref().map(ThemePreference::from_str) {
            Some(Ok(theme)) => theme,
            Some(Err(err)) => {
                tracing::warn!("ignoring stored theme: {}", err);
                ThemePreference::from_system(prefers_dark)
            }
            None => ThemePreference::from_system(prefers_dark),
        };
        Self { storage, current }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Select a theme: update state, apply attributes, persist.
    ///
    /// State and attributes change even when the write fails; the error says
    /// the choice will not survive a reload. Re-selecting the current theme
    /// still writes it back.
    pub fn select<T: ThemeTarget>(
        &mut self,
        theme: ThemePreference,
        target: &mut T,
    ) -> Result<()> {
        self.current = theme;
        target.apply(theme.attributes());
        self.storage.set(THEME_STORAGE_KEY, theme.as_str())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

/// In-memory storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ThemeStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Storage backed by a TOML table on disk
///
/// Only string values are read back. Other keys in the file, of any type,
/// are preserved on write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> Result<toml::Table> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(contents.parse::<toml::Table>()?)
    }
}

impl ThemeStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.load() {
            Ok(table) => table.get(key).and_then(|v| v.as_str()).map(str::to_string),
            Err(err) => {
                tracing::warn!("failed to read {}: {}", self.path.display(), err);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut table = match self.load() {
            Ok(table) => table,
            Err(Error::ConfigParse(msg)) => {
                tracing::warn!("overwriting unreadable {}: {}", self.path.display(), msg);
                toml::Table::new()
            }
            Err(err) => return Err(err),
        };
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        let contents = toml::to_string(&table)
            .map_err(|e| Error::InvalidData(format!("Failed to serialize preferences: {}", e)))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
