//! String key/value persistence standing in for browser local storage.

use crate::error::RigResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumString};
use tracing::{debug, error};

pub const CART_KEY: &str = "rigvisor_cart";
pub const THEME_KEY: &str = "theme";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> RigResult<()>;
    fn remove(&mut self, key: &str) -> RigResult<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> RigResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> RigResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// All keys live in one JSON object file, rewritten on every change.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store; an
    /// unreadable or corrupt one is logged and also starts empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            match fs::read_to_string(&path)
                .map_err(crate::RigError::from)
                .and_then(|s| serde_json::from_str(&s).map_err(crate::RigError::from))
            {
                Ok(entries) => entries,
                Err(e) => {
                    error!("Discarding unreadable storage file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            }
        } else {
            debug!("No storage file at {}, starting empty", path.display());
            BTreeMap::new()
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> RigResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> RigResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> RigResult<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored preference; only `"dark"` selects dark mode.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(THEME_KEY).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> RigResult<()> {
        store.set(THEME_KEY, &self.to_string())
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Flips the stored preference and returns the new one.
    pub fn toggle(store: &mut dyn KeyValueStore) -> RigResult<Self> {
        let next = Theme::load(store).toggled();
        next.save(store)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_defaults_to_light() {
        let mut store = MemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::Light);
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn theme_toggle_persists() {
        let mut store = MemoryStore::new();
        assert_eq!(Theme::toggle(&mut store).unwrap(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(Theme::toggle(&mut store).unwrap(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        {
            let mut store = FileStore::open(&path);
            store.set("k", "v").unwrap();
        }
        let store = FileStore::open(&path);
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn corrupt_file_store_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").unwrap();
        let store = FileStore::open(&path);
        assert_eq!(store.get(CART_KEY), None);
    }
}
