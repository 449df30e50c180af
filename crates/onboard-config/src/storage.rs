//! Client-side storage
//!
//! Two scopes, mirroring what a browser client keeps:
//! - `Local`: persisted across runs in `~/.config/repo-onboard/storage.toml`
//! - `Session`: lives only as long as the process
//!
//! Logging in clears both scopes unconditionally.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

const STORAGE_VERSION: u32 = 1;

/// Local storage key holding the backend session cookie (`name=value`)
pub const SESSION_COOKIE_KEY: &str = "session_cookie";

/// Storage scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageScope {
    Local,
    Session,
}

/// Key/value client storage with a local and a session scope
pub trait ClientStorage: Send {
    fn get(&self, scope: StorageScope, key: &str) -> Option<String>;

    fn set(&mut self, scope: StorageScope, key: &str, value: &str) -> Result<()>;

    /// Remove every entry in the scope
    fn clear(&mut self, scope: StorageScope) -> Result<()>;
}

/// In-memory storage for both scopes
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    local: BTreeMap<String, String>,
    session: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn scope(&self, scope: StorageScope) -> &BTreeMap<String, String> {
        match scope {
            StorageScope::Local => &self.local,
            StorageScope::Session => &self.session,
        }
    }

    fn scope_mut(&mut self, scope: StorageScope) -> &mut BTreeMap<String, String> {
        match scope {
            StorageScope::Local => &mut self.local,
            StorageScope::Session => &mut self.session,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.local.is_empty() && self.session.is_empty()
    }
}

impl ClientStorage for MemoryStorage {
    fn get(&self, scope: StorageScope, key: &str) -> Option<String> {
        self.scope(scope).get(key).cloned()
    }

    fn set(&mut self, scope: StorageScope, key: &str, value: &str) -> Result<()> {
        self.scope_mut(scope)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, scope: StorageScope) -> Result<()> {
        self.scope_mut(scope).clear();
        Ok(())
    }
}

/// Storage file metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

/// On-disk layout of the local scope
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageFile {
    meta: StorageMeta,
    #[serde(default)]
    local: BTreeMap<String, String>,
}

impl Default for StorageFile {
    fn default() -> Self {
        Self {
            meta: StorageMeta {
                last_modified: Utc::now(),
                version: STORAGE_VERSION,
            },
            local: BTreeMap::new(),
        }
    }
}

/// Storage whose local scope is written through to a TOML file
#[derive(Debug)]
pub struct PersistedStorage {
    path: PathBuf,
    memory: MemoryStorage,
}

impl PersistedStorage {
    /// Open the storage at the default location, starting empty when the
    /// file is missing or unreadable
    pub fn open() -> Result<Self> {
        Ok(Self::open_at(paths::local_storage_path()?))
    }

    /// Open the storage backed by a specific file
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut memory = MemoryStorage::new();

        if path.exists() {
            match Self::load_from_path(&path) {
                Ok(file) => {
                    log::info!("Loaded client storage from {:?}", path);
                    memory.local = file.local;
                }
                Err(e) => log::warn!("Ignoring unreadable client storage: {:#}", e),
            }
        }

        Self { path, memory }
    }

    fn load_from_path(path: &Path) -> Result<StorageFile> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read storage file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse storage file: {:?}", path))
    }

    fn save(&self) -> Result<()> {
        let file = StorageFile {
            local: self.memory.local.clone(),
            ..StorageFile::default()
        };
        let content = toml::to_string_pretty(&file).context("Failed to serialize storage")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write storage file: {:?}", self.path))?;

        log::debug!("Saved client storage to {:?}", self.path);
        Ok(())
    }
}

impl ClientStorage for PersistedStorage {
    fn get(&self, scope: StorageScope, key: &str) -> Option<String> {
        self.memory.get(scope, key)
    }

    fn set(&mut self, scope: StorageScope, key: &str, value: &str) -> Result<()> {
        self.memory.set(scope, key, value)?;
        match scope {
            StorageScope::Local => self.save(),
            StorageScope::Session => Ok(()),
        }
    }

    fn clear(&mut self, scope: StorageScope) -> Result<()> {
        self.memory.clear(scope)?;
        match scope {
            StorageScope::Local => self.save(),
            StorageScope::Session => Ok(()),
        }
    }
}
