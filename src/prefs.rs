//! Durable preference storage.
//!
//! Only two keys are ever persisted: the grouping and sorting selections.
//! Writes are best-effort: a failing backing store is logged and otherwise
//! ignored, leaving the session on in-memory values.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use parking_lot::Mutex;
use tracing::warn;

pub const PREF_GROUPING: &str = "grouping";
pub const PREF_SORTING: &str = "sorting";

/// Key-value store for view preferences.
///
/// `set` is fire-and-forget: implementations must swallow backing-store
/// failures rather than propagate them.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Preferences persisted as a YAML map in a single file.
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store under the user's config directory, or `None` when no home
    /// directory can be resolved.
    pub fn default_location() -> Option<Self> {
        let dirs = ProjectDirs::from("", "", "plank")?;
        Some(Self::new(dirs.config_dir().join("preferences.yaml")))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_all(&self) -> HashMap<String, String> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return HashMap::new();
        };
        serde_yaml_ng::from_str(&content).unwrap_or_default()
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut all = self.read_all();
        all.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warn!("failed to create preference directory: {e}");
            return;
        }

        match serde_yaml_ng::to_string(&all) {
            Ok(content) => {
                if let Err(e) = fs::write(&self.path, content) {
                    warn!("failed to persist preference '{key}': {e}");
                }
            }
            Err(e) => warn!("failed to serialize preferences: {e}"),
        }
    }
}

/// In-memory store for tests and for sessions without a resolvable config
/// directory.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.lock().insert(key.to_string(), value.to_string());
    }
}
