// src/drafts/mod.rs
//! Draft repository: locally persisted, not-yet-submitted form state.
//!
//! Multi-step flows survive an application restart by saving their
//! in-progress state under fixed string keys. All access goes through the
//! [`DraftStore`] trait so screens never touch the files directly and tests
//! can substitute an in-memory store. Every value is wrapped in a versioned
//! envelope; an envelope we cannot read is treated as "no prior state",
//! never as an error.

use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::PathBuf;
use std::sync::Mutex;

use bevy::log::{error, info, warn};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Bumped whenever the serialized shape of any draft changes. Envelopes with
/// another version are discarded on load instead of being misread.
pub const DRAFT_SCHEMA_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("draft io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("draft serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DraftEnvelope {
    version: u32,
    saved_at: DateTime<Utc>,
    data: Value,
}

/// Storage for draft values keyed by fixed string names.
pub trait DraftStore: Send + Sync {
    /// Returns the stored value, or `None` when the key is absent, the file
    /// is unreadable, or the envelope version is unknown.
    fn load(&self, key: &str) -> Option<Value>;
    fn save(&self, key: &str, value: &Value) -> Result<(), DraftError>;
    fn clear(&self, key: &str);
}

/// File-backed store: one `<key>.json` per draft under the given directory.
///
/// Writes are last-write-wins with no cross-process coordination, matching
/// the localStorage semantics the flows were designed around.
pub struct FileDraftStore {
    dir: PathBuf,
}

impl FileDraftStore {
    pub fn new(dir: PathBuf) -> Result<Self, DraftError> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl DraftStore for FileDraftStore {
    fn load(&self, key: &str) -> Option<Value> {
        let path = self.path_for(key);
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                error!("Drafts: failed to open {:?}: {}", path, e);
                return None;
            }
        };
        let envelope: DraftEnvelope = match serde_json::from_reader(BufReader::new(file)) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Drafts: discarding malformed draft '{}': {}", key, e);
                return None;
            }
        };
        if envelope.version != DRAFT_SCHEMA_VERSION {
            warn!(
                "Drafts: discarding draft '{}' with unknown schema version {}",
                key, envelope.version
            );
            return None;
        }
        Some(envelope.data)
    }

    fn save(&self, key: &str, value: &Value) -> Result<(), DraftError> {
        let envelope = DraftEnvelope {
            version: DRAFT_SCHEMA_VERSION,
            saved_at: Utc::now(),
            data: value.clone(),
        };
        let path = self.path_for(key);
        let file = fs::File::create(&path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &envelope)?;
        Ok(())
    }

    fn clear(&self, key: &str) {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => info!("Drafts: cleared '{}'", key),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("Drafts: failed to clear '{}': {}", key, e),
        }
    }
}

/// In-memory store used by tests and available as a fallback when no data
/// directory can be resolved.
#[derive(Default)]
pub struct MemoryDraftStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl DraftStore for MemoryDraftStore {
    fn load(&self, key: &str) -> Option<Value> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, value: &Value) -> Result<(), DraftError> {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.clone());
        }
        Ok(())
    }

    fn clear(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDraftStore::new(dir.path().to_path_buf()).unwrap();
        store.save("profileDraft", &json!({"name": "Grooming"})).unwrap();
        assert_eq!(store.load("profileDraft"), Some(json!({"name": "Grooming"})));
    }

    #[test]
    fn test_missing_key_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDraftStore::new(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.load("absent"), None);
    }

    #[test]
    fn test_malformed_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDraftStore::new(dir.path().to_path_buf()).unwrap();
        std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();
        assert_eq!(store.load("broken"), None);
    }

    #[test]
    fn test_unknown_version_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDraftStore::new(dir.path().to_path_buf()).unwrap();
        let envelope = json!({
            "version": DRAFT_SCHEMA_VERSION + 1,
            "savedAt": "2026-01-01T00:00:00Z",
            "data": {"name": "x"}
        });
        std::fs::write(
            dir.path().join("future.json"),
            serde_json::to_string(&envelope).unwrap(),
        )
        .unwrap();
        assert_eq!(store.load("future"), None);
    }

    #[test]
    fn test_clear_removes_draft() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDraftStore::new(dir.path().to_path_buf()).unwrap();
        store.save("profileDraft", &json!(1)).unwrap();
        store.clear("profileDraft");
        assert_eq!(store.load("profileDraft"), None);
        // Clearing an absent key is a no-op.
        store.clear("profileDraft");
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let store = MemoryDraftStore::default();
        store.save("k", &json!(1)).unwrap();
        store.save("k", &json!(2)).unwrap();
        assert_eq!(store.load("k"), Some(json!(2)));
    }
}
