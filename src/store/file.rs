//! @acp:module "JSON File Store"
//! @acp:summary "Durable store that appends prime results to a JSON log"
//! @acp:domain calculator
//! @acp:layer persistence

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Store;
use crate::error::Result;

fn default_log_version() -> String {
    "1.0.0".to_string()
}

/// A single persisted sum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedResult {
    pub value: i64,
    pub recorded_at: DateTime<Utc>,
}

impl PersistedResult {
    /// Record a value with the current timestamp
    pub fn now(value: i64) -> Self {
        Self {
            value,
            recorded_at: Utc::now(),
        }
    }
}

/// @acp:summary "On-disk layout of the result log"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultLog {
    #[serde(default = "default_log_version")]
    pub version: String,

    #[serde(default)]
    pub results: Vec<PersistedResult>,
}

impl Default for ResultLog {
    fn default() -> Self {
        Self {
            version: default_log_version(),
            results: Vec::new(),
        }
    }
}

impl ResultLog {
    /// @acp:summary "Load a result log from a JSON file"
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Write the result log as pretty JSON"
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// @acp:summary "Drop all but the most recent `limit` results"
    pub fn keep_last(&mut self, limit: usize) {
        let skip = self.results.len().saturating_sub(limit);
        self.results = self.results.split_off(skip);
    }
}

/// @acp:summary "Store backed by a JSON result log on disk"
///
/// Writes are serialized per store and land through a rename, so readers
/// never observe a partially written log.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Log file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the log, empty when the file does not exist yet
    pub fn load(&self) -> Result<ResultLog> {
        if !self.path.exists() {
            return Ok(ResultLog::default());
        }
        ResultLog::from_json(&self.path)
    }

    /// Append a record and rewrite the log
    pub fn append(&self, record: PersistedResult) -> Result<()> {
        let _guard = self.lock();
        let mut log = self.load()?;
        log.results.push(record);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let staging = self.staging_path();
        log.write_json(&staging)?;
        std::fs::rename(&staging, &self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            entries = log.len(),
            "Result log updated"
        );
        Ok(())
    }

    /// Delete the log file. Returns whether a file was removed.
    pub fn clear(&self) -> Result<bool> {
        let _guard = self.lock();
        if !self.path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path)?;
        tracing::debug!(path = %self.path.display(), "Result log removed");
        Ok(true)
    }

    /// Sibling file the next log version is written to before the rename
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Store for JsonFileStore {
    fn persist(&self, value: i64) -> Result<()> {
        self.append(PersistedResult::now(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("results.json"));

        let log = store.load().unwrap();
        assert!(log.is_empty());
        assert_eq!(log.version, "1.0.0");
    }

    #[test]
    fn test_persist_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/dir/results.json");
        let store = JsonFileStore::new(&path);

        store.persist(11).unwrap();
        store.persist(13).unwrap();

        assert!(path.exists());
        let values: Vec<i64> = store.load().unwrap().results.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![11, 13]);
    }

    #[test]
    fn test_corrupt_log_is_json_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("results.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(crate::error::CalcError::Json(_))));
        assert!(store.persist(2).is_err());
    }

    #[test]
    fn test_concurrent_appends_are_not_lost() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("results.json");
        let store = JsonFileStore::new(&path);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..25 {
                        store.persist(11).unwrap();
                    }
                });
            }
        });

        let log = store.load().unwrap();
        assert_eq!(log.len(), 200);
        assert!(log.results.iter().all(|r| r.value == 11));
        assert!(!temp.path().join("results.json.tmp").exists());
    }

    #[test]
    fn test_keep_last() {
        let mut log = ResultLog::default();
        for value in [2, 3, 5, 7] {
            log.results.push(PersistedResult::now(value));
        }

        log.keep_last(10);
        assert_eq!(log.len(), 4);

        log.keep_last(2);
        let values: Vec<i64> = log.results.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![5, 7]);

        log.keep_last(0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_clear() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("results.json"));

        assert!(!store.clear().unwrap());
        store.persist(5).unwrap();
        assert!(store.clear().unwrap());
        assert!(store.load().unwrap().is_empty());
    }
}
