//! Flat key-value stores holding serialized entry lists

use crate::error::{DiaryError, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A flat persisted mapping from string keys to JSON values
pub trait KeyValueStore {
    /// Read the value under `key`, `None` when nothing was ever stored
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Replace the value under `key`. Either the whole value is stored or
    /// nothing changes.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}

/// Store that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a single JSON object file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole key map (empty if the file doesn't exist)
    fn read_map(&self) -> Result<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(DiaryError::Io(e)),
        };

        match serde_json::from_str::<Value>(&contents)? {
            Value::Object(map) => Ok(map),
            _ => Err(DiaryError::Store(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first. The temp file is removed again if the
    /// replace fails.
    fn write_atomic(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.diary-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("store.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if let Err(e) = self.replace_with(&tmp_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(DiaryError::Io(e));
        }
        Ok(())
    }

    fn replace_with(&self, tmp_path: &Path) -> std::io::Result<()> {
        #[cfg(windows)]
        {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
        }

        fs::rename(tmp_path, &self.path)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value);
        let contents = serde_json::to_string_pretty(&Value::Object(map))?;
        self.write_atomic(&contents)
    }
}
