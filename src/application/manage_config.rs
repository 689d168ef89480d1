//! Config management use case

use crate::error::{DiaryError, Result};
use crate::infrastructure::config::validate_date_format;
use crate::infrastructure::{Config, DiaryRepository, FileSystemRepository, KeyValueStore};
use tracing::info;

const VALID_KEYS: &str = "store_key, date_format";

/// Service for managing diary configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "store_key" => Ok(config.store_key),
            "date_format" => Ok(config.date_format),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "store_key" => {
                if value.trim().is_empty() {
                    return Err(DiaryError::Config(
                        "store_key must not be empty".to_string(),
                    ));
                }
                self.carry_entries(&config.store_key, value)?;
                config.store_key = value.to_string();
            }
            "date_format" => {
                validate_date_format(value)?;
                config.date_format = value.to_string();
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }

    /// Copy the stored entry list to a new key so switching keys keeps it.
    ///
    /// A list already stored under the new key is left alone.
    fn carry_entries(&self, from: &str, to: &str) -> Result<()> {
        if from == to {
            return Ok(());
        }

        let mut store = self.repository.open_store();
        if store.get(to)?.is_some() {
            return Ok(());
        }
        if let Some(value) = store.get(from)? {
            store.set(to, value)?;
            info!(from, to, "copied entry list to new store key");
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> DiaryError {
    DiaryError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::EntryListManager;
    use crate::domain::Entry;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::default()).unwrap();
        ConfigService::new(repo)
    }

    #[test]
    fn test_get_and_set() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert_eq!(service.get("store_key").unwrap(), "diaryList");
        service.set("date_format", "%Y-%m-%d").unwrap();
        assert_eq!(service.get("date_format").unwrap(), "%Y-%m-%d");
        assert_eq!(service.list().unwrap().date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let err = service.get("mode").unwrap_err();
        assert!(err.to_string().contains("Unknown config key: 'mode'"));
        assert!(service.set("mode", "daily").is_err());
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("store_key", "  ").is_err());
        assert!(service.set("date_format", "%Q").is_err());
        assert_eq!(service.get("date_format").unwrap(), "%y-%m-%d (%a)");
    }

    fn add_entry(temp: &TempDir, key: &str, title: &str) {
        let store = FileSystemRepository::new(temp.path().to_path_buf()).open_store();
        let mut manager = EntryListManager::open(store, key).unwrap();
        manager
            .add(Entry::new(title, "", Utc.with_ymd_and_hms(2022, 5, 23, 0, 0, 0).unwrap()))
            .unwrap();
    }

    fn titles(temp: &TempDir, key: &str) -> Vec<String> {
        let store = FileSystemRepository::new(temp.path().to_path_buf()).open_store();
        let manager = EntryListManager::open(store, key).unwrap();
        manager.entries().iter().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn test_set_store_key_carries_entries() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        add_entry(&temp, "diaryList", "Monday");

        service.set("store_key", "journal").unwrap();

        assert_eq!(service.get("store_key").unwrap(), "journal");
        assert_eq!(titles(&temp, "journal"), vec!["Monday"]);
        // Old key is kept
        assert_eq!(titles(&temp, "diaryList"), vec!["Monday"]);
    }

    #[test]
    fn test_set_store_key_keeps_existing_target() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        add_entry(&temp, "diaryList", "Monday");
        add_entry(&temp, "journal", "Tuesday");

        service.set("store_key", "journal").unwrap();

        assert_eq!(titles(&temp, "journal"), vec!["Tuesday"]);
    }
}
