//! Configuration management

use crate::error::{DiaryError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_STORE_KEY: &str = "diaryList";
pub const DEFAULT_DATE_FORMAT: &str = "%y-%m-%d (%a)";

/// Settings stored in .diary/config.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Key the entry list is stored under
    #[serde(default = "default_store_key")]
    pub store_key: String,
    /// chrono strftime pattern used when printing entry dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_store_key() -> String {
    DEFAULT_STORE_KEY.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_key: default_store_key(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Load config from .diary/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".diary").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiaryError::NotDiaryDirectory(path.to_path_buf())
            } else {
                DiaryError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| DiaryError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .diary/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let diary_dir = path.join(".diary");
        let config_path = diary_dir.join("config.toml");

        // Ensure .diary directory exists
        if !diary_dir.exists() {
            fs::create_dir(&diary_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the date format, checking the DIARY_DATE_FORMAT environment variable first
    pub fn get_date_format(&self) -> Result<String> {
        match std::env::var("DIARY_DATE_FORMAT") {
            Ok(format) => {
                validate_date_format(&format)?;
                Ok(format)
            }
            Err(_) => Ok(self.date_format.clone()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.store_key.trim().is_empty() {
            return Err(DiaryError::Config("store_key must not be empty".to_string()));
        }
        validate_date_format(&self.date_format)
    }
}

/// Reject strftime patterns chrono can't render.
///
/// Some specifiers parse but only work for parsing (e.g. `%#z`), so the
/// pattern is rendered against the current time instead of only being parsed.
pub fn validate_date_format(format: &str) -> Result<()> {
    use chrono::format::{Item, StrftimeItems};
    use std::fmt::Write;

    let invalid = || DiaryError::Config(format!("Invalid date_format '{}'", format));

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    let sample = Utc::now();
    let mut rendered = String::new();
    write!(&mut rendered, "{}", sample.format(format)).map_err(|_| invalid())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.store_key, "diaryList");
        assert_eq!(config.date_format, "%y-%m-%d (%a)");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            store_key: "journal".to_string(),
            date_format: "%Y/%m/%d".to_string(),
        };

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".diary").exists());
        assert!(temp.path().join(".diary/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_fills_missing_keys_with_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".diary")).unwrap();
        fs::write(temp.path().join(".diary/config.toml"), "store_key = \"x\"\n").unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.store_key, "x");
        assert_eq!(loaded.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            DiaryError::NotDiaryDirectory(_) => {}
            _ => panic!("Expected NotDiaryDirectory error"),
        }
    }

    #[test]
    fn test_load_rejects_empty_store_key() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".diary")).unwrap();
        fs::write(temp.path().join(".diary/config.toml"), "store_key = \" \"\n").unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(DiaryError::Config(_))
        ));
    }

    #[test]
    fn test_validate_date_format() {
        assert!(validate_date_format("%Y-%m-%d").is_ok());
        assert!(validate_date_format("%Q").is_err());
    }

    #[test]
    fn test_validate_rejects_parse_only_specifier() {
        // %#z parses as a format item but cannot be rendered
        let err = validate_date_format("%#z").unwrap_err();
        assert!(err.to_string().contains("Invalid date_format '%#z'"));
        assert!(validate_date_format("%d.%m.%Y %:z").is_ok());
    }

    #[test]
    fn test_load_rejects_unrenderable_date_format() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".diary")).unwrap();
        fs::write(
            temp.path().join(".diary/config.toml"),
            "date_format = \"%#z\"\n",
        )
        .unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(DiaryError::Config(_))
        ));
    }
}
