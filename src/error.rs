//! Error types for diary

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the diary application
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("Not a diary directory: {0}")]
    NotDiaryDirectory(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Ambiguous entry id '{prefix}' matches {count} entries")]
    AmbiguousId { prefix: String, count: usize },

    #[error("Entry already exists: {0}")]
    DuplicateEntry(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unsupported store version {found} (newest supported is {supported})")]
    UnsupportedStoreVersion { found: u64, supported: u64 },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DiaryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaryError::NotDiaryDirectory(_) => 2,
            DiaryError::InvalidDate(_) => 3,
            DiaryError::EntryNotFound(_) => 4,
            DiaryError::AmbiguousId { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaryError::NotDiaryDirectory(path) => {
                format!(
                    "Not a diary directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'diary init' in this directory to create a new diary\n\
                    • Navigate to an existing diary directory\n\
                    • Set DIARY_ROOT environment variable to your diary path",
                    path.display()
                )
            }
            DiaryError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Accepted formats:\n\
                    • YYYY-MM-DD (e.g., 2022-03-01)\n\
                    • RFC 3339 (e.g., 2022-03-01T09:30:00Z)",
                    input
                )
            }
            DiaryError::EntryNotFound(id) => {
                format!(
                    "No entry matches id: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'diary list' to see entry ids\n\
                    • Any unique prefix of an id is accepted",
                    id
                )
            }
            DiaryError::AmbiguousId { prefix, count } => {
                format!(
                    "Id prefix '{}' matches {} entries\n\n\
                    Type more characters of the id to pick one entry",
                    prefix, count
                )
            }
            DiaryError::UnsupportedStoreVersion { .. } => {
                format!(
                    "{}\n\n\
                    The store was written by a newer version of diary.\n\
                    Upgrade diary before modifying this journal.",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;
