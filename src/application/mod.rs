//! Application layer - Use cases and orchestration

pub mod diary;
pub mod init;
pub mod manage_config;
pub mod manager;

pub use diary::{DiaryService, ListOptions};
pub use manage_config::ConfigService;
pub use manager::{EntryListManager, LoadReport};
