//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod schema;
pub mod store;

pub use config::Config;
pub use repository::{DiaryRepository, FileSystemRepository};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
