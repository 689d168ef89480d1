//! Initialize diary use case

use crate::error::Result;
use crate::infrastructure::{
    schema, Config, DiaryRepository, FileSystemRepository, KeyValueStore,
};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new diary at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::default();
    repo.save_config(&config)?;

    // Start with an empty, versioned entry list
    let mut store = repo.open_store();
    store.set(&config.store_key, schema::encode(&[])?)?;

    info!(root = %repo.root().display(), "initialized diary");
    println!("Initialized diary at {}", repo.root().display());

    Ok(())
}
