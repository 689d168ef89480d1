//! Diary use cases driven from the command line

use crate::application::manager::EntryListManager;
use crate::domain::{Entry, EntryEvent};
use crate::error::{DiaryError, Result};
use crate::infrastructure::{
    Config, DiaryRepository, FileSystemRepository, JsonFileStore, KeyValueStore,
};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Filters for listing entries
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub starred_only: bool,
    pub limit: Option<usize>,
}

/// Service that turns user commands into entry events
pub struct DiaryService<S: KeyValueStore> {
    config: Config,
    manager: EntryListManager<S>,
}

impl DiaryService<JsonFileStore> {
    /// Open the diary rooted at `repository`
    pub fn open(repository: &FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        Self::with_store(config, repository.open_store())
    }
}

impl<S: KeyValueStore> DiaryService<S> {
    /// Build a service over an arbitrary store, loading its entries
    pub fn with_store(config: Config, store: S) -> Result<Self> {
        let manager = EntryListManager::open(store, config.store_key.clone())?;
        Ok(DiaryService { config, manager })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn manager(&self) -> &EntryListManager<S> {
        &self.manager
    }

    /// Write a new entry
    pub fn create(&mut self, title: &str, body: &str, created_at: DateTime<Utc>) -> Result<Entry> {
        let entry = Entry::new(title, body, created_at);
        self.emit(EntryEvent::Created(entry.clone()))?;
        Ok(entry)
    }

    /// Change the title and/or body of an entry, returning the updated record
    pub fn edit(
        &mut self,
        id_or_prefix: &str,
        title: Option<String>,
        body: Option<String>,
    ) -> Result<Entry> {
        let mut entry = self.manager.resolve(id_or_prefix)?.clone();
        if let Some(title) = title {
            entry.title = title;
        }
        if let Some(body) = body {
            entry.body = body;
        }
        self.emit(EntryEvent::Edited(entry.clone()))?;
        Ok(entry)
    }

    /// Star or unstar an entry
    pub fn set_starred(&mut self, id_or_prefix: &str, starred: bool) -> Result<Entry> {
        let mut entry = self.manager.resolve(id_or_prefix)?.clone();
        entry.starred = starred;
        self.emit(EntryEvent::Starred {
            id: entry.id.clone(),
            starred,
        })?;
        Ok(entry)
    }

    /// Delete an entry, returning what was removed
    pub fn delete(&mut self, id_or_prefix: &str) -> Result<Entry> {
        let entry = self.manager.resolve(id_or_prefix)?.clone();
        self.emit(EntryEvent::Deleted {
            id: entry.id.clone(),
        })?;
        Ok(entry)
    }

    pub fn show(&self, id_or_prefix: &str) -> Result<&Entry> {
        self.manager.resolve(id_or_prefix)
    }

    /// Entries newest first, filtered by `options`
    pub fn list(&self, options: &ListOptions) -> Vec<&Entry> {
        let entries = self
            .manager
            .entries()
            .iter()
            .filter(|e| !options.starred_only || e.starred);

        match options.limit {
            Some(n) => entries.take(n).collect(),
            None => entries.collect(),
        }
    }

    fn emit(&mut self, event: EntryEvent) -> Result<()> {
        let id = event.entry_id().to_string();
        match self.manager.apply(event)? {
            Some(change) => {
                debug!(%id, ?change, "entry list changed");
                Ok(())
            }
            None => Err(DiaryError::EntryNotFound(id)),
        }
    }
}
