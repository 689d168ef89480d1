//! Entry list manager
//!
//! Owns the in-memory entry sequence and the store it is persisted to.
//! Every mutation is built on a copy of the sequence, written through to the
//! store and only then committed, so a failed write leaves memory untouched.

use crate::domain::{Entry, EntryEvent, EntryList, ListChange};
use crate::error::{DiaryError, Result};
use crate::infrastructure::schema;
use crate::infrastructure::KeyValueStore;
use tracing::{debug, warn};

/// Outcome of loading the persisted sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    /// Records left out because they were malformed or reused an id
    pub dropped: usize,
}

pub struct EntryListManager<S: KeyValueStore> {
    store: S,
    key: String,
    entries: EntryList,
}

impl<S: KeyValueStore> EntryListManager<S> {
    /// Create a manager with an empty sequence. Nothing is read yet.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        EntryListManager {
            store,
            key: key.into(),
            entries: EntryList::new(),
        }
    }

    /// Create a manager and load whatever is persisted under `key`
    pub fn open(store: S, key: impl Into<String>) -> Result<Self> {
        let mut manager = Self::new(store, key);
        manager.load()?;
        Ok(manager)
    }

    /// Replace the in-memory sequence with the persisted one.
    ///
    /// No stored value means an empty diary.
    pub fn load(&mut self) -> Result<LoadReport> {
        let Some(value) = self.store.get(&self.key)? else {
            self.entries = EntryList::new();
            return Ok(LoadReport::default());
        };

        let decoded = schema::decode(value)?;
        let (entries, duplicates) = EntryList::from_entries(decoded.entries);
        for duplicate in &duplicates {
            warn!(id = %duplicate.id, "dropping diary entry with duplicate id");
        }

        let report = LoadReport {
            loaded: entries.len(),
            dropped: decoded.dropped + duplicates.len(),
        };
        debug!(
            key = %self.key,
            version = decoded.version,
            loaded = report.loaded,
            dropped = report.dropped,
            "loaded diary entries"
        );

        self.entries = entries;
        Ok(report)
    }

    pub fn entries(&self) -> &[Entry] {
        self.entries.as_slice()
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.get(id)
    }

    /// Look up an entry by its full id or any unique prefix of it
    pub fn resolve(&self, id_or_prefix: &str) -> Result<&Entry> {
        if id_or_prefix.is_empty() {
            return Err(DiaryError::EntryNotFound(String::new()));
        }

        let matches = self.entries.find_by_prefix(id_or_prefix);
        match matches.as_slice() {
            [entry] => Ok(*entry),
            [] => Err(DiaryError::EntryNotFound(id_or_prefix.to_string())),
            _ => Err(DiaryError::AmbiguousId {
                prefix: id_or_prefix.to_string(),
                count: matches.len(),
            }),
        }
    }

    /// Append an entry, re-sort and persist
    pub fn add(&mut self, entry: Entry) -> Result<ListChange> {
        if self.entries.contains(&entry.id) {
            return Err(DiaryError::DuplicateEntry(entry.id));
        }

        let mut next = self.entries.clone();
        let index = next.insert(entry);
        self.commit(next)?;
        Ok(ListChange::Inserted { index })
    }

    /// Replace the entry with the same id, re-sort and persist.
    /// Unknown ids are ignored.
    pub fn update(&mut self, entry: Entry) -> Result<Option<ListChange>> {
        let mut next = self.entries.clone();
        if !next.replace(entry) {
            return Ok(None);
        }
        self.commit(next)?;
        Ok(Some(ListChange::Reloaded))
    }

    /// Set the starred flag and persist. Order is unaffected.
    pub fn set_starred(&mut self, id: &str, starred: bool) -> Result<Option<ListChange>> {
        let mut next = self.entries.clone();
        let Some(index) = next.set_starred(id, starred) else {
            return Ok(None);
        };
        self.commit(next)?;
        Ok(Some(ListChange::Starred { index }))
    }

    /// Remove the entry and persist. The returned index is where it used to be.
    pub fn remove(&mut self, id: &str) -> Result<Option<ListChange>> {
        let mut next = self.entries.clone();
        let Some((index, _)) = next.remove(id) else {
            return Ok(None);
        };
        self.commit(next)?;
        Ok(Some(ListChange::Removed { index }))
    }

    /// Apply an event from an editing surface
    pub fn apply(&mut self, event: EntryEvent) -> Result<Option<ListChange>> {
        match event {
            EntryEvent::Created(entry) => self.add(entry).map(Some),
            EntryEvent::Edited(entry) => self.update(entry),
            EntryEvent::Starred { id, starred } => self.set_starred(&id, starred),
            EntryEvent::Deleted { id } => self.remove(&id),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn commit(&mut self, next: EntryList) -> Result<()> {
        let value = schema::encode(next.as_slice())?;
        self.store.set(&self.key, value)?;
        debug!(key = %self.key, count = next.len(), "persisted diary entries");
        self.entries = next;
        Ok(())
    }
}
