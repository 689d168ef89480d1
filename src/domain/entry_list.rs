//! In-memory entry sequence kept newest first

use crate::domain::Entry;
use std::collections::HashSet;

/// Ordered sequence of entries.
///
/// # Invariants
/// - Ids are unique.
/// - Entries are sorted by `created_at` descending; equal timestamps keep
///   their relative insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    pub fn new() -> Self {
        EntryList::default()
    }

    /// Build a list from decoded entries.
    ///
    /// Later entries reusing an id already seen are returned separately
    /// instead of being kept.
    pub fn from_entries(entries: Vec<Entry>) -> (Self, Vec<Entry>) {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(entries.len());
        let mut duplicates = Vec::new();

        for entry in entries {
            if seen.insert(entry.id.clone()) {
                kept.push(entry);
            } else {
                duplicates.push(entry);
            }
        }

        let mut list = EntryList { entries: kept };
        list.sort();
        (list, duplicates)
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Entries whose id starts with `prefix`; an exact id match wins outright
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<&Entry> {
        if let Some(exact) = self.get(prefix) {
            return vec![exact];
        }
        self.entries
            .iter()
            .filter(|e| e.id.starts_with(prefix))
            .collect()
    }

    /// Append and re-sort. Returns the entry's final index.
    ///
    /// The caller guarantees the id is not already present.
    pub fn insert(&mut self, entry: Entry) -> usize {
        let id = entry.id.clone();
        self.entries.push(entry);
        self.sort();
        self.position(&id).unwrap_or(self.entries.len() - 1)
    }

    /// Replace the entry with the same id and re-sort.
    /// Returns false when no entry has that id.
    pub fn replace(&mut self, entry: Entry) -> bool {
        let Some(index) = self.position(&entry.id) else {
            return false;
        };
        self.entries[index] = entry;
        self.sort();
        true
    }

    /// Set the starred flag in place. The flag is not a sort key.
    pub fn set_starred(&mut self, id: &str, starred: bool) -> Option<usize> {
        let index = self.position(id)?;
        self.entries[index].starred = starred;
        Some(index)
    }

    /// Remove by id, returning the former index and the entry
    pub fn remove(&mut self, id: &str) -> Option<(usize, Entry)> {
        let index = self.position(id)?;
        Some((index, self.entries.remove(index)))
    }

    fn sort(&mut self) {
        // Vec::sort_by is stable
        self.entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }
}
