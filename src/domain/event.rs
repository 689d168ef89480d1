//! Typed mutation events and the list changes they produce

use crate::domain::Entry;

/// A mutation reported by an editing surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryEvent {
    /// A brand new entry
    Created(Entry),
    /// The full updated record of an existing entry
    Edited(Entry),
    /// The starred flag of an entry changed
    Starred { id: String, starred: bool },
    /// An entry was deleted
    Deleted { id: String },
}

impl EntryEvent {
    /// Id of the entry this event targets
    pub fn entry_id(&self) -> &str {
        match self {
            EntryEvent::Created(entry) | EntryEvent::Edited(entry) => &entry.id,
            EntryEvent::Starred { id, .. } | EntryEvent::Deleted { id } => id,
        }
    }
}

/// How a presentation of the list should refresh after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    /// An entry was inserted at `index`
    Inserted { index: usize },
    /// Order may have changed; redraw everything
    Reloaded,
    /// Only the starred flag at `index` changed
    Starred { index: usize },
    /// The entry previously at `index` is gone
    Removed { index: usize },
}
