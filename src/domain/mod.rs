//! Domain layer - Entries, the ordered entry list and mutation events

pub mod date;
pub mod entry;
pub mod entry_list;
pub mod event;

pub use date::parse_entry_date;
pub use entry::Entry;
pub use entry_list::EntryList;
pub use event::{EntryEvent, ListChange};
