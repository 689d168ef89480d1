//! diary - Terminal diary application
//!
//! Keeps an ordered list of diary entries, newest first, written through to
//! a local key-value store after every change.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DiaryError;
