//! Persisted layout of the entry list
//!
//! The current layout is a versioned envelope:
//!
//! ```json
//! { "version": 1, "entries": [ { "id": "...", "title": "...", "body": "...",
//!   "created_at": "2022-01-01T00:00:00Z", "starred": false } ] }
//! ```
//!
//! Version 0 is the unversioned layout: a bare array of records keyed
//! `uuid`, `title`, `contents`, `date`, `isStar`. It is read but never
//! written.

use crate::domain::Entry;
use crate::error::{DiaryError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Layout version written by this build
pub const SCHEMA_VERSION: u64 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u64,
    entries: &'a [Entry],
}

#[derive(Deserialize)]
struct Envelope {
    version: u64,
    entries: Vec<Value>,
}

/// Result of decoding a stored value
#[derive(Debug, Default)]
pub struct Decoded {
    pub version: u64,
    pub entries: Vec<Entry>,
    /// Records that failed to decode and were left out
    pub dropped: usize,
}

/// Encode entries in the current layout
pub fn encode(entries: &[Entry]) -> Result<Value> {
    Ok(serde_json::to_value(EnvelopeRef {
        version: SCHEMA_VERSION,
        entries,
    })?)
}

/// Decode a stored value.
///
/// Records missing a required field are dropped and logged. A version newer
/// than [`SCHEMA_VERSION`] is refused so the caller never overwrites it.
pub fn decode(value: Value) -> Result<Decoded> {
    let (version, records) = match value {
        Value::Array(records) => (0, records),
        Value::Object(_) => {
            let envelope: Envelope = serde_json::from_value(value).map_err(|e| {
                DiaryError::Store(format!("Malformed entry list envelope: {}", e))
            })?;
            if envelope.version > SCHEMA_VERSION {
                return Err(DiaryError::UnsupportedStoreVersion {
                    found: envelope.version,
                    supported: SCHEMA_VERSION,
                });
            }
            (envelope.version, envelope.entries)
        }
        other => {
            warn!(kind = value_kind(&other), "ignoring unrecognised entry list value");
            return Ok(Decoded::default());
        }
    };

    let mut decoded = Decoded {
        version,
        entries: Vec::with_capacity(records.len()),
        dropped: 0,
    };

    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Entry>(record) {
            Ok(entry) => decoded.entries.push(entry),
            Err(e) => {
                warn!(index, error = %e, "dropping malformed diary entry");
                decoded.dropped += 1;
            }
        }
    }

    Ok(decoded)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
