//! Record kinds stored in the world state.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::contract_config::KeyScheme;
use crate::contract_error::ContractError;

/// Separator between the kind prefix and the record id.
pub const KEY_SEPARATOR: char = '~';

/// The character right after [`KEY_SEPARATOR`]; exclusive end of a kind's
/// key range.
const KEY_RANGE_END: char = '\u{7f}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordKind {
    Personnel,
    Case,
}

impl RecordKind {
    pub fn prefix(self) -> &'static str {
        match self {
            RecordKind::Personnel => "personnel",
            RecordKind::Case => "case",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Personnel => "officer",
            RecordKind::Case => "FIR",
        }
    }
}

/// A flat, string-field record stored as one JSON value under one key.
pub trait LedgerRecord: Serialize + DeserializeOwned + Clone {
    const KIND: RecordKind;

    /// Primary key of the record.
    fn record_id(&self) -> &str;
}

/// Maps a record id to its world state key.
pub fn state_key(kind: RecordKind, scheme: KeyScheme, id: &str) -> Result<String, ContractError> {
    if id.is_empty() {
        return Err(ContractError::InvalidArgument(format!("{} id must not be empty", kind.label())));
    }
    Ok(match scheme {
        KeyScheme::Prefixed => format!("{}{KEY_SEPARATOR}{id}", kind.prefix()),
        KeyScheme::Shared => id.to_string(),
    })
}

/// The `[start, end)` range holding every key of `kind`. Both bounds are
/// empty under the shared scheme, meaning the whole keyspace.
pub fn kind_range(kind: RecordKind, scheme: KeyScheme) -> (String, String) {
    match scheme {
        KeyScheme::Prefixed => (
            format!("{}{KEY_SEPARATOR}", kind.prefix()),
            format!("{}{KEY_RANGE_END}", kind.prefix()),
        ),
        KeyScheme::Shared => (String::new(), String::new()),
    }
}
