use std::fmt::{Display, Formatter};

use lmdb::Error as LmdbError;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

/// Every way an invocation can fail.
///
/// Any variant aborts the invocation: the write set is discarded and the
/// world state is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractError {
    /// Caller org mismatch, or the org id could not be extracted.
    AuthorizationDenied(String),
    NotFound(String),
    AlreadyExists(String),
    /// Malformed stored value on read, or failure to encode on write.
    SerializationError(String),
    /// The world state backend failed for reasons outside contract control.
    StorageError(String),
    InvalidArgument(String),
    UnknownOperation(String),
}

impl Display for ContractError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractError::AuthorizationDenied(msg) => write!(f, "Authorization denied: {}", msg),
            ContractError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ContractError::AlreadyExists(msg) => write!(f, "Already exists: {}", msg),
            ContractError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            ContractError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            ContractError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ContractError::UnknownOperation(msg) => write!(f, "Unknown operation: {}", msg),
        }
    }
}

impl std::error::Error for ContractError {}

impl From<SerdeError> for ContractError {
    fn from(err: SerdeError) -> Self {
        ContractError::SerializationError(format!("JSON serialization error: {}", err))
    }
}

impl From<LmdbError> for ContractError {
    fn from(err: LmdbError) -> Self {
        match err {
            LmdbError::Corrupted => ContractError::StorageError("LMDB environment is corrupted".to_string()),
            LmdbError::MapFull => ContractError::StorageError("LMDB map size exhausted".to_string()),
            _ => ContractError::StorageError(format!("LMDB error: {}", err)),
        }
    }
}

impl From<std::io::Error> for ContractError {
    fn from(err: std::io::Error) -> Self {
        ContractError::StorageError(format!("IO error: {}", err))
    }
}

impl ContractError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContractError::NotFound(_))
    }

    pub fn is_authorization_denied(&self) -> bool {
        matches!(self, ContractError::AuthorizationDenied(_))
    }
}
