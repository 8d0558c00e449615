use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::contract_error::ContractError;

/// JSON envelope returned across the FFI boundary.
#[derive(Debug, Serialize, Deserialize)]
pub enum AppResponse {
    AuthorizationDenied(String),
    NotFound(String),
    AlreadyExists(String),
    SerializationError(String),
    StorageError(String),
    InvalidArgument(String),
    UnknownOperation(String),
    BadRequest(String),
    Ok(String),
}

impl Display for AppResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AppResponse::AuthorizationDenied(msg) => write!(f, "Authorization denied: {}", msg),
            AppResponse::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppResponse::AlreadyExists(msg) => write!(f, "Already exists: {}", msg),
            AppResponse::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            AppResponse::StorageError(msg) => write!(f, "Storage error: {}", msg),
            AppResponse::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            AppResponse::UnknownOperation(msg) => write!(f, "Unknown operation: {}", msg),
            AppResponse::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppResponse::Ok(msg) => write!(f, "Ok: {}", msg),
        }
    }
}

impl From<ContractError> for AppResponse {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::AuthorizationDenied(msg) => AppResponse::AuthorizationDenied(msg),
            ContractError::NotFound(msg) => AppResponse::NotFound(msg),
            ContractError::AlreadyExists(msg) => AppResponse::AlreadyExists(msg),
            ContractError::SerializationError(msg) => AppResponse::SerializationError(msg),
            ContractError::StorageError(msg) => AppResponse::StorageError(msg),
            ContractError::InvalidArgument(msg) => AppResponse::InvalidArgument(msg),
            ContractError::UnknownOperation(msg) => AppResponse::UnknownOperation(msg),
        }
    }
}

impl From<Result<String, ContractError>> for AppResponse {
    fn from(result: Result<String, ContractError>) -> Self {
        match result {
            Ok(payload) => AppResponse::Ok(payload),
            Err(e) => AppResponse::from(e),
        }
    }
}

impl AppResponse {
    pub fn success(msg: impl Into<String>) -> Self {
        AppResponse::Ok(msg.into())
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, AppResponse::Ok(_))
    }
}
