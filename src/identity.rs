use crate::contract_error::ContractError;

/// The caller identity supplied by the execution context.
pub trait ClientIdentity {
    /// Membership service provider id of the caller's organization.
    fn msp_id(&self) -> Result<String, ContractError>;
}

/// Identity whose org id was resolved by the host before the invocation.
/// `None` means the host could not extract one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    msp_id: Option<String>,
}

impl CallerIdentity {
    pub fn new(msp_id: impl Into<String>) -> Self {
        CallerIdentity {
            msp_id: Some(msp_id.into()),
        }
    }

    pub fn unresolved() -> Self {
        CallerIdentity { msp_id: None }
    }

    pub fn from_optional(msp_id: Option<String>) -> Self {
        CallerIdentity { msp_id }
    }
}

impl ClientIdentity for CallerIdentity {
    fn msp_id(&self) -> Result<String, ContractError> {
        match &self.msp_id {
            Some(id) if !id.is_empty() => Ok(id.clone()),
            _ => Err(ContractError::AuthorizationDenied(
                "unable to get MSP ID from caller identity".to_string(),
            )),
        }
    }
}
