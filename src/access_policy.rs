//! Authorization gate.
//!
//! The gate is a table: a set of gated operations plus the single org allowed
//! to call them. Operations outside the set are open to any caller.

use std::collections::BTreeSet;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::contract_error::ContractError;
use crate::identity::ClientIdentity;
use crate::operation::Operation;

/// How the gated-operation set is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PolicyPreset {
    /// Coverage of the deployed chaincode: personnel reads are gated but case
    /// reads, both existence checks, both listings and case seeding are not.
    #[default]
    Observed,
    /// Every operation is gated.
    Strict,
    Custom { gated: Vec<Operation> },
}

impl PolicyPreset {
    pub fn gated_operations(&self) -> BTreeSet<Operation> {
        match self {
            PolicyPreset::Observed => [
                Operation::SeedPersonnel,
                Operation::CreatePersonnel,
                Operation::ReadPersonnel,
                Operation::UpdatePersonnel,
                Operation::DeletePersonnel,
                Operation::FileCase,
                Operation::UpdateCaseStatus,
                Operation::DeleteCase,
            ]
            .into_iter()
            .collect(),
            PolicyPreset::Strict => Operation::ALL.into_iter().collect(),
            PolicyPreset::Custom { gated } => gated.iter().copied().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    allowed_org: String,
    gated: BTreeSet<Operation>,
}

impl AccessPolicy {
    pub fn new(allowed_org: impl Into<String>, gated: BTreeSet<Operation>) -> Self {
        AccessPolicy {
            allowed_org: allowed_org.into(),
            gated,
        }
    }

    pub fn from_preset(allowed_org: impl Into<String>, preset: &PolicyPreset) -> Self {
        Self::new(allowed_org, preset.gated_operations())
    }

    pub fn allowed_org(&self) -> &str {
        &self.allowed_org
    }

    pub fn is_gated(&self, operation: Operation) -> bool {
        self.gated.contains(&operation)
    }

    /// Operations left open to any caller.
    pub fn ungated(&self) -> Vec<Operation> {
        Operation::ALL
            .into_iter()
            .filter(|op| !self.gated.contains(op))
            .collect()
    }

    pub fn authorize(&self, operation: Operation, caller: &dyn ClientIdentity) -> Result<(), ContractError> {
        if !self.is_gated(operation) {
            return Ok(());
        }

        let msp_id = caller.msp_id().map_err(|e| {
            warn!("{operation}: caller identity could not be resolved: {e}");
            e
        })?;

        if msp_id != self.allowed_org {
            warn!("{operation}: access denied for org {msp_id}");
            return Err(ContractError::AuthorizationDenied(format!(
                "only {} can perform {operation}, caller is {msp_id}",
                self.allowed_org
            )));
        }
        Ok(())
    }
}
