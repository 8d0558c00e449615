//! Configuration handed to a [`crate::ledger::Ledger`] at construction.
//!
//! ```rust
//! use police_records_core::contract_config::{ContractConfig, KeyScheme, SeedMode};
//!
//! let config = ContractConfig::from_json(r#"{"authorizedOrg":"Org1MSP","keyScheme":"shared"}"#)?;
//! assert_eq!(config.authorized_org, "Org1MSP");
//! assert_eq!(config.key_scheme, KeyScheme::Shared);
//! assert_eq!(config.seed_mode, SeedMode::SkipExisting);
//! # Ok::<(), police_records_core::contract_error::ContractError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::access_policy::{AccessPolicy, PolicyPreset};
use crate::contract_error::ContractError;

/// How record ids map onto world state keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyScheme {
    /// `<kind>~<id>`; each kind scans only its own prefix.
    #[default]
    Prefixed,
    /// Raw id in one shared keyspace, scanned end to end.
    Shared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeedMode {
    /// Only absent keys are written.
    #[default]
    SkipExisting,
    /// Every seed record is written, replacing whatever is stored.
    Overwrite,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContractConfig {
    pub authorized_org: String,
    #[serde(default)]
    pub access_policy: PolicyPreset,
    #[serde(default)]
    pub key_scheme: KeyScheme,
    #[serde(default)]
    pub seed_mode: SeedMode,
}

impl ContractConfig {
    pub fn new(authorized_org: impl Into<String>) -> Self {
        ContractConfig {
            authorized_org: authorized_org.into(),
            access_policy: PolicyPreset::default(),
            key_scheme: KeyScheme::default(),
            seed_mode: SeedMode::default(),
        }
    }

    /// Behaves exactly like the deployed chaincode: observed gate coverage,
    /// one shared keyspace and overwriting seeds.
    pub fn fabric_parity(authorized_org: impl Into<String>) -> Self {
        ContractConfig {
            authorized_org: authorized_org.into(),
            access_policy: PolicyPreset::Observed,
            key_scheme: KeyScheme::Shared,
            seed_mode: SeedMode::Overwrite,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ContractError> {
        let config: ContractConfig = serde_json::from_str(json)
            .map_err(|e| ContractError::InvalidArgument(format!("Invalid contract config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ContractError> {
        if self.authorized_org.trim().is_empty() {
            return Err(ContractError::InvalidArgument("authorizedOrg must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn with_access_policy(mut self, preset: PolicyPreset) -> Self {
        self.access_policy = preset;
        self
    }

    pub fn with_key_scheme(mut self, scheme: KeyScheme) -> Self {
        self.key_scheme = scheme;
        self
    }

    pub fn with_seed_mode(mut self, mode: SeedMode) -> Self {
        self.seed_mode = mode;
        self
    }

    pub fn access_policy(&self) -> AccessPolicy {
        AccessPolicy::from_preset(self.authorized_org.clone(), &self.access_policy)
    }
}
