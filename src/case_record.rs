//! First information report (FIR) case file.

use serde::{Deserialize, Serialize};

use crate::contract_error::ContractError;
use crate::ledger_record::{LedgerRecord, RecordKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    #[serde(rename = "caseID")]
    pub case_id: String,
    pub filed_by: String,
    pub accused: String,
    pub crime_type: String,
    pub description: String,
    pub status: String,
    /// Supplied by the caller; never read from a local clock.
    pub timestamp: String,
}

impl LedgerRecord for CaseRecord {
    const KIND: RecordKind = RecordKind::Case;

    fn record_id(&self) -> &str {
        &self.case_id
    }
}

impl CaseRecord {
    /// Builds a record from the seven ordered arguments of `fileCase`.
    pub fn from_args(args: &[String]) -> Result<Self, ContractError> {
        let [case_id, filed_by, accused, crime_type, description, status, timestamp] = args else {
            return Err(ContractError::InvalidArgument(format!(
                "case record needs 7 fields, got {}",
                args.len()
            )));
        };

        Ok(CaseRecord {
            case_id: case_id.clone(),
            filed_by: filed_by.clone(),
            accused: accused.clone(),
            crime_type: crime_type.clone(),
            description: description.clone(),
            status: status.clone(),
            timestamp: timestamp.clone(),
        })
    }

    pub fn seed_records() -> Vec<CaseRecord> {
        vec![
            CaseRecord {
                case_id: "FIR1".to_string(),
                filed_by: "OfficerA".to_string(),
                accused: "John Doe".to_string(),
                crime_type: "Theft".to_string(),
                description: "Stolen bike".to_string(),
                status: "Open".to_string(),
                timestamp: "2024-01-01T10:00:00Z".to_string(),
            },
            CaseRecord {
                case_id: "FIR2".to_string(),
                filed_by: "OfficerB".to_string(),
                accused: "Jane Smith".to_string(),
                crime_type: "Assault".to_string(),
                description: "Physical altercation".to_string(),
                status: "Investigation".to_string(),
                timestamp: "2024-01-02T14:30:00Z".to_string(),
            },
        ]
    }
}
