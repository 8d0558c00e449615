//! Police personnel file.

use serde::{Deserialize, Serialize};

use crate::contract_error::ContractError;
use crate::ledger_record::{LedgerRecord, RecordKind};

/// One officer's personnel file, keyed by `officerID`.
///
/// ```rust
/// use police_records_core::personnel_record::PersonnelRecord;
///
/// let record = PersonnelRecord::seed_records().remove(0);
/// let json = serde_json::to_value(&record)?;
/// assert_eq!(json["officerID"], "POL12345");
/// assert_eq!(json["dateOfBirth"], "1985-08-15");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelRecord {
    #[serde(rename = "officerID")]
    pub officer_id: String,
    pub name: String,
    pub rank: String,
    pub date_of_birth: String,
    pub posting: String,
    pub badge_number: String,
    pub employment_status: String,
    pub date_of_joining: String,
    pub award: String,
    pub suspension_note: String,
    pub last_updated_by: String,
    pub last_updated_on: String,
}

impl LedgerRecord for PersonnelRecord {
    const KIND: RecordKind = RecordKind::Personnel;

    fn record_id(&self) -> &str {
        &self.officer_id
    }
}

impl PersonnelRecord {
    /// Builds a record from the twelve ordered arguments of
    /// `createPersonnel` / `updatePersonnel`.
    pub fn from_args(args: &[String]) -> Result<Self, ContractError> {
        let [
            officer_id,
            name,
            rank,
            date_of_birth,
            posting,
            badge_number,
            employment_status,
            date_of_joining,
            award,
            suspension_note,
            last_updated_by,
            last_updated_on,
        ] = args
        else {
            return Err(ContractError::InvalidArgument(format!(
                "personnel record needs 12 fields, got {}",
                args.len()
            )));
        };

        Ok(PersonnelRecord {
            officer_id: officer_id.clone(),
            name: name.clone(),
            rank: rank.clone(),
            date_of_birth: date_of_birth.clone(),
            posting: posting.clone(),
            badge_number: badge_number.clone(),
            employment_status: employment_status.clone(),
            date_of_joining: date_of_joining.clone(),
            award: award.clone(),
            suspension_note: suspension_note.clone(),
            last_updated_by: last_updated_by.clone(),
            last_updated_on: last_updated_on.clone(),
        })
    }

    pub fn seed_records() -> Vec<PersonnelRecord> {
        vec![PersonnelRecord {
            officer_id: "POL12345".to_string(),
            name: "Inspector Anjali Mehta".to_string(),
            rank: "Inspector".to_string(),
            date_of_birth: "1985-08-15".to_string(),
            posting: "Cyber Crime Unit, Mumbai".to_string(),
            badge_number: "MUM-4521".to_string(),
            employment_status: "Active".to_string(),
            date_of_joining: "2010-06-12".to_string(),
            award: "Gallantry Award 2018".to_string(),
            suspension_note: String::new(),
            last_updated_by: "Org1".to_string(),
            last_updated_on: "2025-04-06".to_string(),
        }]
    }
}
