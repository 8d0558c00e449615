use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::contract_error::ContractError;

/// Every named entry point a caller can invoke.
///
/// The serialized names double as the wire names accepted by
/// [`Operation::from_name`] and the FFI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    SeedPersonnel,
    CreatePersonnel,
    ReadPersonnel,
    UpdatePersonnel,
    DeletePersonnel,
    PersonnelExists,
    ListAllPersonnel,
    SeedCases,
    FileCase,
    ReadCase,
    UpdateCaseStatus,
    DeleteCase,
    CaseExists,
    ListAllCases,
}

impl Operation {
    pub const ALL: [Operation; 14] = [
        Operation::SeedPersonnel,
        Operation::CreatePersonnel,
        Operation::ReadPersonnel,
        Operation::UpdatePersonnel,
        Operation::DeletePersonnel,
        Operation::PersonnelExists,
        Operation::ListAllPersonnel,
        Operation::SeedCases,
        Operation::FileCase,
        Operation::ReadCase,
        Operation::UpdateCaseStatus,
        Operation::DeleteCase,
        Operation::CaseExists,
        Operation::ListAllCases,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::SeedPersonnel => "seedPersonnel",
            Operation::CreatePersonnel => "createPersonnel",
            Operation::ReadPersonnel => "readPersonnel",
            Operation::UpdatePersonnel => "updatePersonnel",
            Operation::DeletePersonnel => "deletePersonnel",
            Operation::PersonnelExists => "personnelExists",
            Operation::ListAllPersonnel => "listAllPersonnel",
            Operation::SeedCases => "seedCases",
            Operation::FileCase => "fileCase",
            Operation::ReadCase => "readCase",
            Operation::UpdateCaseStatus => "updateCaseStatus",
            Operation::DeleteCase => "deleteCase",
            Operation::CaseExists => "caseExists",
            Operation::ListAllCases => "listAllCases",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, ContractError> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| ContractError::UnknownOperation(name.to_string()))
    }

    /// Number of ordered string arguments the operation takes.
    pub fn arity(self) -> usize {
        match self {
            Operation::SeedPersonnel
            | Operation::ListAllPersonnel
            | Operation::SeedCases
            | Operation::ListAllCases => 0,
            Operation::ReadPersonnel
            | Operation::DeletePersonnel
            | Operation::PersonnelExists
            | Operation::ReadCase
            | Operation::DeleteCase
            | Operation::CaseExists => 1,
            Operation::UpdateCaseStatus => 2,
            Operation::FileCase => 7,
            Operation::CreatePersonnel | Operation::UpdatePersonnel => 12,
        }
    }

    /// Whether the operation can write. Only reported in commit logs; commit
    /// decisions are made from the write set itself.
    pub fn is_write(self) -> bool {
        !matches!(
            self,
            Operation::ReadPersonnel
                | Operation::PersonnelExists
                | Operation::ListAllPersonnel
                | Operation::ReadCase
                | Operation::CaseExists
                | Operation::ListAllCases
        )
    }

    pub fn check_arity(self, args: &[String]) -> Result<(), ContractError> {
        if args.len() != self.arity() {
            return Err(ContractError::InvalidArgument(format!(
                "{} expects {} argument(s), got {}",
                self.name(),
                self.arity(),
                args.len()
            )));
        }
        Ok(())
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
