//! Routes a named operation with ordered string arguments to the contracts.
//!
//! Payload encoding: records are JSON objects, listings are JSON arrays,
//! existence checks are `true`/`false`, and operations without a result
//! return an empty string.

use serde::Serialize;

use crate::case_contract::CaseContract;
use crate::case_record::CaseRecord;
use crate::contract_error::ContractError;
use crate::invocation::InvocationContext;
use crate::operation::Operation;
use crate::personnel_contract::PersonnelContract;
use crate::personnel_record::PersonnelRecord;
use crate::world_state::WorldState;

fn encode<T: Serialize>(value: &T) -> Result<String, ContractError> {
    Ok(serde_json::to_string(value)?)
}

pub fn dispatch<W: WorldState>(
    ctx: &mut InvocationContext<'_, W>,
    operation: Operation,
    args: &[String],
) -> Result<String, ContractError> {
    operation.check_arity(args)?;

    match operation {
        Operation::SeedPersonnel => PersonnelContract::seed(ctx).map(|_| String::new()),
        Operation::CreatePersonnel => {
            let record = PersonnelRecord::from_args(args)?;
            PersonnelContract::create(ctx, &record).map(|_| String::new())
        }
        Operation::ReadPersonnel => encode(&PersonnelContract::read(ctx, &args[0])?),
        Operation::UpdatePersonnel => {
            let record = PersonnelRecord::from_args(args)?;
            PersonnelContract::update(ctx, &record).map(|_| String::new())
        }
        Operation::DeletePersonnel => PersonnelContract::delete(ctx, &args[0]).map(|_| String::new()),
        Operation::PersonnelExists => encode(&PersonnelContract::exists(ctx, &args[0])?),
        Operation::ListAllPersonnel => encode(&PersonnelContract::list_all(ctx)?),
        Operation::SeedCases => CaseContract::seed(ctx).map(|_| String::new()),
        Operation::FileCase => {
            let record = CaseRecord::from_args(args)?;
            CaseContract::file(ctx, &record).map(|_| String::new())
        }
        Operation::ReadCase => encode(&CaseContract::read(ctx, &args[0])?),
        Operation::UpdateCaseStatus => CaseContract::update_status(ctx, &args[0], &args[1]).map(|_| String::new()),
        Operation::DeleteCase => CaseContract::delete(ctx, &args[0]).map(|_| String::new()),
        Operation::CaseExists => encode(&CaseContract::exists(ctx, &args[0])?),
        Operation::ListAllCases => encode(&CaseContract::list_all(ctx)?),
    }
}
