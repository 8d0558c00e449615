//! Contract operations for FIR case files.

use log::debug;

use crate::case_record::CaseRecord;
use crate::contract_error::ContractError;
use crate::invocation::InvocationContext;
use crate::operation::Operation;
use crate::seeder::seed_records;
use crate::world_state::WorldState;

pub struct CaseContract;

impl CaseContract {
    pub fn seed<W: WorldState>(ctx: &mut InvocationContext<'_, W>) -> Result<usize, ContractError> {
        ctx.authorize(Operation::SeedCases)?;
        let mode = ctx.seed_mode();
        seed_records(&mut ctx.cases(), &CaseRecord::seed_records(), mode)
    }

    pub fn file<W: WorldState>(ctx: &mut InvocationContext<'_, W>, record: &CaseRecord) -> Result<(), ContractError> {
        ctx.authorize(Operation::FileCase)?;
        ctx.cases().create(record)
    }

    pub fn read<W: WorldState>(ctx: &mut InvocationContext<'_, W>, case_id: &str) -> Result<CaseRecord, ContractError> {
        ctx.authorize(Operation::ReadCase)?;
        ctx.cases().read(case_id)
    }

    /// Changes only `status`; every other field is written back as stored,
    /// under the key that was read.
    pub fn update_status<W: WorldState>(
        ctx: &mut InvocationContext<'_, W>,
        case_id: &str,
        new_status: &str,
    ) -> Result<(), ContractError> {
        ctx.authorize(Operation::UpdateCaseStatus)?;
        let mut engine = ctx.cases();
        let mut record = engine.read(case_id)?;
        debug!("FIR {case_id}: status {} -> {new_status}", record.status);
        record.status = new_status.to_string();
        engine.write_at(case_id, &record)
    }

    pub fn delete<W: WorldState>(ctx: &mut InvocationContext<'_, W>, case_id: &str) -> Result<(), ContractError> {
        ctx.authorize(Operation::DeleteCase)?;
        ctx.cases().delete(case_id)
    }

    pub fn exists<W: WorldState>(ctx: &mut InvocationContext<'_, W>, case_id: &str) -> Result<bool, ContractError> {
        ctx.authorize(Operation::CaseExists)?;
        ctx.cases().exists(case_id)
    }

    pub fn list_all<W: WorldState>(ctx: &mut InvocationContext<'_, W>) -> Result<Vec<CaseRecord>, ContractError> {
        ctx.authorize(Operation::ListAllCases)?;
        let engine = ctx.cases();
        let records = engine.scan_all()?.collect_records()?;
        Ok(records)
    }
}
