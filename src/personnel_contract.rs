//! Contract operations for police personnel files.
//!
//! Each operation asks the gate first; whether it is actually gated is up to
//! the [`crate::access_policy::AccessPolicy`] table.

use crate::contract_error::ContractError;
use crate::invocation::InvocationContext;
use crate::operation::Operation;
use crate::personnel_record::PersonnelRecord;
use crate::seeder::seed_records;
use crate::world_state::WorldState;

pub struct PersonnelContract;

impl PersonnelContract {
    pub fn seed<W: WorldState>(ctx: &mut InvocationContext<'_, W>) -> Result<usize, ContractError> {
        ctx.authorize(Operation::SeedPersonnel)?;
        let mode = ctx.seed_mode();
        seed_records(&mut ctx.personnel(), &PersonnelRecord::seed_records(), mode)
    }

    pub fn create<W: WorldState>(
        ctx: &mut InvocationContext<'_, W>,
        record: &PersonnelRecord,
    ) -> Result<(), ContractError> {
        ctx.authorize(Operation::CreatePersonnel)?;
        ctx.personnel().create(record)
    }

    pub fn read<W: WorldState>(
        ctx: &mut InvocationContext<'_, W>,
        officer_id: &str,
    ) -> Result<PersonnelRecord, ContractError> {
        ctx.authorize(Operation::ReadPersonnel)?;
        ctx.personnel().read(officer_id)
    }

    /// Full replace of an existing file.
    pub fn update<W: WorldState>(
        ctx: &mut InvocationContext<'_, W>,
        record: &PersonnelRecord,
    ) -> Result<(), ContractError> {
        ctx.authorize(Operation::UpdatePersonnel)?;
        ctx.personnel().update(record)
    }

    pub fn delete<W: WorldState>(ctx: &mut InvocationContext<'_, W>, officer_id: &str) -> Result<(), ContractError> {
        ctx.authorize(Operation::DeletePersonnel)?;
        ctx.personnel().delete(officer_id)
    }

    pub fn exists<W: WorldState>(ctx: &mut InvocationContext<'_, W>, officer_id: &str) -> Result<bool, ContractError> {
        ctx.authorize(Operation::PersonnelExists)?;
        ctx.personnel().exists(officer_id)
    }

    pub fn list_all<W: WorldState>(ctx: &mut InvocationContext<'_, W>) -> Result<Vec<PersonnelRecord>, ContractError> {
        ctx.authorize(Operation::ListAllPersonnel)?;
        let engine = ctx.personnel();
        let records = engine.scan_all()?.collect_records()?;
        Ok(records)
    }
}
