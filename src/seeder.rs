use log::debug;

use crate::contract_config::SeedMode;
use crate::contract_error::ContractError;
use crate::ledger_record::LedgerRecord;
use crate::record_engine::RecordEngine;
use crate::world_state::WorldState;

/// Writes a fixed set of records and returns how many were written.
///
/// With [`SeedMode::SkipExisting`] records whose key is already present are
/// left alone, so a second run writes nothing. With [`SeedMode::Overwrite`]
/// every record is written again.
pub fn seed_records<W, R>(
    engine: &mut RecordEngine<'_, W, R>,
    records: &[R],
    mode: SeedMode,
) -> Result<usize, ContractError>
where
    W: WorldState,
    R: LedgerRecord,
{
    let mut written = 0;
    for record in records {
        if mode == SeedMode::SkipExisting && engine.exists(record.record_id())? {
            debug!("seed: {} {} already present, skipped", R::KIND.label(), record.record_id());
            continue;
        }
        engine.write(record)?;
        written += 1;
    }
    Ok(written)
}
