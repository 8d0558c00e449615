use std::marker::PhantomData;

use crate::contract_error::ContractError;
use crate::ledger_record::LedgerRecord;
use crate::world_state::StateEntry;

/// Lazy, single-pass decoder over a world state range scan.
///
/// Owns the backend scan handle; the handle is released when the `RecordScan`
/// is dropped, whether it ran to the end, stopped early or hit an error.
/// After the first error the scan is finished and yields nothing more.
pub struct RecordScan<I, R> {
    entries: Option<I>,
    _record: PhantomData<R>,
}

impl<I, R> RecordScan<I, R>
where
    I: Iterator<Item = Result<StateEntry, ContractError>>,
    R: LedgerRecord,
{
    pub fn new(entries: I) -> Self {
        RecordScan {
            entries: Some(entries),
            _record: PhantomData,
        }
    }

    /// Drains the scan into a list, stopping at the first failure.
    pub fn collect_records(self) -> Result<Vec<R>, ContractError> {
        self.collect()
    }
}

impl<I, R> Iterator for RecordScan<I, R>
where
    I: Iterator<Item = Result<StateEntry, ContractError>>,
    R: LedgerRecord,
{
    type Item = Result<R, ContractError>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.as_mut()?.next();
        let decoded = match entry {
            None => None,
            Some(Ok((key, bytes))) => Some(serde_json::from_slice::<R>(&bytes).map_err(|e| {
                ContractError::SerializationError(format!("malformed {} at {key}: {e}", R::KIND.label()))
            })),
            Some(Err(e)) => Some(Err(e)),
        };

        // exhausted or failed: release the handle now rather than at drop
        if !matches!(decoded, Some(Ok(_))) {
            self.entries = None;
        }
        decoded
    }
}
