//! Generic create/read/update/delete over one record kind.
//!
//! Every method touches at most one key. Existence rules:
//!
//! | method   | key absent      | key present       |
//! |----------|-----------------|-------------------|
//! | `create` | write           | `AlreadyExists`   |
//! | `read`   | `NotFound`      | decode            |
//! | `update` | `NotFound`      | full overwrite    |
//! | `delete` | `NotFound`      | remove            |
//! | `exists` | `false`         | `true`            |

use std::marker::PhantomData;

use log::debug;

use crate::contract_config::KeyScheme;
use crate::contract_error::ContractError;
use crate::ledger_record::{kind_range, state_key, LedgerRecord};
use crate::record_scan::RecordScan;
use crate::world_state::WorldState;

pub struct RecordEngine<'w, W: WorldState, R: LedgerRecord> {
    state: &'w mut W,
    scheme: KeyScheme,
    _record: PhantomData<R>,
}

impl<'w, W: WorldState, R: LedgerRecord> RecordEngine<'w, W, R> {
    pub fn new(state: &'w mut W, scheme: KeyScheme) -> Self {
        RecordEngine {
            state,
            scheme,
            _record: PhantomData,
        }
    }

    fn key(&self, id: &str) -> Result<String, ContractError> {
        state_key(R::KIND, self.scheme, id)
    }

    pub fn exists(&self, id: &str) -> Result<bool, ContractError> {
        let key = self.key(id)?;
        Ok(self.state.get_state(&key)?.is_some())
    }

    pub fn create(&mut self, record: &R) -> Result<(), ContractError> {
        let id = record.record_id();
        if self.exists(id)? {
            return Err(ContractError::AlreadyExists(format!(
                "the {} {id} already exists",
                R::KIND.label()
            )));
        }
        self.write(record)
    }

    pub fn read(&self, id: &str) -> Result<R, ContractError> {
        let key = self.key(id)?;
        let bytes = self.state.get_state(&key)?.ok_or_else(|| self.not_found(id))?;
        let record = serde_json::from_slice(&bytes)?;
        Ok(record)
    }

    /// Replaces the whole stored record. Fields are never merged.
    pub fn update(&mut self, record: &R) -> Result<(), ContractError> {
        let id = record.record_id();
        if !self.exists(id)? {
            return Err(self.not_found(id));
        }
        self.write(record)
    }

    pub fn delete(&mut self, id: &str) -> Result<(), ContractError> {
        if !self.exists(id)? {
            return Err(self.not_found(id));
        }
        let key = self.key(id)?;
        debug!("deleting {key}");
        self.state.del_state(&key)
    }

    /// Writes without any existence check.
    pub fn write(&mut self, record: &R) -> Result<(), ContractError> {
        self.write_at(record.record_id(), record)
    }

    /// Writes `record` under the key of `id`, whatever id the record carries.
    pub fn write_at(&mut self, id: &str, record: &R) -> Result<(), ContractError> {
        let key = self.key(id)?;
        let bytes = serde_json::to_vec(record)?;
        debug!("writing {} bytes at {key}", bytes.len());
        self.state.put_state(&key, bytes)
    }

    /// Lazily decodes every stored record of this kind.
    pub fn scan_all(&self) -> Result<RecordScan<W::Scan<'_>, R>, ContractError> {
        let (start, end) = kind_range(R::KIND, self.scheme);
        let entries = self.state.scan_range(&start, &end)?;
        Ok(RecordScan::new(entries))
    }

    fn not_found(&self, id: &str) -> ContractError {
        ContractError::NotFound(format!("the {} {id} does not exist", R::KIND.label()))
    }
}
