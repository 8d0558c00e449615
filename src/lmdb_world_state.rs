//! LMDB-backed world state.
//!
//! The environment lives in a `<name>.lmdb` directory and holds a single named
//! database. Committed write sets are applied inside one LMDB write
//! transaction, so either every key of an invocation lands or none does.

use std::path::{Path, PathBuf};

use lmdb::{Cursor, Database, DatabaseFlags, Environment, Error as LmdbError, Transaction, WriteFlags};
use log::{debug, info};

use crate::contract_error::ContractError;
use crate::world_state::{StateEntry, WorldState, WriteSet};

const WORLD_STATE_DB: &str = "world_state";
const MAP_SIZE: usize = 64 * 1024 * 1024;

pub struct LmdbWorldState {
    env: Environment,
    db: Database,
    path: PathBuf,
}

impl LmdbWorldState {
    /// Opens (or creates) the environment at `<name>.lmdb`.
    pub fn init(name: &str) -> Result<Self, ContractError> {
        if name.is_empty() {
            return Err(ContractError::InvalidArgument("database name must not be empty".to_string()));
        }

        let path = PathBuf::from(format!("{name}.lmdb"));
        std::fs::create_dir_all(&path)?;

        let env = Environment::new()
            .set_max_dbs(1)
            .set_map_size(MAP_SIZE)
            .open(&path)?;
        let db = env.create_db(Some(WORLD_STATE_DB), DatabaseFlags::empty())?;

        info!("LMDB world state opened at {}", path.display());
        Ok(Self { env, db, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes the environment to disk. The environment itself is closed
    /// when the value is dropped.
    pub fn close(&self) -> Result<(), ContractError> {
        self.env.sync(true)?;
        info!("LMDB world state at {} synced for close", self.path.display());
        Ok(())
    }
}

impl WorldState for LmdbWorldState {
    type Scan<'a> = std::vec::IntoIter<Result<StateEntry, ContractError>>;

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, ContractError> {
        let txn = self.env.begin_ro_txn()?;
        let value = match txn.get(self.db, &key) {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(LmdbError::NotFound) => None,
            Err(e) => return Err(e.into()),
        };
        txn.abort();
        Ok(value)
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), ContractError> {
        let mut txn = self.env.begin_rw_txn()?;
        txn.put(self.db, &key, &value, WriteFlags::empty())?;
        txn.commit()?;
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> Result<(), ContractError> {
        let mut txn = self.env.begin_rw_txn()?;
        match txn.del(self.db, &key, None) {
            Ok(()) | Err(LmdbError::NotFound) => {}
            Err(e) => return Err(e.into()),
        }
        txn.commit()?;
        Ok(())
    }

    /// The cursor and read transaction are closed before this returns; the
    /// entries of the range are handed back as an owned batch. Reading is
    /// therefore eager on this backend: only decoding in
    /// [`crate::record_scan::RecordScan`] stays lazy. A streaming scan would
    /// have to keep the read transaction alive inside the scan handle.
    fn scan_range<'a>(&'a self, start: &str, end: &str) -> Result<Self::Scan<'a>, ContractError> {
        let txn = self.env.begin_ro_txn()?;
        let mut entries = Vec::new();
        {
            let mut cursor = txn.open_ro_cursor(self.db)?;
            let iter = if start.is_empty() {
                cursor.iter_start()
            } else {
                cursor.iter_from(start.as_bytes())
            };

            for (key, value) in iter {
                if !end.is_empty() && key >= end.as_bytes() {
                    break;
                }
                let entry = String::from_utf8(key.to_vec())
                    .map(|key| (key, value.to_vec()))
                    .map_err(|e| ContractError::StorageError(format!("Non UTF-8 key in world state: {e}")));
                entries.push(entry);
            }
        }
        txn.abort();

        debug!("LMDB range scan [{start:?}, {end:?}) read {} entries", entries.len());
        Ok(entries.into_iter())
    }

    fn apply_writes(&mut self, writes: WriteSet) -> Result<(), ContractError> {
        let mut txn = self.env.begin_rw_txn()?;
        for (key, value) in &writes {
            match value {
                Some(bytes) => txn.put(self.db, key, bytes, WriteFlags::empty())?,
                None => match txn.del(self.db, key, None) {
                    Ok(()) | Err(LmdbError::NotFound) => {}
                    Err(e) => return Err(e.into()),
                },
            }
        }
        txn.commit()?;
        debug!("LMDB applied write set of {} keys", writes.len());
        Ok(())
    }
}
