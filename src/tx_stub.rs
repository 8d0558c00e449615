//! Per-invocation write-set overlay.
//!
//! A [`TxStub`] wraps a read-only borrow of the committed world state and
//! buffers every put and delete of one invocation. Reads see the buffered
//! writes first. Nothing reaches the backend until the caller takes the write
//! set with [`TxStub::into_writes`] and applies it, so an invocation that fails
//! halfway leaves the committed state untouched.

use std::collections::btree_map;
use std::iter::Peekable;

use crate::contract_error::ContractError;
use crate::world_state::{range_bounds, StateEntry, WorldState, WriteSet};

pub struct TxStub<'s, S: WorldState> {
    committed: &'s S,
    writes: WriteSet,
}

impl<'s, S: WorldState> TxStub<'s, S> {
    pub fn new(committed: &'s S) -> Self {
        TxStub {
            committed,
            writes: WriteSet::new(),
        }
    }

    pub fn pending_writes(&self) -> usize {
        self.writes.len()
    }

    pub fn into_writes(self) -> WriteSet {
        self.writes
    }
}

/// Merges the committed scan with the buffered writes of the same range.
/// On equal keys the buffered write wins; buffered deletes hide the entry.
pub struct OverlayScan<'a, I: Iterator<Item = Result<StateEntry, ContractError>>> {
    committed: Peekable<I>,
    pending: Option<Peekable<btree_map::Range<'a, String, Option<Vec<u8>>>>>,
}

impl<'a, I> OverlayScan<'a, I>
where
    I: Iterator<Item = Result<StateEntry, ContractError>>,
{
    fn take_pending(&mut self) -> Option<Option<StateEntry>> {
        let (key, value) = self.pending.as_mut()?.next()?;
        Some(value.as_ref().map(|bytes| (key.clone(), bytes.clone())))
    }
}

impl<'a, I> Iterator for OverlayScan<'a, I>
where
    I: Iterator<Item = Result<StateEntry, ContractError>>,
{
    type Item = Result<StateEntry, ContractError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let committed_key = match self.committed.peek() {
                Some(Ok((key, _))) => Some(key.clone()),
                Some(Err(_)) => return self.committed.next(),
                None => None,
            };
            let pending_key = self
                .pending
                .as_mut()
                .and_then(|pending| pending.peek())
                .map(|(key, _)| (*key).clone());

            let from_pending = match (committed_key, pending_key) {
                (None, None) => return None,
                (Some(_), None) => return self.committed.next(),
                (None, Some(_)) => self.take_pending(),
                (Some(committed), Some(pending)) => {
                    if committed < pending {
                        return self.committed.next();
                    }
                    if committed == pending {
                        // shadowed by the buffered write
                        self.committed.next();
                    }
                    self.take_pending()
                }
            };

            if let Some(Some(entry)) = from_pending {
                return Some(Ok(entry));
            }
        }
    }
}

impl<'s, S: WorldState> WorldState for TxStub<'s, S> {
    type Scan<'a> = OverlayScan<'a, S::Scan<'a>> where Self: 'a;

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, ContractError> {
        match self.writes.get(key) {
            Some(pending) => Ok(pending.clone()),
            None => self.committed.get_state(key),
        }
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), ContractError> {
        if key.is_empty() {
            return Err(ContractError::InvalidArgument("key must not be empty".to_string()));
        }
        self.writes.insert(key.to_string(), Some(value));
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> Result<(), ContractError> {
        if key.is_empty() {
            return Err(ContractError::InvalidArgument("key must not be empty".to_string()));
        }
        self.writes.insert(key.to_string(), None);
        Ok(())
    }

    fn scan_range<'a>(&'a self, start: &str, end: &str) -> Result<Self::Scan<'a>, ContractError> {
        let committed = self.committed.scan_range(start, end)?;
        let pending = range_bounds(start, end).map(|bounds| self.writes.range::<str, _>(bounds).peekable());
        Ok(OverlayScan {
            committed: committed.peekable(),
            pending,
        })
    }
}
