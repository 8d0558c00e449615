//! The key-value interface the contracts run against.
//!
//! [`WorldState`] is the only view the contract logic has of the ledger: point
//! reads, point writes, point deletes and a half-open range scan. Backends are
//! expected to be deterministic; [`MemoryWorldState`] keeps its data in a
//! `BTreeMap` so scans always come back in key order.

use std::cell::Cell;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Bound;

use crate::contract_error::ContractError;

/// One entry yielded by a range scan.
pub type StateEntry = (String, Vec<u8>);

/// A pending change: `Some(bytes)` is a put, `None` a delete.
pub type WriteSet = BTreeMap<String, Option<Vec<u8>>>;

pub trait WorldState {
    /// Scan handle returned by [`WorldState::scan_range`]. Dropping it releases
    /// whatever cursor state the backend holds.
    type Scan<'a>: Iterator<Item = Result<StateEntry, ContractError>>
    where
        Self: 'a;

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, ContractError>;

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), ContractError>;

    fn del_state(&mut self, key: &str) -> Result<(), ContractError>;

    /// Yields every entry with `start <= key < end` in key order.
    /// An empty `start` or `end` leaves that side of the range open.
    fn scan_range<'a>(&'a self, start: &str, end: &str) -> Result<Self::Scan<'a>, ContractError>;

    /// Applies a committed write set. Backends that can do so apply it as a
    /// single atomic batch.
    fn apply_writes(&mut self, writes: WriteSet) -> Result<(), ContractError> {
        for (key, value) in writes {
            match value {
                Some(bytes) => self.put_state(&key, bytes)?,
                None => self.del_state(&key)?,
            }
        }
        Ok(())
    }
}

/// Turns the `""`-means-open convention into `Bound`s, or `None` when the
/// range is empty.
pub(crate) fn range_bounds<'k>(start: &'k str, end: &'k str) -> Option<(Bound<&'k str>, Bound<&'k str>)> {
    if !start.is_empty() && !end.is_empty() && start >= end {
        return None;
    }
    let lower = if start.is_empty() { Bound::Unbounded } else { Bound::Included(start) };
    let upper = if end.is_empty() { Bound::Unbounded } else { Bound::Excluded(end) };
    Some((lower, upper))
}

/// In-memory world state.
#[derive(Debug, Default)]
pub struct MemoryWorldState {
    entries: BTreeMap<String, Vec<u8>>,
    open_scans: Cell<usize>,
}

impl MemoryWorldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of scan handles that have been opened and not yet dropped.
    pub fn open_scan_handles(&self) -> usize {
        self.open_scans.get()
    }

    /// Snapshot of the raw contents, for comparing state before and after an
    /// invocation.
    pub fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        self.entries.clone()
    }
}

pub struct MemoryScan<'a> {
    range: Option<btree_map::Range<'a, String, Vec<u8>>>,
    open_scans: &'a Cell<usize>,
}

impl Iterator for MemoryScan<'_> {
    type Item = Result<StateEntry, ContractError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.range.as_mut()?.next()?;
        Some(Ok((key.clone(), value.clone())))
    }
}

impl Drop for MemoryScan<'_> {
    fn drop(&mut self) {
        self.open_scans.set(self.open_scans.get().saturating_sub(1));
    }
}

impl WorldState for MemoryWorldState {
    type Scan<'a> = MemoryScan<'a>;

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, ContractError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), ContractError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> Result<(), ContractError> {
        self.entries.remove(key);
        Ok(())
    }

    fn scan_range<'a>(&'a self, start: &str, end: &str) -> Result<MemoryScan<'a>, ContractError> {
        let range = range_bounds(start, end).map(|bounds| self.entries.range::<str, _>(bounds));
        self.open_scans.set(self.open_scans.get() + 1);
        Ok(MemoryScan {
            range,
            open_scans: &self.open_scans,
        })
    }
}
