//! Volatile in-memory repository
//!
//! Records live in a `HashMap` behind a `RwLock`: lookups and listings share
//! the read lock, save and delete take the write lock for the single map
//! mutation only.

use super::MemoRepository;
use crate::types::{Memo, MemoId};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
pub struct InMemoryMemoRepository {
    store: RwLock<HashMap<MemoId, Memo>>,
}

impl InMemoryMemoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking writer cannot leave the map half-updated, so a poisoned
    // lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<MemoId, Memo>> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<MemoId, Memo>> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MemoRepository for InMemoryMemoRepository {
    fn save(&self, memo: Memo) {
        self.write().insert(memo.id.clone(), memo);
    }

    fn get(&self, id: &MemoId) -> Option<Memo> {
        self.read().get(id).cloned()
    }

    fn list(&self) -> Vec<Memo> {
        self.read().values().cloned().collect()
    }

    fn delete(&self, id: &MemoId) {
        self.write().remove(id);
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
