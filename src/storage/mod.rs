//! Storage layer for memo records
//!
//! Storage holds memos without judging them: validation happens in the
//! service layer before anything is saved here.

pub mod memory;

use crate::types::{Memo, MemoId};

pub use memory::InMemoryMemoRepository;

/// Repository trait defining all required operations
///
/// Implementations must be safe to share across request tasks. None of the
/// operations can fail; absence is reported with `None`.
#[cfg_attr(test, mockall::automock)]
pub trait MemoRepository: Send + Sync {
    /// Insert or overwrite the memo stored under `memo.id`
    fn save(&self, memo: Memo);

    /// Retrieve a memo by ID
    fn get(&self, id: &MemoId) -> Option<Memo>;

    /// All stored memos, in no particular order
    fn list(&self) -> Vec<Memo>;

    /// Remove a memo; absent ids are ignored
    fn delete(&self, id: &MemoId);

    /// Number of stored memos
    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
