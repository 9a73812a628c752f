//! Core data types for the memo service
//!
//! A [`Memo`] is the only domain record. Its identifier and creation timestamp
//! are minted by the service layer; title and content are validated there
//! before a memo ever reaches storage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum title length, in characters
pub const MAX_TITLE_CHARS: usize = 100;

/// Maximum content length, in characters
pub const MAX_CONTENT_CHARS: usize = 2000;

/// Opaque identifier for memos
///
/// Freshly minted ids are UUID v4 strings, but lookups accept any text: an id
/// that was never issued is simply not found rather than malformed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoId(String);

impl MemoId {
    /// Mint a fresh random memo ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for MemoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for MemoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for MemoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A short text memo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    /// Unique identifier, immutable after creation
    pub id: MemoId,

    /// 1 to [`MAX_TITLE_CHARS`] characters
    pub title: String,

    /// 0 to [`MAX_CONTENT_CHARS`] characters
    pub content: String,

    /// Creation time in milliseconds since the Unix epoch
    pub created_at: i64,
}
