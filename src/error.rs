//! Error types for the memo service
//!
//! Only the service layer produces these. Storage signals absence with
//! `Option`, and the RPC layer is the sole place they become gRPC statuses
//! (see `rpc::errors`).

use crate::types::MemoId;
use thiserror::Error;

/// Main error type for memo operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoError {
    /// Title is empty or longer than `MAX_TITLE_CHARS`
    #[error("title must be 1 to 100 characters")]
    InvalidTitle,

    /// Content is longer than `MAX_CONTENT_CHARS`
    #[error("content must be 0 to 2000 characters")]
    InvalidContent,

    /// An identifier was required but none was given
    #[error("memo id must not be empty")]
    EmptyId,

    /// No memo exists for the id
    #[error("memo not found: {0}")]
    NotFound(MemoId),

    /// Anything not covered above
    #[error("{0}")]
    Internal(String),
}

/// Coarse classification of a [`MemoError`]
///
/// Empty ids and bad titles are deliberately the same kind; callers that need
/// to tell them apart can match on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Internal,
}

impl MemoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MemoError::InvalidTitle | MemoError::InvalidContent | MemoError::EmptyId => {
                ErrorKind::InvalidInput
            }
            MemoError::NotFound(_) => ErrorKind::NotFound,
            MemoError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Result type alias for memo operations
pub type Result<T> = std::result::Result<T, MemoError>;
