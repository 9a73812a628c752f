//! Memo use-case service
//!
//! Validates input, mints ids and creation timestamps, and turns storage
//! misses into [`MemoError::NotFound`]. This is the only layer that produces
//! domain errors.
//!
//! `delete` checks existence and then removes as two separate repository
//! calls. Two concurrent deletes of the same id can therefore both succeed,
//! and a `get` racing a `delete` may or may not see the memo.

use crate::error::{MemoError, Result};
use crate::storage::MemoRepository;
use crate::types::{Memo, MemoId, MAX_CONTENT_CHARS, MAX_TITLE_CHARS};
use std::sync::Arc;
use tracing::{debug, field, instrument};

pub struct MemoService {
    repo: Arc<dyn MemoRepository>,
}

impl MemoService {
    pub fn new(repo: Arc<dyn MemoRepository>) -> Self {
        Self { repo }
    }

    /// Validate and store a new memo
    #[instrument(skip_all, fields(title_chars = field::Empty, content_chars = field::Empty))]
    pub fn create(&self, title: impl Into<String>, content: impl Into<String>) -> Result<Memo> {
        let title = title.into();
        let content = content.into();

        let title_chars = title.chars().count();
        let content_chars = content.chars().count();
        tracing::Span::current()
            .record("title_chars", title_chars)
            .record("content_chars", content_chars);

        if title_chars == 0 || title_chars > MAX_TITLE_CHARS {
            return Err(MemoError::InvalidTitle);
        }
        if content_chars > MAX_CONTENT_CHARS {
            return Err(MemoError::InvalidContent);
        }

        let memo = Memo {
            id: MemoId::generate(),
            title,
            content,
            created_at: chrono::Utc::now().timestamp_millis(),
        };
        self.repo.save(memo.clone());

        debug!(id = %memo.id, "memo created");
        Ok(memo)
    }

    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Result<Memo> {
        let id = require_id(id)?;
        self.repo.get(&id).ok_or(MemoError::NotFound(id))
    }

    /// Every stored memo, unordered
    pub fn list(&self) -> Vec<Memo> {
        self.repo.list()
    }

    #[instrument(skip(self))]
    pub fn delete(&self, id: &str) -> Result<()> {
        let id = require_id(id)?;
        if self.repo.get(&id).is_none() {
            return Err(MemoError::NotFound(id));
        }
        self.repo.delete(&id);

        debug!(%id, "memo deleted");
        Ok(())
    }
}

fn require_id(id: &str) -> Result<MemoId> {
    if id.is_empty() {
        return Err(MemoError::EmptyId);
    }
    Ok(MemoId::from(id))
}
