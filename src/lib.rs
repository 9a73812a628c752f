//! Memo - In-Memory Memo Record Service
//!
//! Clients create, fetch, list and delete short text memos over gRPC.
//!
//! # Architecture
//!
//! The system is organized into three layers, each depending only on the one below:
//! - **Storage**: concurrency-safe keyed store of memos ([`MemoRepository`])
//! - **Services**: validation, id and timestamp minting ([`MemoService`])
//! - **RPC**: tonic handlers mapping domain errors to gRPC status codes
//!
//! # Example
//!
//! ```
//! use memo_core::{InMemoryMemoRepository, MemoService};
//! use std::sync::Arc;
//!
//! let service = MemoService::new(Arc::new(InMemoryMemoRepository::new()));
//! let memo = service.create("Groceries", "milk, eggs").unwrap();
//! assert_eq!(service.get(memo.id.as_str()).unwrap().content, "milk, eggs");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod rpc;
pub mod services;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{ErrorKind, MemoError, Result};
pub use services::MemoService;
pub use storage::{InMemoryMemoRepository, MemoRepository};
pub use types::{Memo, MemoId, MAX_CONTENT_CHARS, MAX_TITLE_CHARS};
