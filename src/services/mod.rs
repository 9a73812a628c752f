//! Business-rule layer between the RPC handlers and storage

pub mod memo;

pub use memo::MemoService;
