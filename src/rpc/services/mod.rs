//! gRPC service implementations

pub mod memo;

pub use memo::MemoHandler;
