//! RPC server module (gRPC with Tonic)
//!
//! Adapts the generated `memo.v1.MemoService` trait to [`crate::services::MemoService`]
//! and owns every translation between domain errors and gRPC statuses.

pub mod context;
pub mod conversions;
pub mod errors;
pub mod generated;
pub mod logging;
pub mod server;
pub mod services;

pub use context::{CallContext, RequestId};
pub use logging::RequestLoggingLayer;
pub use server::RpcServer;
