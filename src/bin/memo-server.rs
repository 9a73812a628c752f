//! memo-server - gRPC Server Binary
//!
//! Usage:
//!   memo-server [OPTIONS]
//!
//! Examples:
//!   memo-server                                # Listen on 0.0.0.0:50051
//!   memo-server --addr 127.0.0.1:9090          # Custom address
//!   GRPC_ADDR=127.0.0.1:8080 LOG_LEVEL=debug memo-server

use anyhow::{Context, Result};
use clap::Parser;
use memo_core::{config::ServerConfig, logging, rpc::RpcServer};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();

    logging::init(config.level(), config.log_format)?;

    let addr = config.socket_addr()?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting memo server");

    RpcServer::in_memory()
        .serve(addr)
        .await
        .context("memo server failed")?;

    info!("server stopped");
    Ok(())
}
