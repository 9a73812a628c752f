//! Server configuration
//!
//! Flags take precedence over environment variables. Blank values (for
//! example `GRPC_ADDR=""`) fall back to the defaults.

use crate::logging::{parse_level, LogFormat};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::net::{SocketAddr, ToSocketAddrs};
use tracing::Level;

/// Listen address used when none is configured
pub const DEFAULT_ADDR: &str = "0.0.0.0:50051";

/// memo-server command-line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "memo-server")]
#[command(about = "gRPC server for the memo service")]
#[command(version)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "GRPC_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Resolve the listen address, accepting host names as well as IPs
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = match self.addr.trim() {
            "" => DEFAULT_ADDR,
            addr => addr,
        };

        addr.to_socket_addrs()
            .with_context(|| format!("invalid listen address: {}", addr))?
            .next()
            .ok_or_else(|| anyhow!("listen address resolved to nothing: {}", addr))
    }

    pub fn level(&self) -> Level {
        parse_level(&self.log_level)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}
