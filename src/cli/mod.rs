//! memo-cli: one RPC per invocation
//!
//! `memo-cli [--addr A] [--deadline D] [--json] <create|get|list|delete> [FLAGS]`

pub mod commands;

use crate::rpc::generated::memo_service_client::MemoServiceClient;
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};

pub use commands::{execute, Output, RpcFailure};

/// Server address used when neither `--addr` nor `MEMO_ADDR` is set
pub const DEFAULT_SERVER_ADDR: &str = "localhost:50051";

/// How long to wait for the connection before giving up
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// memo-cli command-line arguments
#[derive(Debug, Parser)]
#[command(name = "memo-cli")]
#[command(about = "Command-line client for the memo service")]
#[command(version)]
pub struct CliArgs {
    /// gRPC server address (e.g. localhost:50051)
    #[arg(long, env = "MEMO_ADDR", default_value = DEFAULT_SERVER_ADDR)]
    pub addr: String,

    /// Per-RPC deadline (e.g. 4s, 1500ms)
    #[arg(long, default_value = "4s", value_parser = parse_duration)]
    pub deadline: Duration,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create a memo
    Create {
        /// Title of the memo (1-100 chars)
        #[arg(long, default_value = "")]
        title: String,

        /// Content of the memo (0-2000 chars)
        #[arg(long, default_value = "")]
        content: String,
    },

    /// Show one memo
    Get {
        /// Memo ID
        #[arg(long, default_value = "")]
        id: String,
    },

    /// List all memos
    List,

    /// Delete a memo
    Delete {
        /// Memo ID
        #[arg(long, default_value = "")]
        id: String,
    },
}

/// Parse durations such as `4s`, `1500ms`, `2m` or a bare number of seconds
pub fn parse_duration(value: &str) -> Result<Duration, String> {
    let value = value.trim();
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (amount, unit) = value.split_at(split);

    let amount: u64 = amount
        .parse()
        .map_err(|_| format!("invalid duration: {value:?}"))?;

    match unit {
        "ms" => Ok(Duration::from_millis(amount)),
        "" | "s" => Ok(Duration::from_secs(amount)),
        "m" => amount
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or_else(|| format!("duration too large: {value:?}")),
        _ => Err(format!("unknown duration unit {unit:?} in {value:?}")),
    }
}

/// Prefix `http://` when the address has no scheme
pub fn endpoint_uri(addr: &str) -> String {
    let addr = addr.trim();
    if addr.contains("://") {
        addr.to_string()
    } else {
        format!("http://{addr}")
    }
}

/// Open a channel to the server, failing after [`CONNECT_TIMEOUT`]
pub async fn connect(addr: &str) -> Result<MemoServiceClient<Channel>> {
    let uri = endpoint_uri(addr);
    let endpoint = Endpoint::from_shared(uri.clone())
        .map_err(|e| anyhow!("invalid server address {}: {}", addr, e))?
        .connect_timeout(CONNECT_TIMEOUT);

    let channel = endpoint
        .connect()
        .await
        .with_context(|| format!("dial {} failed", uri))?;

    Ok(MemoServiceClient::new(channel))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("4s"), Ok(Duration::from_secs(4)));
        assert_eq!(parse_duration("1500ms"), Ok(Duration::from_millis(1500)));
        assert_eq!(parse_duration("2m"), Ok(Duration::from_secs(120)));
        assert_eq!(parse_duration("10"), Ok(Duration::from_secs(10)));
    }

    #[test]
    fn test_parse_duration_errors() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("s").is_err());
        assert!(parse_duration("5h").is_err());
        assert!(parse_duration("1.5s").is_err());
        assert_eq!(
            parse_duration("307445734561825862m"),
            Err("duration too large: \"307445734561825862m\"".to_string())
        );
        assert!(parse_duration("99999999999999999999s").is_err());
    }

    #[test]
    fn test_endpoint_uri() {
        assert_eq!(endpoint_uri("localhost:50051"), "http://localhost:50051");
        assert_eq!(endpoint_uri("https://memo.internal"), "https://memo.internal");
    }

    #[test]
    fn test_parse_create_command() {
        let args = CliArgs::try_parse_from([
            "memo-cli",
            "--addr",
            "127.0.0.1:9000",
            "--deadline",
            "1500ms",
            "create",
            "--title",
            "Groceries",
            "--content",
            "milk, eggs",
        ])
        .unwrap();

        assert_eq!(args.addr, "127.0.0.1:9000");
        assert_eq!(args.deadline, Duration::from_millis(1500));
        assert!(!args.json);
        assert_eq!(
            args.command,
            Command::Create {
                title: "Groceries".to_string(),
                content: "milk, eggs".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_flags_default_to_empty() {
        let args = CliArgs::try_parse_from(["memo-cli", "get"]).unwrap();
        assert_eq!(args.command, Command::Get { id: String::new() });
        assert_eq!(args.deadline, Duration::from_secs(4));
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(CliArgs::try_parse_from(["memo-cli", "update"]).is_err());
    }
}
