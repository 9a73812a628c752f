//! memo-cli - command-line client for memo-server
//!
//! Examples:
//!   memo-cli create --title Groceries --content "milk, eggs"
//!   memo-cli get --id <ID>
//!   memo-cli --json list
//!   memo-cli --addr memo.internal:50051 --deadline 1500ms delete --id <ID>

use anyhow::Result;
use clap::Parser;
use memo_core::cli::{self, CliArgs};
use memo_core::logging::{self, LogFormat};
use std::process::ExitCode;
use tracing::Level;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();

    logging::init(Level::WARN, LogFormat::Text)?;

    let mut client = cli::connect(&args.addr).await?;

    match cli::execute(&mut client, args.deadline, args.command).await {
        Ok(output) => {
            let rendered = output.render(args.json)?;
            if !rendered.is_empty() {
                println!("{}", rendered);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            eprintln!("{}", failure);
            Ok(ExitCode::FAILURE)
        }
    }
}
