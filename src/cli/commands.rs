//! Running a parsed command against the server and rendering the result

use super::Command;
use crate::rpc::conversions::memo_from_proto;
use crate::rpc::generated::memo_service_client::MemoServiceClient;
use crate::rpc::generated::{
    CreateMemoRequest, DeleteMemoRequest, GetMemoRequest, ListMemosRequest,
};
use crate::types::Memo;
use std::time::Duration;
use thiserror::Error;
use tonic::transport::Channel;
use tonic::{Request, Status};

/// A failed RPC, tagged with the operation name
#[derive(Debug, Error)]
#[error("{op} failed: code={code:?} msg={message}", code = .status.code(), message = .status.message())]
pub struct RpcFailure {
    pub op: &'static str,
    pub status: Status,
}

/// What a successful command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Created(Memo),
    Fetched(Memo),
    Listed(Vec<Memo>),
    Deleted(String),
}

impl Output {
    pub fn render(&self, json: bool) -> serde_json::Result<String> {
        if json {
            return match self {
                Output::Created(memo) | Output::Fetched(memo) => serde_json::to_string_pretty(memo),
                Output::Listed(memos) => serde_json::to_string_pretty(memos),
                Output::Deleted(id) => serde_json::to_string(&serde_json::json!({ "deleted": id })),
            };
        }

        Ok(match self {
            Output::Created(memo) => format!("Created memo: ID={}", memo.id),
            Output::Fetched(memo) => format!(
                "Memo: ID={} Title={:?} Content={:?} CreatedAt={}",
                memo.id, memo.title, memo.content, memo.created_at
            ),
            Output::Listed(memos) => memos
                .iter()
                .map(|memo| {
                    format!(
                        "ID={} title={:?} created_at={}",
                        memo.id, memo.title, memo.created_at
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Output::Deleted(id) => format!("Memo deleted: {}", id),
        })
    }
}

fn with_deadline<T>(message: T, deadline: Duration) -> Request<T> {
    let mut request = Request::new(message);
    request.set_timeout(deadline);
    request
}

/// Issue the single RPC behind `command`
pub async fn execute(
    client: &mut MemoServiceClient<Channel>,
    deadline: Duration,
    command: Command,
) -> Result<Output, RpcFailure> {
    match command {
        Command::Create { title, content } => {
            let response = client
                .create_memo(with_deadline(CreateMemoRequest { title, content }, deadline))
                .await
                .map_err(|status| RpcFailure { op: "CreateMemo", status })?;
            let memo = response.into_inner().memo.unwrap_or_default();
            Ok(Output::Created(memo_from_proto(memo)))
        }
        Command::Get { id } => {
            let response = client
                .get_memo(with_deadline(GetMemoRequest { id }, deadline))
                .await
                .map_err(|status| RpcFailure { op: "GetMemo", status })?;
            let memo = response.into_inner().memo.unwrap_or_default();
            Ok(Output::Fetched(memo_from_proto(memo)))
        }
        Command::List => {
            let response = client
                .list_memos(with_deadline(ListMemosRequest {}, deadline))
                .await
                .map_err(|status| RpcFailure { op: "ListMemos", status })?;
            let memos = response
                .into_inner()
                .memos
                .into_iter()
                .map(memo_from_proto)
                .collect();
            Ok(Output::Listed(memos))
        }
        Command::Delete { id } => {
            client
                .delete_memo(with_deadline(DeleteMemoRequest { id: id.clone() }, deadline))
                .await
                .map_err(|status| RpcFailure { op: "DeleteMemo", status })?;
            Ok(Output::Deleted(id))
        }
    }
}
