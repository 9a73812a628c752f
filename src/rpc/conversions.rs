//! Type conversions between Protobuf and internal types

use crate::rpc::generated;
use crate::types::{Memo as InternalMemo, MemoId};

/// Convert internal Memo to Protobuf Memo
pub fn memo_to_proto(memo: InternalMemo) -> generated::Memo {
    generated::Memo {
        id: memo.id.to_string(),
        title: memo.title,
        content: memo.content,
        created_at: memo.created_at,
    }
}

/// Convert Protobuf Memo to internal Memo
pub fn memo_from_proto(memo: generated::Memo) -> InternalMemo {
    InternalMemo {
        id: MemoId::from(memo.id),
        title: memo.title,
        content: memo.content,
        created_at: memo.created_at,
    }
}

/// Convert a batch of internal memos, keeping their order
pub fn memos_to_proto(memos: Vec<InternalMemo>) -> Vec<generated::Memo> {
    memos.into_iter().map(memo_to_proto).collect()
}
