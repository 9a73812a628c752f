//! MemoService implementation
//!
//! Thin adapter: check the call context, delegate to the domain service, wrap
//! the result. Status codes come from `From<MemoError> for Status`.

use crate::rpc::context::{CallContext, RequestId};
use crate::rpc::conversions::{memo_to_proto, memos_to_proto};
use crate::rpc::generated::memo_service_server::MemoService as MemoRpc;
use crate::rpc::generated::*;
use crate::services::MemoService;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::debug;

#[derive(Clone)]
pub struct MemoHandler {
    service: Arc<MemoService>,
}

impl MemoHandler {
    pub fn new(service: Arc<MemoService>) -> Self {
        Self { service }
    }

    fn enter<T>(&self, method: &str, request: &Request<T>) -> Result<(), Status> {
        if let Some(req_id) = request.extensions().get::<RequestId>() {
            debug!(%req_id, method, "handling call");
        }
        CallContext::from_request(request).ensure_live()
    }
}

#[tonic::async_trait]
impl MemoRpc for MemoHandler {
    async fn create_memo(
        &self,
        request: Request<CreateMemoRequest>,
    ) -> Result<Response<CreateMemoResponse>, Status> {
        self.enter("CreateMemo", &request)?;
        let req = request.into_inner();

        let memo = self
            .service
            .create(req.title, req.content)
            .map_err(Status::from)?;

        Ok(Response::new(CreateMemoResponse {
            memo: Some(memo_to_proto(memo)),
        }))
    }

    async fn get_memo(
        &self,
        request: Request<GetMemoRequest>,
    ) -> Result<Response<GetMemoResponse>, Status> {
        self.enter("GetMemo", &request)?;
        let req = request.into_inner();

        let memo = self.service.get(&req.id).map_err(Status::from)?;

        Ok(Response::new(GetMemoResponse {
            memo: Some(memo_to_proto(memo)),
        }))
    }

    async fn list_memos(
        &self,
        request: Request<ListMemosRequest>,
    ) -> Result<Response<ListMemosResponse>, Status> {
        self.enter("ListMemos", &request)?;

        let memos = self.service.list();

        Ok(Response::new(ListMemosResponse {
            memos: memos_to_proto(memos),
        }))
    }

    async fn delete_memo(
        &self,
        request: Request<DeleteMemoRequest>,
    ) -> Result<Response<DeleteMemoResponse>, Status> {
        self.enter("DeleteMemo", &request)?;
        let req = request.into_inner();

        self.service.delete(&req.id).map_err(Status::from)?;

        Ok(Response::new(DeleteMemoResponse {}))
    }
}
