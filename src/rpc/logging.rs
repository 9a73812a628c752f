//! Per-call logging middleware
//!
//! The outermost layer of the served stack, wrapped around the tonic routes.
//! Every call gets a fresh correlation id and a [`CallContext`], and produces
//! exactly one `RPC completed` event with the method, id, latency and
//! resulting gRPC code. A call whose future is dropped before it finishes
//! (client reset, connection closed) is logged as `Cancelled`.

use crate::rpc::context::{parse_grpc_timeout, CallContext, RequestId, GRPC_TIMEOUT_HEADER};
use std::task::{Context, Poll};
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tonic::codegen::http;
use tonic::codegen::BoxFuture;
use tonic::{Code, Status};
use tower::{Layer, Service};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct RequestLoggingLayer {
    cancellation: Option<CancellationToken>,
}

impl RequestLoggingLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls dispatched after `token` is cancelled see a cancelled context
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

impl<S> Layer<S> for RequestLoggingLayer {
    type Service = RequestLogging<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLogging {
            inner,
            cancellation: self.cancellation.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequestLogging<S> {
    inner: S,
    cancellation: Option<CancellationToken>,
}

impl<S, ReqBody, ResBody> Service<http::Request<ReqBody>> for RequestLogging<S>
where
    S: Service<http::Request<ReqBody>, Response = http::Response<ResBody>>
        + Clone
        + Send
        + 'static,
    S::Future: Send + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: http::Request<ReqBody>) -> Self::Future {
        // The clone may not be ready; keep the one that was polled.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let start = Instant::now();
        let rpc = request.uri().path().to_string();
        let req_id = RequestId(Uuid::new_v4().to_string());

        let mut context = CallContext::new();
        if let Some(timeout) = request
            .headers()
            .get(GRPC_TIMEOUT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_grpc_timeout)
        {
            context = context.with_deadline(start + timeout);
        }
        if let Some(token) = &self.cancellation {
            context = context.with_cancellation(token.child_token());
        }

        request.extensions_mut().insert(context);
        request.extensions_mut().insert(req_id.clone());

        let mut completion = Completion {
            rpc,
            req_id,
            start,
            status: Code::Cancelled,
        };

        Box::pin(async move {
            let result = inner.call(request).await;

            completion.status = match &result {
                Ok(response) => response_code(response),
                Err(_) => Code::Unknown,
            };

            result
        })
    }
}

/// Emits the completion event when dropped, so it fires once per call
/// whether the call finished or was abandoned mid-flight.
struct Completion {
    rpc: String,
    req_id: RequestId,
    start: Instant,
    status: Code,
}

impl Drop for Completion {
    fn drop(&mut self) {
        info!(
            rpc = %self.rpc,
            req_id = %self.req_id,
            latency_ms = self.start.elapsed().as_millis() as u64,
            status = ?self.status,
            "RPC completed"
        );
    }
}

/// Errors from unary calls travel as trailers-only responses, so the status
/// sits in the headers. No `grpc-status` header means the call succeeded.
fn response_code<B>(response: &http::Response<B>) -> Code {
    Status::from_header_map(response.headers())
        .map(|status| status.code())
        .unwrap_or(Code::Ok)
}
