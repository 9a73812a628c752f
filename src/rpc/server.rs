//! gRPC server setup

use crate::rpc::generated::memo_service_server::MemoServiceServer;
use crate::rpc::logging::RequestLoggingLayer;
use crate::rpc::services::MemoHandler;
use crate::services::MemoService;
use crate::storage::{InMemoryMemoRepository, MemoRepository};
use anyhow::{Context, Result};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tonic::service::Routes;
use tracing::{info, warn};

pub struct RpcServer {
    memo_service: MemoHandler,
    shutdown: CancellationToken,
}

impl RpcServer {
    /// Wire repository, service and handler together
    pub fn new(repo: Arc<dyn MemoRepository>) -> Self {
        let service = Arc::new(MemoService::new(repo));
        Self {
            memo_service: MemoHandler::new(service),
            shutdown: CancellationToken::new(),
        }
    }

    /// Server backed by a fresh in-memory repository
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryMemoRepository::new()))
    }

    /// Bind `addr` and serve until ctrl-c
    pub async fn serve(self, addr: SocketAddr) -> Result<()> {
        self.serve_with_shutdown(addr, ctrl_c()).await
    }

    pub async fn serve_with_shutdown<F>(self, addr: SocketAddr, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to listen on {addr}"))?;

        info!(addr = %listener.local_addr()?, "server started");

        self.serve_with_listener(listener, signal).await
    }

    /// Serve on an already-bound listener until `signal` resolves
    ///
    /// Once shutdown begins, calls that reach a handler see a cancelled
    /// context and fail fast while in-flight calls are drained.
    pub async fn serve_with_listener<F>(self, listener: TcpListener, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let shutdown = self.shutdown.clone();
        let app = self.into_router().await;

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                signal.await;
                info!("shutting down");
                shutdown.cancel();
            })
            .await
            .context("gRPC server failed")?;

        Ok(())
    }

    /// The complete call stack as served
    ///
    /// The logging layer sits outside the tonic routes, so it sees every call
    /// and the handlers alone decide how an expired deadline is reported.
    pub async fn into_router(self) -> axum::Router {
        let routes = Routes::new(MemoServiceServer::new(self.memo_service));

        #[cfg(feature = "health")]
        let routes = {
            let (mut reporter, health) = tonic_health::server::health_reporter();
            reporter
                .set_serving::<MemoServiceServer<MemoHandler>>()
                .await;
            routes.add_service(health)
        };

        routes
            .into_axum_router()
            .layer(RequestLoggingLayer::new().with_cancellation(self.shutdown))
    }
}

impl Default for RpcServer {
    fn default() -> Self {
        Self::in_memory()
    }
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c, running until killed: {}", e);
        std::future::pending::<()>().await;
    }
}
