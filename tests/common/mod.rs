//! Common test utilities and helpers

#![allow(dead_code)]

use hyper::body::Incoming;
use hyper_util::rt::{TokioExecutor, TokioIo};
use memo_core::cli;
use memo_core::rpc::generated::memo_service_client::MemoServiceClient;
use memo_core::rpc::RpcServer;
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tonic::body::BoxBody;
use tonic::codegen::http;
use tonic::transport::Channel;
use tower::util::BoxCloneService;

/// Plain HTTP/2 transport with no client-side deadline enforcement
pub type DirectTransport =
    BoxCloneService<http::Request<BoxBody>, http::Response<Incoming>, hyper::Error>;

/// A memo server running on an ephemeral local port
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            RpcServer::in_memory()
                .serve_with_listener(listener, async move {
                    let _ = rx.await;
                })
                .await
        });

        Self {
            addr,
            shutdown: Some(tx),
            handle,
        }
    }

    pub async fn client(&self) -> MemoServiceClient<Channel> {
        cli::connect(&self.addr.to_string())
            .await
            .expect("Failed to connect to test server")
    }

    /// Client whose calls reach the server with their `grpc-timeout` intact
    ///
    /// A tonic `Channel` enforces the timeout locally as well, so an already
    /// expired call is abandoned before the server can answer it.
    pub async fn direct_client(&self) -> MemoServiceClient<DirectTransport> {
        let stream = TcpStream::connect(self.addr)
            .await
            .expect("Failed to connect to test server");
        let (sender, connection) =
            hyper::client::conn::http2::handshake::<_, _, BoxBody>(
                TokioExecutor::new(),
                TokioIo::new(stream),
            )
            .await
                .expect("HTTP/2 handshake failed");
        tokio::spawn(connection);

        let transport = tower::service_fn(move |request: http::Request<BoxBody>| {
            let mut sender = sender.clone();
            async move { sender.send_request(request).await }
        });
        let origin = format!("http://{}", self.addr)
            .parse()
            .expect("Invalid origin");

        MemoServiceClient::with_origin(BoxCloneService::new(transport), origin)
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle
            .await
            .expect("Server task panicked")
            .expect("Server returned an error");
    }
}
