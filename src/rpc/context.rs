//! Per-call context carried from the transport into the handlers
//!
//! [`RequestLoggingLayer`](crate::rpc::RequestLoggingLayer) stores a
//! [`CallContext`] and a [`RequestId`] in the request extensions before tonic
//! dispatches the call. Handlers only ever look at the context once, on entry:
//! a call that is already cancelled or past its deadline is rejected, anything
//! later is not interrupted.

use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tonic::{Request, Status};

/// Header carrying the client's deadline, as defined by the gRPC HTTP/2 protocol
pub const GRPC_TIMEOUT_HEADER: &str = "grpc-timeout";

/// Correlation id minted for every inbound call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cancellation and deadline signals for a single call
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    deadline: Option<Instant>,
    cancellation: Option<CancellationToken>,
}

impl CallContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Deadline relative to now
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    pub fn is_done(&self) -> bool {
        self.is_cancelled() || self.is_expired()
    }

    /// Fail fast if the call is already over
    pub fn ensure_live(&self) -> Result<(), Status> {
        if self.is_done() {
            return Err(Status::deadline_exceeded("request deadline exceeded"));
        }
        Ok(())
    }

    /// Context attached by the logging layer, or one rebuilt from metadata
    ///
    /// Without the layer the arrival time is unknown, so the `grpc-timeout`
    /// header is measured from now.
    pub fn from_request<T>(request: &Request<T>) -> Self {
        if let Some(context) = request.extensions().get::<CallContext>() {
            return context.clone();
        }

        request
            .metadata()
            .get(GRPC_TIMEOUT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_grpc_timeout)
            .map(|timeout| CallContext::new().with_timeout(timeout))
            .unwrap_or_default()
    }
}

/// Parse a `grpc-timeout` value: at most 8 ASCII digits and a unit
/// (`H`, `M`, `S`, `m`, `u`, `n`)
pub fn parse_grpc_timeout(value: &str) -> Option<Duration> {
    if value.len() < 2 || !value.is_ascii() {
        return None;
    }

    let (digits, unit) = value.split_at(value.len() - 1);
    if digits.len() > 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let amount: u64 = digits.parse().ok()?;

    let timeout = match unit {
        "H" => Duration::from_secs(amount * 60 * 60),
        "M" => Duration::from_secs(amount * 60),
        "S" => Duration::from_secs(amount),
        "m" => Duration::from_millis(amount),
        "u" => Duration::from_micros(amount),
        "n" => Duration::from_nanos(amount),
        _ => return None,
    };
    Some(timeout)
}
