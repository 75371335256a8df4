use crate::client::{Response, StackifyClient};
use crate::error::SendError;
use crate::report::Report;
use async_trait::async_trait;

/// Destination for [`Report`]s.
///
/// [`StackifyClient`] is the real implementation; applications can hold an
/// `Arc<dyn LogSink>` and swap in [`NoopSink`](crate::noop_sink::NoopSink)
/// or their own implementation in tests.
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Deliver one report.
    ///
    /// **Returns**
    /// - `Ok(Response)` if the backend accepted the report.
    /// - `Err(..)` otherwise. Implementations must not retry; the caller
    ///   decides whether to retry, drop or escalate.
    async fn send(&self, report: &Report) -> Result<Response, SendError>;
}

#[async_trait]
impl LogSink for StackifyClient {
    async fn send(&self, report: &Report) -> Result<Response, SendError> {
        StackifyClient::send(self, report).await
    }
}
