use crate::client::Response;
use crate::error::SendError;
use crate::report::Report;
use crate::sink::LogSink;
use async_trait::async_trait;

/// A sink that accepts every report without doing any I/O.
///
/// Useful for unit tests and for running an application without a Stackify
/// API key.
#[derive(Clone, Default)]
pub struct NoopSink;

#[async_trait]
impl LogSink for NoopSink {
    async fn send(&self, _report: &Report) -> Result<Response, SendError> {
        Ok(Response {
            result: true,
            response_time: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::record::Event;
    use std::sync::Arc;

    #[tokio::test]
    async fn accepts_everything_through_trait_object() {
        let sink: Arc<dyn LogSink> = Arc::new(NoopSink);
        let report = Report::from_events(&Config::new("k"), [Event::error("boom")]);

        let response = sink.send(&report).await.unwrap();
        assert!(response.result);
        assert_eq!(response.response_time, 0);
    }
}
