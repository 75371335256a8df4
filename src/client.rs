//! HTTP client for the Stackify `Log/Save` endpoint.
//!
//! One call to [`StackifyClient::send`] is exactly one POST. Nothing is
//! buffered, batched or retried; every failure goes back to the caller.

use crate::config::Config;
use crate::error::SendError;
use crate::record::Event;
use crate::report::Report;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Protocol version sent in [`PROTOCOL_VERSION_HEADER`].
pub const PROTOCOL_VERSION: &str = "V1";
pub const PROTOCOL_VERSION_HEADER: &str = "x-stackify-pv";
pub const API_KEY_HEADER: &str = "x-stackify-key";

/// Acknowledgment returned by `Log/Save`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// `true` if the backend accepted the report.
    #[serde(rename = "success")]
    pub result: bool,
    /// Server-side processing time in milliseconds.
    #[serde(rename = "took")]
    pub response_time: i64,
}

/// Client that owns the API key and a configured [`reqwest::Client`].
///
/// Cloning is cheap and clones share the connection pool, so one instance
/// can be handed to many tasks.
#[derive(Clone, Debug)]
pub struct StackifyClient {
    client: Client,
    api_key: String,
    endpoint: String,
    config: Config,
}

impl StackifyClient {
    /// Construct a client from `config`.
    ///
    /// `config.timeout` becomes the total request deadline (connect, send
    /// and receive together).
    ///
    /// **Returns**
    /// - `Err(SendError::Build)` if the TLS backend could not be initialized.
    pub fn new(config: &Config) -> Result<Self, SendError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(SendError::Build)?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
            config: config.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn headers(&self) -> Result<HeaderMap, SendError> {
        let api_key = HeaderValue::from_str(&self.api_key)
            .map_err(|e| SendError::Request(format!("invalid {API_KEY_HEADER} value: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(PROTOCOL_VERSION_HEADER),
            HeaderValue::from_static(PROTOCOL_VERSION),
        );
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
        Ok(headers)
    }

    /// POST `report` to the ingestion endpoint and validate the answer.
    ///
    /// **Returns**
    /// - `Ok(Response)` on HTTP 200 with `success: true`.
    /// - `Err(SendError::Rejected(response))` on HTTP 200 with
    ///   `success: false`; the decoded response rides along in the error.
    /// - `Err(SendError::Status(..))` for any status other than 200.
    /// - `Err(SendError::Timeout)` if the configured deadline elapsed.
    /// - `Err(..)` for serialization, request, transport or decode failures.
    pub async fn send(&self, report: &Report) -> Result<Response, SendError> {
        let body = serde_json::to_vec(report).map_err(SendError::Serialize)?;
        let headers = self.headers()?;

        debug!(
            endpoint = %self.endpoint,
            event_count = report.len(),
            "sending report"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(SendError::from_reqwest)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = %status, "Log/Save request failed");
            return Err(SendError::Status(status));
        }

        let bytes = response.bytes().await.map_err(SendError::from_reqwest)?;
        let result: Response = serde_json::from_slice(&bytes).map_err(SendError::Decode)?;

        if !result.result {
            warn!(took = result.response_time, "report rejected");
            return Err(SendError::Rejected(result));
        }

        debug!(took = result.response_time, "report accepted");
        Ok(result)
    }

    /// Wrap `events` in a [`Report`] built from this client's config and
    /// send it.
    pub async fn send_events(
        &self,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Response, SendError> {
        let report = Report::from_events(&self.config, events);
        self.send(&report).await
    }

    /// Like [`send`](Self::send), but aborts the in-flight request as soon as
    /// `cancel` fires.
    pub async fn send_with_cancel(
        &self,
        report: &Report,
        cancel: &CancellationToken,
    ) -> Result<Response, SendError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("report send cancelled");
                Err(SendError::Cancelled)
            }
            result = self.send(report) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_config() {
        let config = Config::new("abc").with_endpoint("http://127.0.0.1:9/Log/Save");
        let client = StackifyClient::new(&config).unwrap();

        assert_eq!(client.endpoint(), "http://127.0.0.1:9/Log/Save");
        assert_eq!(client.config(), &config);
    }

    #[test]
    fn headers_carry_key_and_version() {
        let client = StackifyClient::new(&Config::new("abc")).unwrap();
        let headers = client.headers().unwrap();

        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[PROTOCOL_VERSION_HEADER], "V1");
        assert_eq!(headers[API_KEY_HEADER], "abc");
    }

    #[tokio::test]
    async fn invalid_api_key_fails_before_network() {
        let config = Config::new("bad\nkey").with_endpoint("http://127.0.0.1:9/Log/Save");
        let client = StackifyClient::new(&config).unwrap();

        let err = client.send(&Report::new(&config)).await.unwrap_err();
        assert!(matches!(err, SendError::Request(_)));
    }

    #[test]
    fn response_wire_names() {
        let response: Response = serde_json::from_str(r#"{"success":true,"took":12}"#).unwrap();
        assert_eq!(response, Response { result: true, response_time: 12 });
    }
}
