use crate::client::Response;
use reqwest::StatusCode;

/// Error type returned by [`StackifyClient::send`] and friends.
///
/// Every failure is handed back to the caller; nothing is retried.
///
/// [`StackifyClient::send`]: crate::client::StackifyClient::send
#[derive(thiserror::Error, Debug)]
pub enum SendError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to build request: {0}")]
    Request(String),

    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("bad response {0}")]
    Status(StatusCode),

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// HTTP 200 but the backend reported `success: false`. The decoded
    /// response is kept so callers can still read `took`.
    #[error("report rejected by Stackify (took {}ms)", .0.response_time)]
    Rejected(Response),

    #[error("request cancelled")]
    Cancelled,
}

impl SendError {
    /// The decoded response, present only for [`SendError::Rejected`].
    pub fn response(&self) -> Option<&Response> {
        match self {
            SendError::Rejected(response) => Some(response),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, SendError::Timeout)
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SendError::Timeout
        } else {
            SendError::Transport(err)
        }
    }
}

/// Error type returned when reading [`Config`] from the environment.
///
/// [`Config`]: crate::config::Config
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid timeout {value:?}: {source}")]
    InvalidTimeout {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_exposes_response() {
        let err = SendError::Rejected(Response { result: false, response_time: 5 });
        let response = err.response().unwrap();
        assert!(!response.result);
        assert_eq!(response.response_time, 5);
        assert!(err.to_string().contains("5ms"));
    }

    #[test]
    fn status_mentions_code() {
        let err = SendError::Status(StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.response().is_none());
        assert!(err.to_string().contains("503"));
    }
}
