use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of an [`Event`], serialized as `INFO`, `WARN` or `ERROR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "INFO")]
    Info,
    #[serde(rename = "WARN")]
    Warning,
    #[serde(rename = "ERROR")]
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warning => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One log occurrence inside a [`Report`](crate::report::Report).
///
/// Optional fields are left out of the JSON entirely when unset. `SrcLine`
/// and `TransID` of `Some(0)` are still sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "Msg")]
    pub message: String,
    #[serde(rename = "Level")]
    pub level: Level,
    /// Unix time in milliseconds, taken when the event was created.
    #[serde(rename = "EpochMs")]
    pub epoch_ms: i64,

    #[serde(rename = "Th", default, skip_serializing_if = "is_blank")]
    pub thread: Option<String>,
    /// Fully qualified method name.
    #[serde(rename = "SrcMethod", default, skip_serializing_if = "is_blank")]
    pub source_method: Option<String>,
    #[serde(rename = "SrcLine", default, skip_serializing_if = "Option::is_none")]
    pub source_line: Option<i64>,
    #[serde(rename = "TransID", default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<i64>,
    /// Additional JSON metadata. Passed through as-is, the caller escapes it.
    #[serde(rename = "Data", default, skip_serializing_if = "is_blank")]
    pub data: Option<String>,
}

pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

impl Event {
    /// Create an event stamped with the current wall clock time.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            epoch_ms: Utc::now().timestamp_millis(),
            thread: None,
            source_method: None,
            source_line: None,
            transaction_id: None,
            data: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn with_thread(mut self, thread: impl Into<String>) -> Self {
        self.thread = Some(thread.into());
        self
    }

    pub fn with_source_method(mut self, method: impl Into<String>) -> Self {
        self.source_method = Some(method.into());
        self
    }

    pub fn with_source_line(mut self, line: i64) -> Self {
        self.source_line = Some(line);
        self
    }

    pub fn with_transaction_id(mut self, id: i64) -> Self {
        self.transaction_id = Some(id);
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_stamps_current_time() {
        let before = Utc::now().timestamp_millis();
        let first = Event::new(Level::Info, "a");
        let second = Event::new(Level::Info, "b");
        let after = Utc::now().timestamp_millis();

        assert!(before <= first.epoch_ms && first.epoch_ms <= after);
        assert!(first.epoch_ms <= second.epoch_ms);
        assert!(second.epoch_ms <= after);
    }

    #[test]
    fn empty_message_is_kept() {
        let event = Event::warning("");
        assert_eq!(event.message, "");
        assert_eq!(event.level, Level::Warning);
    }

    #[test]
    fn bare_event_omits_optional_fields() {
        let event = Event::error("boom");
        let value = serde_json::to_value(&event).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["Msg"], "boom");
        assert_eq!(object["Level"], "ERROR");
        assert_eq!(object["EpochMs"], event.epoch_ms);
        for key in ["Th", "SrcMethod", "SrcLine", "TransID", "Data"] {
            assert!(!object.contains_key(key), "{key} should be omitted");
        }
    }

    #[test]
    fn zero_line_and_transaction_are_sent() {
        let event = Event::info("x").with_source_line(0).with_transaction_id(0);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["SrcLine"], 0);
        assert_eq!(value["TransID"], 0);
    }

    #[test]
    fn empty_strings_are_omitted() {
        let event = Event::info("x").with_thread("").with_data("");
        let value = serde_json::to_value(&event).unwrap();
        assert!(value.get("Th").is_none());
        assert!(value.get("Data").is_none());
    }

    #[test]
    fn full_event_round_trips() {
        let event = Event::info("checkout done")
            .with_thread("worker-3")
            .with_source_method("shop::cart::checkout")
            .with_source_line(88)
            .with_transaction_id(4242)
            .with_data(r#"{"order":"A-17"}"#);

        let encoded = serde_json::to_value(&event).unwrap();
        assert_eq!(
            encoded,
            json!({
                "Msg": "checkout done",
                "Level": "INFO",
                "EpochMs": event.epoch_ms,
                "Th": "worker-3",
                "SrcMethod": "shop::cart::checkout",
                "SrcLine": 88,
                "TransID": 4242,
                "Data": "{\"order\":\"A-17\"}",
            })
        );

        let decoded: Event = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn level_names() {
        assert_eq!(Level::Warning.to_string(), "WARN");
        assert_eq!(Level::Info.to_string(), "INFO");
        assert_eq!(Level::Error.as_str(), "ERROR");
    }
}
