use crate::config::Config;
use crate::record::{is_blank, Event};
use serde::{Deserialize, Serialize};

/// One `Log/Save` submission: application metadata plus the events to record.
///
/// Metadata is copied from [`Config`] when the report is created. Events are
/// sent in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "Env")]
    pub env: String,
    #[serde(rename = "ServerName")]
    pub server_name: String,
    #[serde(rename = "AppName")]
    pub app_name: String,
    #[serde(rename = "AppLoc", default, skip_serializing_if = "is_blank")]
    pub app_location: Option<String>,
    #[serde(rename = "Logger")]
    pub logger: String,
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Msgs")]
    messages: Vec<Event>,
}

impl Report {
    /// An empty report carrying the metadata of `config`.
    pub fn new(config: &Config) -> Self {
        Self::from_events(config, Vec::new())
    }

    pub fn from_events(config: &Config, events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            env: config.env.clone(),
            server_name: config.server_name.clone(),
            app_name: config.app_name.clone(),
            app_location: config.app_location.clone(),
            logger: config.logger.clone(),
            platform: config.platform.clone(),
            messages: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: Event) {
        self.messages.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
