use crate::env::{
    env_opt, env_or, STACKIFY_API_KEY_ENV, STACKIFY_APP_LOCATION_ENV, STACKIFY_APP_NAME_ENV,
    STACKIFY_ENDPOINT_ENV, STACKIFY_ENV_ENV, STACKIFY_LOGGER_ENV, STACKIFY_PLATFORM_ENV,
    STACKIFY_SERVER_ENV, STACKIFY_TIMEOUT_MS_ENV,
};
use crate::error::ConfigError;
use crate::hostname::get_hostname;
use std::time::Duration;

/// Stackify `Log/Save` ingestion endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.stackify.com/Log/Save";
pub const DEFAULT_ENV: &str = "dev";
pub const DEFAULT_LOGGER: &str = "stackify-client";
pub const DEFAULT_PLATFORM: &str = "rust";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration shared by [`StackifyClient`] and [`Report`].
///
/// Build it once at startup and pass it by reference; nothing in this crate
/// keeps a global copy, so several independently configured clients can live
/// side by side.
///
/// **Fields**
/// - `api_key`: sent as `X-Stackify-Key`. The backend rejects empty keys.
/// - `env`: environment name, `"dev"` by default.
/// - `server_name`: defaults to the local host name.
/// - `app_name`: name of the application.
/// - `app_location`: optional full directory path of the application.
/// - `logger`: name and version of the project generating the request.
/// - `platform`: logging language.
/// - `timeout`: total deadline for one request, connect through body read.
/// - `endpoint`: ingestion URL, only overridden for test servers or proxies.
///
/// [`StackifyClient`]: crate::client::StackifyClient
/// [`Report`]: crate::report::Report
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub env: String,
    pub server_name: String,
    pub app_name: String,
    pub app_location: Option<String>,
    pub logger: String,
    pub platform: String,
    pub timeout: Duration,
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            env: DEFAULT_ENV.to_string(),
            server_name: get_hostname(),
            app_name: String::new(),
            app_location: None,
            logger: DEFAULT_LOGGER.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
            timeout: DEFAULT_TIMEOUT,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Defaults plus the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Load configuration from the `STACKIFY_*` environment variables
    /// listed in [`crate::env`]. Unset or empty variables keep their
    /// defaults.
    ///
    /// **Returns**
    /// - `Err(ConfigError::InvalidTimeout)` if `STACKIFY_TIMEOUT_MS` is set
    ///   but is not a whole number of milliseconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout = match env_opt(STACKIFY_TIMEOUT_MS_ENV) {
            Some(value) => {
                let ms = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidTimeout { value, source })?;
                Duration::from_millis(ms)
            }
            None => DEFAULT_TIMEOUT,
        };

        let server_name = env_opt(STACKIFY_SERVER_ENV).unwrap_or_else(get_hostname);

        Ok(Self {
            api_key: env_or(STACKIFY_API_KEY_ENV, ""),
            env: env_or(STACKIFY_ENV_ENV, DEFAULT_ENV),
            server_name,
            app_name: env_or(STACKIFY_APP_NAME_ENV, ""),
            app_location: env_opt(STACKIFY_APP_LOCATION_ENV),
            logger: env_or(STACKIFY_LOGGER_ENV, DEFAULT_LOGGER),
            platform: env_or(STACKIFY_PLATFORM_ENV, DEFAULT_PLATFORM),
            timeout,
            endpoint: env_or(STACKIFY_ENDPOINT_ENV, DEFAULT_ENDPOINT),
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = env.into();
        self
    }

    pub fn with_server_name(mut self, server_name: impl Into<String>) -> Self {
        self.server_name = server_name.into();
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn with_app_location(mut self, app_location: impl Into<String>) -> Self {
        self.app_location = Some(app_location.into());
        self
    }

    pub fn with_logger(mut self, logger: impl Into<String>) -> Self {
        self.logger = logger.into();
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}
