//! Environment variable names read by [`Config::from_env`].
//!
//! These are purely helpers; the client itself only ever sees an explicit
//! [`Config`] value.
//!
//! [`Config`]: crate::config::Config
//! [`Config::from_env`]: crate::config::Config::from_env

/// Stackify API key sent in the `X-Stackify-Key` header.
pub const STACKIFY_API_KEY_ENV: &str = "STACKIFY_API_KEY";

/// Environment name, e.g. `dev` or `prod`.
pub const STACKIFY_ENV_ENV: &str = "STACKIFY_ENV";

/// Server name reported with every batch. Defaults to the host name.
pub const STACKIFY_SERVER_ENV: &str = "STACKIFY_SERVER";

/// Name of the application.
pub const STACKIFY_APP_NAME_ENV: &str = "STACKIFY_APP_NAME";

/// Optional full directory path of the application.
pub const STACKIFY_APP_LOCATION_ENV: &str = "STACKIFY_APP_LOCATION";

/// Name and version of the project generating the request.
pub const STACKIFY_LOGGER_ENV: &str = "STACKIFY_LOGGER";

/// Logging language reported to the backend.
pub const STACKIFY_PLATFORM_ENV: &str = "STACKIFY_PLATFORM";

/// Total request timeout in milliseconds.
pub const STACKIFY_TIMEOUT_MS_ENV: &str = "STACKIFY_TIMEOUT_MS";

/// Override of the ingestion URL.
pub const STACKIFY_ENDPOINT_ENV: &str = "STACKIFY_ENDPOINT";

/// Read an environment variable or fall back to a provided default.
/// An empty value counts as unset.
pub fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

/// Read an environment variable, treating unset and empty the same.
pub fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
