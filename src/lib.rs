pub mod config;
pub mod env;
pub mod error;
pub mod record;
pub mod report;
pub mod client;
pub mod sink;
pub mod noop_sink;

mod hostname;

pub use client::{Response, StackifyClient};
pub use config::Config;
pub use error::{ConfigError, SendError};
pub use record::{Event, Level};
pub use report::Report;
