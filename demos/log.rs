use std::process;
use tracing::{error, info};

use stackify_log_sink::{Config, Event, Report, StackifyClient};

/// Sends a single INFO event using `STACKIFY_*` environment settings.
///
/// Exits with status 1 if the report could not be delivered.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    };

    let client = match StackifyClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    };

    let report = Report::from_events(&config, [Event::info("test")]);

    match client.send(&report).await {
        Ok(response) => info!("Response: {:?}", response),
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    }
}
