// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Local host name detection used for the default server name.

use std::env;
use tracing::warn;

/// Get the local host name.
///
/// Tries, in order:
/// 1. The `HOSTNAME` environment variable (`COMPUTERNAME` on Windows)
/// 2. The system host name via `gethostname(2)` on unix
/// 3. `"unknown"`
#[must_use]
pub fn get_hostname() -> String {
    let var = if cfg!(windows) { "COMPUTERNAME" } else { "HOSTNAME" };
    if let Ok(hostname) = env::var(var) {
        if !hostname.is_empty() {
            return hostname;
        }
    }

    #[cfg(unix)]
    match nix::unistd::gethostname() {
        Ok(hostname) => {
            if let Some(hostname) = hostname.to_str() {
                if !hostname.is_empty() {
                    return hostname.to_string();
                }
            }
        }
        Err(e) => {
            warn!("failed to get system hostname: {}", e);
        }
    }

    warn!("could not determine hostname, using 'unknown'");
    "unknown".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostname_is_never_empty() {
        assert!(!get_hostname().is_empty());
    }
}
