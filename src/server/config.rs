use std::{net::SocketAddr, time::Duration};
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DIRECTORY_TIMEOUT_MS: u64 = 3000;
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Base URL of the auth service's user directory, always ending in `/`.
    pub directory_url: Url,
    pub directory_timeout: Duration,

    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let database_url = required("DATABASE_URL")?;

        let raw_directory_url = required("DIRECTORY_URL")?;
        let directory_url = parse_base_url(&raw_directory_url).map_err(|reason| {
            ConfigError::InvalidEnvVar {
                name: "DIRECTORY_URL".to_string(),
                value: raw_directory_url.clone(),
                reason,
            }
        })?;

        let directory_timeout = match lookup("DIRECTORY_TIMEOUT_MS") {
            Some(value) => {
                let millis = value
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|ms| *ms > 0)
                    .ok_or_else(|| ConfigError::InvalidEnvVar {
                        name: "DIRECTORY_TIMEOUT_MS".to_string(),
                        value: value.clone(),
                        reason: "expected a positive number of milliseconds".to_string(),
                    })?;
                Duration::from_millis(millis)
            }
            None => Duration::from_millis(DEFAULT_DIRECTORY_TIMEOUT_MS),
        };

        let raw_listen_addr =
            lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_listen_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "LISTEN_ADDR".to_string(),
                value: raw_listen_addr.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url,
            directory_url,
            directory_timeout,
            listen_addr,
        })
    }
}

/// Parses a base URL and appends the trailing `/` needed for relative joins
fn parse_base_url(value: &str) -> Result<Url, String> {
    let mut url = Url::parse(value.trim()).map_err(|e| e.to_string())?;

    if url.cannot_be_a_base() {
        return Err("URL cannot be used as a base".to_string());
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
