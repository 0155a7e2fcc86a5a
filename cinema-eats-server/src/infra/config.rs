//! Server configuration from the environment.
//!
//! A `.env` file is loaded first when present; real environment variables
//! win over it. Command-line flags are applied on top by the binary.

use std::{fmt, path::Path, time::Duration};

use thiserror::Error;
use tracing::debug;
use url::Url;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LIST_ID: u64 = 20;
pub const DEFAULT_BREVO_API_URL: &str = "https://api.brevo.com";
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("BREVO_API_KEY must be set")]
    MissingApiKey,
    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("failed to read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct BrevoConfig {
    pub api_key: String,
    pub list_id: u64,
    pub api_url: Url,
    pub timeout: Duration,
}

impl fmt::Debug for BrevoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrevoConfig")
            .field("api_key", &"<redacted>")
            .field("list_id", &self.list_id)
            .field("api_url", &self.api_url.as_str())
            .field(
                "timeout",
                &humantime::format_duration(self.timeout).to_string(),
            )
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server: ServerConfig,
    pub brevo: BrevoConfig,
}

impl Config {
    /// Load the env file and read the process environment.
    ///
    /// Returns whether an env file was loaded alongside the config.
    pub fn load(env_file: Option<&Path>) -> Result<(Self, bool), ConfigError> {
        let env_file_loaded = load_env_file(env_file)?;
        let config = Self::from_lookup(|var| std::env::var(var).ok())?;
        Ok((config, env_file_loaded))
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var).filter(|value| !value.trim().is_empty())
        };

        let server = ServerConfig {
            host: get("SERVER_HOST")
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_var(&get, "SERVER_PORT", DEFAULT_PORT, |value| {
                value.parse::<u16>().map_err(|err| format!("{err}"))
            })?,
        };

        let api_key =
            get("BREVO_API_KEY").ok_or(ConfigError::MissingApiKey)?;
        let api_url = get("BREVO_API_URL")
            .unwrap_or_else(|| DEFAULT_BREVO_API_URL.to_string());
        let brevo = BrevoConfig {
            api_key,
            list_id: parse_var(
                &get,
                "BREVO_LIST_ID",
                DEFAULT_LIST_ID,
                |value| value.parse::<u64>().map_err(|err| format!("{err}")),
            )?,
            api_url: parse_url("BREVO_API_URL", api_url)?,
            timeout: parse_var(
                &get,
                "UPSTREAM_TIMEOUT",
                DEFAULT_UPSTREAM_TIMEOUT,
                |value| {
                    humantime::parse_duration(value)
                        .map_err(|err| format!("{err}"))
                },
            )?,
        };

        debug!(?server, ?brevo, "Configuration resolved");
        Ok(Self { server, brevo })
    }
}

/// An explicit env file must load; the implicit `./.env` is optional.
fn load_env_file(env_file: Option<&Path>) -> Result<bool, ConfigError> {
    match env_file {
        Some(path) => {
            dotenvy::from_path(path)?;
            Ok(true)
        }
        None => match dotenvy::dotenv() {
            Ok(_) => Ok(true),
            Err(dotenvy::Error::Io(_)) => Ok(false),
            Err(err) => Err(err.into()),
        },
    }
}

fn parse_var<T, G, P>(
    get: &G,
    var: &'static str,
    default: T,
    parse: P,
) -> Result<T, ConfigError>
where
    G: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Result<T, String>,
{
    match get(var) {
        Some(value) => {
            parse(value.trim()).map_err(|reason| ConfigError::Invalid {
                var,
                value,
                reason,
            })
        }
        None => Ok(default),
    }
}

fn parse_url(var: &'static str, value: String) -> Result<Url, ConfigError> {
    Url::parse(&value).map_err(|err| ConfigError::Invalid {
        var,
        value,
        reason: err.to_string(),
    })
}
