//! Environment driven configuration for the API server

use std::{env, path::PathBuf, time::Duration};

use log::error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8000";
pub const DEFAULT_GATEWAY_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_FIXTURE_PATH: &str = "fixtures/gateway.json";

/// Server settings
///
/// | Variable | Default |
/// |---|---|
/// | `TRADFRI_PORT` | `8080` |
/// | `TRADFRI_CORS_ORIGIN` | `http://localhost:8000` |
/// | `TRADFRI_GATEWAY_TIMEOUT_MS` | `5000` |
/// | `TRADFRI_FIXTURE_PATH` | `fixtures/gateway.json` |
///
/// Invalid values are logged and replaced by their default.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub gateway_timeout: Duration,
    pub fixture_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            gateway_timeout: Duration::from_millis(DEFAULT_GATEWAY_TIMEOUT_MS),
            fixture_path: PathBuf::from(DEFAULT_FIXTURE_PATH),
        }
    }
}

impl Config {
    /// Read the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup, used by [Self::from_env]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        Config {
            port: parse_or("TRADFRI_PORT", lookup("TRADFRI_PORT"), defaults.port),
            cors_origin: lookup("TRADFRI_CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            gateway_timeout: Duration::from_millis(parse_or(
                "TRADFRI_GATEWAY_TIMEOUT_MS",
                lookup("TRADFRI_GATEWAY_TIMEOUT_MS"),
                DEFAULT_GATEWAY_TIMEOUT_MS,
            )),
            fixture_path: lookup("TRADFRI_FIXTURE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.fixture_path),
        }
    }
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Debug,
{
    match value {
        Some(raw) => match raw.parse() {
            Ok(v) => v,
            Err(e) => {
                error!("Invalid {key}: {raw}: {:?}", e);
                default
            }
        },
        None => default,
    }
}
