//! Runtime configuration read from the environment.
//!
//! | Variable | Default | |
//! |----------|---------|---|
//! | `TWILIO_ACCOUNT_SID` | required | SMS provider account |
//! | `TWILIO_AUTH_TOKEN` | required | SMS provider secret, never logged |
//! | `BIND_ADDR` | `0.0.0.0` | listen address |
//! | `PORT` | `5000` | listen port |
//! | `MENU_FILE` | built-in menu | YAML menu, see [`MenuCatalog::from_yaml_str`](crate::domain::MenuCatalog::from_yaml_str) |
//! | `ACTOR_BUFFER` | `32` | actor channel capacity |
//!
//! A `.env` file is loaded by the binary before [`Config::from_env`] runs.

use crate::lifecycle::DEFAULT_BUFFER;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing SMS provider credentials: set {0}")]
    MissingCredentials(&'static str),

    #[error("Invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// SMS provider account credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct TwilioCredentials {
    pub account_sid: String,
    pub auth_token: String,
}

impl fmt::Debug for TwilioCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioCredentials")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub twilio: TwilioCredentials,
    pub menu_file: Option<PathBuf>,
    pub actor_buffer: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let twilio = TwilioCredentials {
            account_sid: var("TWILIO_ACCOUNT_SID")
                .ok_or(ConfigError::MissingCredentials("TWILIO_ACCOUNT_SID"))?,
            auth_token: var("TWILIO_AUTH_TOKEN")
                .ok_or(ConfigError::MissingCredentials("TWILIO_AUTH_TOKEN"))?,
        };

        let ip = match var("BIND_ADDR") {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::Invalid { name: "BIND_ADDR", value })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = parse_or("PORT", var("PORT"), DEFAULT_PORT)?;
        let actor_buffer = parse_or("ACTOR_BUFFER", var("ACTOR_BUFFER"), DEFAULT_BUFFER)?;
        if actor_buffer == 0 {
            return Err(ConfigError::Invalid {
                name: "ACTOR_BUFFER",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            bind_addr: SocketAddr::new(ip, port),
            twilio,
            menu_file: var("MENU_FILE").map(PathBuf::from),
            actor_buffer,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
