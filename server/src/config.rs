//! Server configuration parsed from environment variables.
//!
//! Required:
//! - `DATABASE_URL`
//!
//! Optional:
//! - `PORT`: default 3000
//! - `DB_MAX_CONNECTIONS`: default 5
//! - `SITE_DIR`: static assets, default `<manifest>/../site`
//! - `RESEND_API_KEY`, `RESEND_FROM`, `CONTACT_INBOX`: all three enable the
//!   contact notification email
//! - `CONTACT_RATE_LIMIT`: default 5 submissions per window
//! - `CONTACT_RATE_WINDOW_SECS`: default 600

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_CONTACT_RATE_LIMIT: usize = 5;
pub const DEFAULT_CONTACT_RATE_WINDOW_SECS: u64 = 600;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Sender and recipient for contact notification emails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub api_key: String,
    pub from: String,
    pub inbox: String,
}

/// Sliding-window settings for the contact endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub limit: usize,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_CONTACT_RATE_LIMIT,
            window: Duration::from_secs(DEFAULT_CONTACT_RATE_WINDOW_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub site_dir: PathBuf,
    /// `None` when any of the Resend variables is unset.
    pub email: Option<EmailConfig>,
    pub contact_rate: RateLimitConfig,
}

impl ServerConfig {
    /// Build typed server config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a numeric variable
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = non_empty(&lookup, "DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        let site_dir = non_empty(&lookup, "SITE_DIR")
            .map_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../site"), PathBuf::from);

        let email = match (
            non_empty(&lookup, "RESEND_API_KEY"),
            non_empty(&lookup, "RESEND_FROM"),
            non_empty(&lookup, "CONTACT_INBOX"),
        ) {
            (Some(api_key), Some(from), Some(inbox)) => Some(EmailConfig { api_key, from, inbox }),
            _ => None,
        };

        let limit = parse_or(&lookup, "CONTACT_RATE_LIMIT", DEFAULT_CONTACT_RATE_LIMIT)?;
        let window_secs = parse_or(&lookup, "CONTACT_RATE_WINDOW_SECS", DEFAULT_CONTACT_RATE_WINDOW_SECS)?;
        if limit == 0 {
            return Err(ConfigError::Invalid { var: "CONTACT_RATE_LIMIT", value: "0".into() });
        }

        Ok(Self {
            database_url,
            port,
            db_max_connections,
            site_dir,
            email,
            contact_rate: RateLimitConfig { limit, window: Duration::from_secs(window_secs) },
        })
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match non_empty(lookup, key) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var: key, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
