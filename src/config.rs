// src/config.rs
use std::env;
use thiserror::Error;

/// Offsets beyond this are not real time zones.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    media_url: String,
    display_offset_minutes: i32,
    db_max_connections: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://blogcore.db".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_media_url() -> String {
    "/media/".into()
}

/// Asia/Tehran, UTC+03:30.
fn default_display_offset_minutes() -> i32 {
    210
}

fn default_db_max_connections() -> u32 {
    8
}

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env` file
    /// first when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same rules as [`AppConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = read("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = read("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let media_url = read("MEDIA_URL").unwrap_or_else(default_media_url);

        let display_offset_minutes = match read("DISPLAY_UTC_OFFSET_MINUTES") {
            Some(raw) => raw.parse::<i32>().map_err(|_| {
                ConfigError::Invalid(format!(
                    "DISPLAY_UTC_OFFSET_MINUTES must be an integer, got `{raw}`"
                ))
            })?,
            None => default_display_offset_minutes(),
        };
        if display_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ConfigError::Invalid(format!(
                "DISPLAY_UTC_OFFSET_MINUTES must be within ±{MAX_OFFSET_MINUTES}"
            )));
        }

        let db_max_connections = match read("DB_MAX_CONNECTIONS") {
            Some(raw) => raw.parse::<u32>().ok().filter(|n| *n >= 1).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "DB_MAX_CONNECTIONS must be a positive integer, got `{raw}`"
                ))
            })?,
            None => default_db_max_connections(),
        };

        Ok(Self {
            database_url,
            listen_addr,
            media_url,
            display_offset_minutes,
            db_max_connections,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Base URL thumbnails are served under.
    pub fn media_url(&self) -> &str {
        &self.media_url
    }

    pub fn display_offset_minutes(&self) -> i32 {
        self.display_offset_minutes
    }

    pub fn display_offset_seconds(&self) -> i32 {
        self.display_offset_minutes * 60
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }
}
