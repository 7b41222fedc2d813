//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `LIBRARY_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence. The database URL
//! additionally falls back to the conventional `DATABASE_URL`.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::DEFAULT_POOL_SIZE;

/// Listen address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Fallback variable consulted when `LIBRARY_DATABASE_URL` is unset.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Environment lookups used for fallback settings.
pub trait SettingsEnv {
    /// Fetch a string value by name.
    fn string(&self, name: &str) -> Option<String>;
}

/// Environment access backed by the real process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl SettingsEnv for ProcessEnv {
    fn string(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Errors raised while resolving settings into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddr { value: String, message: String },
    #[error("no database URL configured; set LIBRARY_DATABASE_URL or {DATABASE_URL_ENV}")]
    MissingDatabaseUrl,
}

/// Configuration for the library HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LIBRARY")]
pub struct LibrarySettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub pool_size: Option<u32>,
    /// Serve without applying embedded migrations first.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl LibrarySettings {
    /// Parse the configured bind address, defaulting to [`DEFAULT_BIND_ADDR`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value is not a
    /// socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                message: err.to_string(),
            })
    }

    /// Resolve the database URL, consulting [`DATABASE_URL_ENV`] when the
    /// setting is absent.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingDatabaseUrl`] when neither source is
    /// set or both are blank.
    pub fn database_url<E: SettingsEnv>(&self, env: &E) -> Result<String, SettingsError> {
        let is_set = |url: &String| !url.trim().is_empty();
        self.database_url
            .clone()
            .filter(is_set)
            .or_else(|| env.string(DATABASE_URL_ENV).filter(is_set))
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    /// Configured pool size, defaulting to [`DEFAULT_POOL_SIZE`].
    pub fn pool_size(&self) -> u32 {
        self.pool_size.unwrap_or(DEFAULT_POOL_SIZE)
    }
}
