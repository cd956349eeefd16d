//! Process settings loaded via OrthoConfig.
//!
//! Layers, lowest precedence first: defaults, configuration file, `FINAPP_*`
//! environment variables, command-line flags.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_TIMEOUT_SECS: u64 = 30;

/// Settings controlling storage and the HTTP listener.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FINAPP")]
pub struct AppSettings {
    /// PostgreSQL connection string. Without it the in-memory store is used.
    pub database_url: Option<String>,
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Seconds a request waits for a pooled connection.
    pub pool_timeout_secs: Option<u64>,
    /// Skip applying pending migrations at startup.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl AppSettings {
    /// Connection string, ignoring blank values.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Interface to bind, falling back to all interfaces.
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Port to bind, falling back to 8080.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Pool size, falling back to 10 connections.
    #[must_use]
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Pool checkout timeout, falling back to 30 seconds.
    #[must_use]
    pub fn pool_timeout(&self) -> Duration {
        Duration::from_secs(self.pool_timeout_secs.unwrap_or(DEFAULT_POOL_TIMEOUT_SECS))
    }

    /// Resolve the listener address.
    ///
    /// # Errors
    /// Returns an [`io::Error`] when the host does not resolve.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.host(), self.port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("host {} did not resolve", self.host()),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "FINAPP_DATABASE_URL",
        "FINAPP_HOST",
        "FINAPP_PORT",
        "FINAPP_POOL_MAX_SIZE",
        "FINAPP_POOL_TIMEOUT_SECS",
        "FINAPP_SKIP_MIGRATIONS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("finapp")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert!(settings.database_url().is_none());
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(settings.pool_max_size(), DEFAULT_POOL_MAX_SIZE);
        assert_eq!(
            settings.pool_timeout(),
            Duration::from_secs(DEFAULT_POOL_TIMEOUT_SECS)
        );
        assert!(!settings.skip_migrations);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "FINAPP_DATABASE_URL",
                Some("postgres://finapp@localhost/finapp".to_owned()),
            ),
            ("FINAPP_HOST", Some("127.0.0.1".to_owned())),
            ("FINAPP_PORT", Some("9090".to_owned())),
            ("FINAPP_POOL_MAX_SIZE", Some("4".to_owned())),
            ("FINAPP_POOL_TIMEOUT_SECS", Some("3".to_owned())),
            ("FINAPP_SKIP_MIGRATIONS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.database_url(),
            Some("postgres://finapp@localhost/finapp")
        );
        assert_eq!(settings.pool_max_size(), 4);
        assert_eq!(settings.pool_timeout(), Duration::from_secs(3));
        assert!(settings.skip_migrations);
        assert_eq!(
            settings.bind_addr().expect("address resolves"),
            SocketAddr::from(([127, 0, 0, 1], 9090))
        );
    }

    #[rstest]
    fn blank_database_url_selects_memory_store() {
        let _guard = lock_env([("FINAPP_DATABASE_URL", Some("   ".to_owned()))]);

        assert!(load_from_empty_args().database_url().is_none());
    }
}
