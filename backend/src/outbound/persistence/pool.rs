//! bb8-backed pool of `diesel-async` PostgreSQL connections.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use tracing::debug;

/// Pooled connection handed to repository adapters.
pub type PgConn<'a> = PooledConnection<'a, AsyncPgConnection>;

/// Pool construction or checkout failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection was handed out before the checkout timeout.
    #[error("failed to get connection from pool: {message}")]
    Checkout {
        /// bb8 detail.
        message: String,
    },
    /// The pool refused to start.
    #[error("failed to build connection pool: {message}")]
    Build {
        /// bb8 or driver detail.
        message: String,
    },
}

impl PoolError {
    /// Wrap a checkout failure.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Wrap a build failure.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Connection string plus the sizing knobs exposed through settings.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use finapp::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://finapp@localhost/finapp", 4, Duration::from_secs(5));
/// assert_eq!(config.max_size(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    checkout_timeout: Duration,
}

impl PoolConfig {
    /// Build a config; a zero `max_size` is raised to one connection.
    pub fn new(database_url: impl Into<String>, max_size: u32, checkout_timeout: Duration) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: max_size.max(1),
            checkout_timeout,
        }
    }

    /// Upper bound on open connections.
    #[must_use]
    pub const fn max_size(&self) -> u32 {
        self.max_size
    }

    /// How long a checkout waits before failing.
    #[must_use]
    pub const fn checkout_timeout(&self) -> Duration {
        self.checkout_timeout
    }
}

/// Shared handle to the pool; clones share connections.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Start a pool described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] when bb8 rejects the configuration or the
    /// initial connections cannot be opened.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let PoolConfig {
            database_url,
            max_size,
            checkout_timeout,
        } = config;
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
        let inner = Pool::builder()
            .max_size(max_size)
            .connection_timeout(checkout_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;
        debug!(max_size, timeout_ms = checkout_timeout.as_millis(), "database pool started");
        Ok(Self { inner })
    }

    /// Borrow a connection for one repository call.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] once the checkout timeout elapses.
    pub async fn get(&self) -> Result<PgConn<'_>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
