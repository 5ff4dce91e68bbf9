//! Redis-backed adapter for the [`UserStorage`] port.
//!
//! Records live under `"{prefix}::{id}"` as plain string values. Every call
//! checks a connection out of a `bb8` pool and runs under a deadline, so a
//! stalled server surfaces as [`UserStorageError::Timeout`] instead of
//! hanging the request.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use bb8_redis::RedisConnectionManager;
use bb8_redis::bb8::{Pool, PooledConnection, RunError};
use bb8_redis::redis::{self, RedisError};
use tracing::debug;

use crate::domain::ports::{UserStorage, UserStorageError};

const DEFAULT_PREFIX: &str = "user-service";
const DEFAULT_MAX_SIZE: u32 = 16;
const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(2);

/// Connection settings for [`RedisUserStorage`].
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use user_service::outbound::kv::RedisStorageConfig;
///
/// let config = RedisStorageConfig::new("redis://127.0.0.1:6379/")
///     .with_prefix("accounts")
///     .with_max_size(4)
///     .with_operation_timeout(Duration::from_millis(500));
/// assert_eq!(config.prefix(), "accounts");
/// assert_eq!(config.max_size(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisStorageConfig {
    url: String,
    prefix: String,
    max_size: u32,
    connection_timeout: Duration,
    operation_timeout: Duration,
}

impl RedisStorageConfig {
    /// Configuration for the server at `url` with default pool settings.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            prefix: DEFAULT_PREFIX.to_owned(),
            max_size: DEFAULT_MAX_SIZE,
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Namespace prepended to every key.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Upper bound on pooled connections.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// How long a checkout waits for a free or new connection.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Deadline applied to each storage operation as a whole.
    #[must_use]
    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }

    pub fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }
}

/// User storage backed by a pooled Redis connection.
pub struct RedisUserStorage {
    pool: Pool<RedisConnectionManager>,
    prefix: String,
    operation_timeout: Duration,
}

impl fmt::Debug for RedisUserStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisUserStorage")
            .field("prefix", &self.prefix)
            .field("operation_timeout", &self.operation_timeout)
            .finish_non_exhaustive()
    }
}

impl RedisUserStorage {
    /// Build the connection pool.
    ///
    /// Connections are opened lazily, so an unreachable server is only
    /// reported by the first operation or by [`Self::ping`].
    ///
    /// # Errors
    /// Returns [`UserStorageError::Connection`] for a malformed URL, a zero
    /// pool size or a zero operation deadline.
    pub async fn connect(config: RedisStorageConfig) -> Result<Self, UserStorageError> {
        if config.max_size == 0 {
            return Err(UserStorageError::connection("pool size must be positive"));
        }
        if config.operation_timeout.is_zero() {
            return Err(UserStorageError::connection(
                "operation timeout must be positive",
            ));
        }
        let manager = RedisConnectionManager::new(config.url.as_str())
            .map_err(|err| UserStorageError::connection(err.to_string()))?;
        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| UserStorageError::connection(err.to_string()))?;

        Ok(Self {
            pool,
            prefix: config.prefix,
            operation_timeout: config.operation_timeout,
        })
    }

    /// Round-trip a `PING` to confirm the server answers.
    pub async fn ping(&self) -> Result<(), UserStorageError> {
        self.with_deadline(async {
            let mut conn = self.connection().await?;
            let reply: String = redis::cmd("PING")
                .query_async(&mut *conn)
                .await
                .map_err(map_redis_error)?;
            debug!(reply = %reply, "redis ping succeeded");
            Ok(())
        })
        .await
    }

    fn key(&self, id: &str) -> String {
        prefixed_key(&self.prefix, id)
    }

    async fn connection(
        &self,
    ) -> Result<PooledConnection<'_, RedisConnectionManager>, UserStorageError> {
        self.pool.get().await.map_err(map_pool_error)
    }

    async fn with_deadline<T, F>(&self, operation: F) -> Result<T, UserStorageError>
    where
        F: Future<Output = Result<T, UserStorageError>>,
    {
        tokio::time::timeout(self.operation_timeout, operation)
            .await
            .unwrap_or_else(|_| Err(UserStorageError::timeout(as_millis(self.operation_timeout))))
    }
}

#[async_trait]
impl UserStorage for RedisUserStorage {
    async fn store(&self, id: &str, name: &str) -> Result<(), UserStorageError> {
        let key = self.key(id);
        self.with_deadline(async {
            let mut conn = self.connection().await?;
            let _: () = redis::cmd("SET")
                .arg(&key)
                .arg(name)
                .query_async(&mut *conn)
                .await
                .map_err(map_redis_error)?;
            Ok(())
        })
        .await
    }

    async fn read(&self, id: &str) -> Result<String, UserStorageError> {
        let key = self.key(id);
        self.with_deadline(async {
            let mut conn = self.connection().await?;
            let value: Option<String> = redis::cmd("GET")
                .arg(&key)
                .query_async(&mut *conn)
                .await
                .map_err(map_redis_error)?;
            value.ok_or_else(UserStorageError::not_found)
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<(), UserStorageError> {
        let key = self.key(id);
        self.with_deadline(async {
            let mut conn = self.connection().await?;
            let removed: u64 = redis::cmd("DEL")
                .arg(&key)
                .query_async(&mut *conn)
                .await
                .map_err(map_redis_error)?;
            if removed == 0 {
                return Err(UserStorageError::not_found());
            }
            Ok(())
        })
        .await
    }
}

fn prefixed_key(prefix: &str, id: &str) -> String {
    format!("{prefix}::{id}")
}

fn as_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn map_redis_error(err: RedisError) -> UserStorageError {
    if err.is_io_error()
        || err.is_connection_refusal()
        || err.is_connection_dropped()
        || err.is_timeout()
    {
        UserStorageError::connection(err.to_string())
    } else {
        UserStorageError::backend(err.to_string())
    }
}

fn map_pool_error(err: RunError<RedisError>) -> UserStorageError {
    match err {
        RunError::User(inner) => map_redis_error(inner),
        RunError::TimedOut => UserStorageError::connection("timed out waiting for a connection"),
    }
}
