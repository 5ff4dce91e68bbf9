//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USER_SERVICE_*` environment variables, and
//! configuration files, in OrthoConfig's usual precedence.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::outbound::kv::RedisStorageConfig;

const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_REDIS_PREFIX: &str = "user-service";

/// Settings that load but cannot drive the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// A pool needs room for at least one connection.
    #[error("redis_pool_size must be greater than zero")]
    ZeroPoolSize,
    /// A zero deadline fails every storage call.
    #[error("storage_timeout_ms must be greater than zero")]
    ZeroStorageTimeout,
}

/// Runtime settings for the user service binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SERVICE")]
pub struct ServiceSettings {
    /// TCP port the HTTP server listens on.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Interface address to bind.
    pub bind_host: Option<String>,
    /// Redis connection URL. When absent, users are kept in process memory.
    pub redis_url: Option<String>,
    /// Namespace prepended to every Redis key.
    pub redis_prefix: Option<String>,
    /// Upper bound on pooled Redis connections.
    #[ortho_config(default = 16)]
    pub redis_pool_size: u32,
    /// Deadline for a single storage operation, in milliseconds.
    #[ortho_config(default = 2000)]
    pub storage_timeout_ms: u64,
}

impl ServiceSettings {
    /// Return the configured bind host, falling back to all interfaces.
    pub fn bind_host(&self) -> &str {
        self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST)
    }

    /// Return the configured key prefix, falling back to the default.
    pub fn redis_prefix(&self) -> &str {
        self.redis_prefix.as_deref().unwrap_or(DEFAULT_REDIS_PREFIX)
    }

    /// Per-operation storage deadline.
    pub fn storage_timeout(&self) -> Duration {
        Duration::from_millis(self.storage_timeout_ms)
    }

    /// Socket address assembled from host and port.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let host: IpAddr = self.bind_host().parse()?;
        Ok(SocketAddr::new(host, self.port))
    }

    /// Redis adapter settings, or `None` when no URL is configured.
    ///
    /// # Errors
    /// Returns [`SettingsError`] when the pool size or storage deadline is
    /// zero.
    pub fn redis(&self) -> Result<Option<RedisStorageConfig>, SettingsError> {
        if self.redis_pool_size == 0 {
            return Err(SettingsError::ZeroPoolSize);
        }
        if self.storage_timeout_ms == 0 {
            return Err(SettingsError::ZeroStorageTimeout);
        }
        Ok(self.redis_url.as_ref().map(|url| {
            RedisStorageConfig::new(url.as_str())
                .with_prefix(self.redis_prefix())
                .with_max_size(self.redis_pool_size)
                .with_operation_timeout(self.storage_timeout())
        }))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for service configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "USER_SERVICE_PORT",
        "USER_SERVICE_BIND_HOST",
        "USER_SERVICE_REDIS_URL",
        "USER_SERVICE_REDIS_PREFIX",
        "USER_SERVICE_REDIS_POOL_SIZE",
        "USER_SERVICE_STORAGE_TIMEOUT_MS",
    ];

    fn load_from_empty_args() -> ServiceSettings {
        ServiceSettings::load_from_iter([OsString::from("user-service")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.bind_host(), DEFAULT_BIND_HOST);
        assert_eq!(settings.redis_prefix(), DEFAULT_REDIS_PREFIX);
        assert_eq!(settings.storage_timeout(), Duration::from_millis(2000));
        assert_eq!(
            settings.bind_addr().expect("default address"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal")
        );
        assert_eq!(settings.redis(), Ok(None));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USER_SERVICE_PORT", Some("9090".to_owned())),
            ("USER_SERVICE_BIND_HOST", Some("127.0.0.1".to_owned())),
            (
                "USER_SERVICE_REDIS_URL",
                Some("redis://cache:6379/".to_owned()),
            ),
            ("USER_SERVICE_REDIS_PREFIX", Some("simple-app".to_owned())),
            ("USER_SERVICE_REDIS_POOL_SIZE", Some("4".to_owned())),
            ("USER_SERVICE_STORAGE_TIMEOUT_MS", Some("250".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("configured address"),
            "127.0.0.1:9090".parse::<SocketAddr>().expect("literal")
        );
        let redis = settings
            .redis()
            .expect("valid redis settings")
            .expect("redis configured");
        assert_eq!(redis.url(), "redis://cache:6379/");
        assert_eq!(redis.prefix(), "simple-app");
        assert_eq!(redis.max_size(), 4);
        assert_eq!(redis.operation_timeout(), Duration::from_millis(250));
    }

    #[rstest]
    #[case("USER_SERVICE_REDIS_POOL_SIZE", SettingsError::ZeroPoolSize)]
    #[case("USER_SERVICE_STORAGE_TIMEOUT_MS", SettingsError::ZeroStorageTimeout)]
    fn zero_redis_limits_are_rejected(#[case] var: &str, #[case] expected: SettingsError) {
        let _guard = lock_env(VARS.map(|name| {
            let value = match name {
                "USER_SERVICE_REDIS_URL" => Some("redis://cache:6379/".to_owned()),
                _ if name == var => Some("0".to_owned()),
                _ => None,
            };
            (name, value)
        }));

        let settings = load_from_empty_args();
        assert_eq!(settings.redis(), Err(expected));
    }

    #[rstest]
    fn hostname_bind_host_is_rejected() {
        let _guard = lock_env([("USER_SERVICE_BIND_HOST", Some("localhost".to_owned()))]);

        let settings = load_from_empty_args();
        assert!(settings.bind_addr().is_err());
    }
}
