//! Builders for the storage backend and the HTTP state wrapped around it.

use std::io;
use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use user_service::domain::UserServiceImpl;
use user_service::domain::ports::UserStorage;
use user_service::inbound::http::state::HttpState;
use user_service::outbound::TimeOrderedIdGenerator;
use user_service::outbound::kv::{InMemoryUserStorage, RedisStorageConfig, RedisUserStorage};
use user_service::settings::ServiceSettings;

use super::ServerConfig;

/// Select the storage backend from settings.
///
/// Connects to Redis and verifies it answers when a URL is configured,
/// otherwise falls back to process memory.
///
/// # Errors
/// Returns [`io::Error`] when the Redis settings are invalid or the server is
/// unreachable.
pub(crate) async fn build_storage(settings: &ServiceSettings) -> io::Result<Arc<dyn UserStorage>> {
    let redis = settings
        .redis()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    match redis {
        Some(config) => connect_redis(config).await,
        None => {
            warn!("no redis url configured; users are kept in memory and lost on restart");
            Ok(Arc::new(InMemoryUserStorage::new()))
        }
    }
}

async fn connect_redis(config: RedisStorageConfig) -> io::Result<Arc<dyn UserStorage>> {
    let prefix = config.prefix().to_owned();
    let storage = RedisUserStorage::connect(config)
        .await
        .map_err(|err| io::Error::other(format!("redis setup failed: {err}")))?;
    storage
        .ping()
        .await
        .map_err(|err| io::Error::other(format!("redis ping failed: {err}")))?;
    info!(prefix = %prefix, "connected to redis");
    Ok(Arc::new(storage))
}

/// Build the shared HTTP state from the configured storage.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = UserServiceImpl::new(
        Arc::clone(&config.storage),
        Arc::new(TimeOrderedIdGenerator),
        config.logger.clone(),
    );
    web::Data::new(HttpState::new(Arc::new(service)))
}
