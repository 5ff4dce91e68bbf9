//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod state;
pub mod users;
pub(crate) mod validation;

pub use error::ApiResult;

/// Largest JSON body accepted by the users endpoints.
pub const JSON_BODY_LIMIT: usize = 1024 * 1024;

/// JSON extractor settings shared by every handler.
///
/// Malformed or oversized bodies are reported through the standard error
/// envelope instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| validation::invalid_body_error(&err).into())
}

/// Register the root endpoint and the `/api` user routes.
///
/// Callers supply [`state::HttpState`] through `app_data`. Health probes are
/// mounted separately because they depend on server lifecycle state.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use user_service::domain::UserServiceImpl;
/// use user_service::inbound::http::{configure, state::HttpState};
/// use user_service::outbound::TimeOrderedIdGenerator;
/// use user_service::outbound::kv::InMemoryUserStorage;
///
/// let service = UserServiceImpl::new(
///     Arc::new(InMemoryUserStorage::new()),
///     Arc::new(TimeOrderedIdGenerator),
///     tracing::Dispatch::none(),
/// );
/// let state = web::Data::new(HttpState::new(Arc::new(service)));
/// let _app = App::new().app_data(state).configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(health::root).service(
        web::scope("/api")
            .service(users::create_user)
            .service(users::get_user)
            .service(users::update_user)
            .service(users::delete_user),
    );
}
