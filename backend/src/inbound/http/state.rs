//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the [`UserService`] port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserService;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use user_service::domain::UserServiceImpl;
/// use user_service::inbound::http::state::HttpState;
/// use user_service::outbound::TimeOrderedIdGenerator;
/// use user_service::outbound::kv::InMemoryUserStorage;
///
/// let service = UserServiceImpl::new(
///     Arc::new(InMemoryUserStorage::new()),
///     Arc::new(TimeOrderedIdGenerator),
///     tracing::Dispatch::none(),
/// );
/// let state = HttpState::new(Arc::new(service));
/// let _users = state.users.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserService>,
}

impl HttpState {
    /// Construct state around a user service.
    pub fn new(users: Arc<dyn UserService>) -> Self {
        Self { users }
    }
}
