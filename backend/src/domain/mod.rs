//! Domain primitives, ports, and services.
//!
//! Purpose: Define strongly typed user entities and the service that manages
//! their lifecycle over a key-value store, independent of HTTP or Redis.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - TraceId (alias to `trace_id::TraceId`) — request correlation identifier.
//! - User / UserId (aliases to `user::*`) — user identity and display name.
//! - UserServiceImpl — the [`ports::UserService`] implementation.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId, UserValidationError};
pub use self::user_service::UserServiceImpl;

/// Header carrying the request trace identifier on every response.
pub const TRACE_ID_HEADER: &str = "trace-id";
