//! User service library modules.
//!
//! A small CRUD service for user records held in a key-value store. The
//! domain layer owns the lifecycle rules; HTTP and Redis live at the edges.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
