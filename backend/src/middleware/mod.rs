//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns such as
//! tracing and response hardening.

use actix_web::middleware::DefaultHeaders;

pub mod trace;

pub use trace::Trace;

/// Headers applied to every response.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_service::middleware::security_headers;
///
/// let _app = App::new().wrap(security_headers());
/// ```
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-XSS-Protection", "1; mode=block"))
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "DENY"))
}
