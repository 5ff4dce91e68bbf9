//! Port abstraction for the key-value backend holding user records.
//!
//! Records are addressed by the string form of the user identifier and hold
//! the display name. Absence is reported through
//! [`UserStorageError::NotFound`] so callers can branch on it without
//! inspecting message text.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user storage adapters.
    pub enum UserStorageError {
        /// No record exists under the requested key.
        NotFound => "user record not found",
        /// The backend could not be reached.
        Connection { message: String } => "user storage connection failed: {message}",
        /// The backend accepted the request but failed to execute it.
        Backend { message: String } => "user storage operation failed: {message}",
        /// The operation did not complete before its deadline.
        Timeout { millis: u64 } => "user storage operation timed out after {millis}ms",
    }
}

impl UserStorageError {
    /// True when the error signals an absent key rather than a fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Key-value storage for user display names.
///
/// Implementations only need single-key atomicity. Dropping a returned future
/// cancels the in-flight operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Insert or overwrite the name stored under `id`.
    async fn store(&self, id: &str, name: &str) -> Result<(), UserStorageError>;

    /// Fetch the name stored under `id`.
    ///
    /// Returns [`UserStorageError::NotFound`] when the key is absent.
    async fn read(&self, id: &str) -> Result<String, UserStorageError>;

    /// Remove the record stored under `id`.
    ///
    /// Returns [`UserStorageError::NotFound`] when the key is absent.
    async fn delete(&self, id: &str) -> Result<(), UserStorageError>;
}
