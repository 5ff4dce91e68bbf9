//! Driving port for user lifecycle operations.
//!
//! Inbound adapters depend on [`UserService`] only. Failures come back as
//! [`UserServiceError`]: either the [`UserServiceError::NotFound`] sentinel or
//! a generic, detail-free variant whose message is safe to show to clients.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::UserId;

/// Errors surfaced across the user service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserServiceError {
    /// The user does not exist.
    #[error("not found")]
    NotFound,
    /// A fresh identifier could not be generated.
    #[error("error generating id")]
    IdGeneration,
    /// Reading the user failed for a reason other than absence.
    #[error("error getting message: {id}")]
    Read { id: UserId },
    /// Persisting a new user failed after its identifier was generated.
    #[error("error creating user")]
    Create { id: UserId },
    /// The presence check ahead of an update failed.
    #[error("error getting user")]
    Lookup { id: UserId },
    /// Overwriting an existing user's name failed.
    #[error("error updating user")]
    Update { id: UserId },
    /// Removing the user failed for a reason other than absence.
    #[error("error deleting user")]
    Delete { id: UserId },
}

impl UserServiceError {
    /// True for the absence sentinel.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Identifier the failed operation concerned, when one exists.
    ///
    /// A failed create still reports the identifier it generated.
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Self::NotFound | Self::IdGeneration => None,
            Self::Read { id }
            | Self::Create { id }
            | Self::Lookup { id }
            | Self::Update { id }
            | Self::Delete { id } => Some(id),
        }
    }
}

/// Create, read, update and delete users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Return the display name stored for `id`.
    async fn get_user(&self, id: &UserId) -> Result<String, UserServiceError>;

    /// Store a new user and return its freshly generated identifier.
    async fn create_user(&self, name: &str) -> Result<UserId, UserServiceError>;

    /// Replace the display name of an existing user.
    async fn update_user(&self, id: &UserId, name: &str) -> Result<(), UserServiceError>;

    /// Remove the user.
    async fn delete_user(&self, id: &UserId) -> Result<(), UserServiceError>;
}
