//! User lifecycle service.
//!
//! Implements the [`UserService`] driving port on top of the [`UserStorage`]
//! and [`IdGenerator`] driven ports. Storage absence passes through as
//! [`UserServiceError::NotFound`] without logging. Every other failure is
//! logged once, through the injected logger, and replaced with a generic
//! error so backend detail never reaches callers.
//!
//! `update_user` reads before it writes and holds no lock in between: a delete
//! landing between the two steps is overwritten and the record reappears with
//! the new name.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{Dispatch, error};

use crate::domain::UserId;
use crate::domain::ports::{
    IdGenerator, UserService, UserServiceError, UserStorage, UserStorageError,
};

/// User service implementing the driving port.
///
/// Holds no mutable state, so one instance serves concurrent requests.
pub struct UserServiceImpl<S: ?Sized, G: ?Sized> {
    storage: Arc<S>,
    ids: Arc<G>,
    logger: Dispatch,
}

impl<S: ?Sized, G: ?Sized> Clone for UserServiceImpl<S, G> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            ids: Arc::clone(&self.ids),
            logger: self.logger.clone(),
        }
    }
}

impl<S: ?Sized, G: ?Sized> UserServiceImpl<S, G> {
    /// Create a service over the given ports.
    ///
    /// Failure events are emitted through `logger` rather than the ambient
    /// subscriber, so separate instances can log to separate sinks.
    pub fn new(storage: Arc<S>, ids: Arc<G>, logger: Dispatch) -> Self {
        Self {
            storage,
            ids,
            logger,
        }
    }

    fn log(&self, emit: impl FnOnce()) {
        tracing::dispatcher::with_default(&self.logger, emit);
    }
}

#[async_trait]
impl<S, G> UserService for UserServiceImpl<S, G>
where
    S: UserStorage + ?Sized,
    G: IdGenerator + ?Sized,
{
    async fn get_user(&self, id: &UserId) -> Result<String, UserServiceError> {
        let key = id.storage_key();
        match self.storage.read(&key).await {
            Ok(name) => Ok(name),
            Err(UserStorageError::NotFound) => Err(UserServiceError::NotFound),
            Err(err) => {
                self.log(|| error!(user_id = %id, error = %err, "error getting user"));
                Err(UserServiceError::Read { id: *id })
            }
        }
    }

    async fn create_user(&self, name: &str) -> Result<UserId, UserServiceError> {
        let id = match self.ids.next_id() {
            Ok(id) => id,
            Err(err) => {
                self.log(|| error!(user_name = name, error = %err, "error generating user id"));
                return Err(UserServiceError::IdGeneration);
            }
        };

        if let Err(err) = self.storage.store(&id.storage_key(), name).await {
            self.log(|| {
                error!(
                    user_id = %id,
                    user_name = name,
                    error = %err,
                    "error creating user"
                );
            });
            return Err(UserServiceError::Create { id });
        }

        Ok(id)
    }

    async fn update_user(&self, id: &UserId, name: &str) -> Result<(), UserServiceError> {
        let key = id.storage_key();
        match self.storage.read(&key).await {
            Ok(_) => {}
            Err(UserStorageError::NotFound) => return Err(UserServiceError::NotFound),
            Err(err) => {
                self.log(|| {
                    error!(
                        user_id = %id,
                        user_name = name,
                        error = %err,
                        "error checking user before update"
                    );
                });
                return Err(UserServiceError::Lookup { id: *id });
            }
        }

        self.storage.store(&key, name).await.map_err(|err| {
            self.log(|| {
                error!(
                    user_id = %id,
                    user_name = name,
                    error = %err,
                    "error updating user"
                );
            });
            UserServiceError::Update { id: *id }
        })
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserServiceError> {
        match self.storage.delete(&id.storage_key()).await {
            Ok(()) => Ok(()),
            Err(UserStorageError::NotFound) => Err(UserServiceError::NotFound),
            Err(err) => {
                self.log(|| error!(user_id = %id, error = %err, "error deleting user"));
                Err(UserServiceError::Delete { id: *id })
            }
        }
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
