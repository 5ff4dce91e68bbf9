//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod id_generator;
mod user_service;
mod user_storage;

#[cfg(test)]
pub use id_generator::MockIdGenerator;
pub use id_generator::{IdGenerationError, IdGenerator};
#[cfg(test)]
pub use user_service::MockUserService;
pub use user_service::{UserService, UserServiceError};
#[cfg(test)]
pub use user_storage::MockUserStorage;
pub use user_storage::{UserStorage, UserStorageError};
