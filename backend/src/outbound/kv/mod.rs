//! Key-value adapters for the [`UserStorage`](crate::domain::ports::UserStorage) port.

mod in_memory;
mod redis_storage;

pub use in_memory::InMemoryUserStorage;
pub use redis_storage::{RedisStorageConfig, RedisUserStorage};
