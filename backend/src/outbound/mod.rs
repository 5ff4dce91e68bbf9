//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **kv**: key-value user storage (Redis, or in-process for tests and
//!   local runs)
//! - **id_generator**: UUIDv7 identifier minting
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

mod id_generator;
pub mod kv;

pub use id_generator::TimeOrderedIdGenerator;
