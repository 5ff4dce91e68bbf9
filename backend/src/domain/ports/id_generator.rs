//! Port for minting user identifiers.

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised while generating identifiers.
    pub enum IdGenerationError {
        /// The generator could not produce a unique value.
        Unavailable { message: String } => "identifier generation failed: {message}",
    }
}

/// Source of fresh, statistically unique user identifiers.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Produce an identifier never returned before.
    fn next_id(&self) -> Result<UserId, IdGenerationError>;
}
