//! Identifier generation backed by UUIDv7.

use uuid::Uuid;

use crate::domain::UserId;
use crate::domain::ports::{IdGenerationError, IdGenerator};

/// Mints time-ordered UUIDv7 identifiers.
///
/// Values sort by creation time at millisecond precision.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeOrderedIdGenerator;

impl IdGenerator for TimeOrderedIdGenerator {
    fn next_id(&self) -> Result<UserId, IdGenerationError> {
        Ok(UserId::from_uuid(Uuid::now_v7()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn produces_version_seven_ids() {
        let id = TimeOrderedIdGenerator.next_id().expect("generate");
        assert_eq!(id.as_uuid().get_version_num(), 7);
    }

    #[test]
    fn ids_are_unique() {
        let ids: Vec<UserId> = (0..64)
            .map(|_| TimeOrderedIdGenerator.next_id().expect("generate"))
            .collect();

        let distinct: HashSet<_> = ids.iter().collect();
        assert_eq!(distinct.len(), ids.len());
    }
}
