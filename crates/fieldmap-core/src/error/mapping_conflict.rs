use super::Error;
use crate::schema::ClassId;

/// Error when two bindings of the same class land on the same index key.
///
/// Only raised when the context is configured with
/// [`CollisionPolicy::Reject`](crate::mapping::CollisionPolicy::Reject).
#[derive(Debug)]
pub(super) struct MappingConflict {
    class: ClassId,
    key: Box<str>,
    existing: Box<str>,
    incoming: Box<str>,
}

impl std::error::Error for MappingConflict {}

impl core::fmt::Display for MappingConflict {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "mapping conflict in {}: `{}` and `{}` both map to key `{}`",
            self.class, self.existing, self.incoming, self.key
        )
    }
}

impl Error {
    /// Creates a mapping conflict error. `existing` and `incoming` are the full
    /// paths of the two colliding bindings.
    pub fn mapping_conflict(
        class: ClassId,
        key: impl Into<String>,
        existing: impl Into<String>,
        incoming: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::MappingConflict(MappingConflict {
            class,
            key: key.into().into(),
            existing: existing.into().into(),
            incoming: incoming.into().into(),
        }))
    }

    /// Returns `true` if the root cause of this error is a mapping conflict error.
    pub fn is_mapping_conflict(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::MappingConflict(_))
    }
}
