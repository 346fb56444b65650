use super::Error;
use crate::schema::ClassId;

/// Error when a class identifier cannot be resolved by the type resolver.
///
/// Raised during registration, either for one of the requested classes or for
/// an embedded or ancestor type reached while walking one of them.
#[derive(Debug)]
pub(super) struct ClassNotFound {
    class: ClassId,
}

impl std::error::Error for ClassNotFound {}

impl core::fmt::Display for ClassNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "class not found: {}", self.class)
    }
}

impl Error {
    /// Creates a class not found error.
    pub fn class_not_found(class: ClassId) -> Error {
        Error::from(super::ErrorKind::ClassNotFound(ClassNotFound { class }))
    }

    /// Returns `true` if the root cause of this error is a class not found error.
    pub fn is_class_not_found(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::ClassNotFound(_))
    }
}
