use super::Error;
use crate::schema::ClassId;

/// Error when a type embeds or extends itself, directly or through other types.
#[derive(Debug)]
pub(super) struct CyclicType {
    /// The chain of types, starting and ending with the repeated type.
    path: Vec<ClassId>,
}

impl std::error::Error for CyclicType {}

impl core::fmt::Display for CyclicType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("cyclic type reference: ")?;
        for (i, class) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{class}")?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a cyclic type error from the chain of types that loops back.
    pub fn cyclic_type(path: Vec<ClassId>) -> Error {
        Error::from(super::ErrorKind::CyclicType(CyclicType { path }))
    }

    /// Returns `true` if the root cause of this error is a cyclic type error.
    pub fn is_cyclic_type(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::CyclicType(_))
    }
}
