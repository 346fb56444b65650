use super::Error;

/// Error when a caller passes an argument the mapping cannot serve, such as a
/// bulk lookup against a class that has no registered bindings.
#[derive(Debug)]
pub(super) struct InvalidArgument {
    message: Box<str>,
}

impl std::error::Error for InvalidArgument {}

impl core::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid argument: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidArgument(InvalidArgument {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if the root cause of this error is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::InvalidArgument(_))
    }
}
