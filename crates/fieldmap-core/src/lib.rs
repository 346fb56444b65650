mod error;
pub use error::{Error, IntoError};

pub mod mapping;
pub use mapping::MappingContext;

pub mod schema;

/// A Result type alias that uses fieldmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
