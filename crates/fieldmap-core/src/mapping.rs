//! Bindings between entity properties and storage field names.

mod binding;
pub use binding::PropertyBinding;

mod config;
pub use config::{CollisionPolicy, Config};

mod context;
pub use context::MappingContext;
