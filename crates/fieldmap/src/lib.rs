//! Maps entity property names to storage field names and back.
//!
//! Describe entities with `#[derive(Entity)]`, register them in a
//! [`Catalog`], then build a [`MappingContext`] once at startup:
//!
//! ```
//! use fieldmap::{Catalog, Entity, MappingContext, Resolver};
//!
//! #[derive(Entity)]
//! struct Address {
//!     city: String,
//! }
//!
//! #[derive(Entity)]
//! #[allow(non_snake_case)]
//! struct User {
//!     #[column("user_name")]
//!     name: String,
//!     userId: i64,
//!     #[embedded]
//!     address: Address,
//! }
//!
//! let mut catalog = Catalog::new();
//! catalog.register::<User>();
//!
//! let mut cx = MappingContext::default();
//! cx.register(&catalog, [User::class_id()]).unwrap();
//!
//! let resolver = Resolver::new(&cx);
//! assert_eq!(resolver.to_store_name::<User>("userId"), "USER_ID");
//! assert_eq!(resolver.to_store_name::<User>("name"), "user_name");
//! assert_eq!(resolver.to_store_name::<User>("city"), "CITY");
//! ```

mod resolver;
pub use resolver::Resolver;

pub use fieldmap_core::{
    bail, err,
    mapping::{self, CollisionPolicy, Config, MappingContext, PropertyBinding},
    schema::{self, Catalog, ClassId, Entity, Model, Property, TypeDescriptor, TypeResolver},
    Error, Result,
};

pub use fieldmap_macros::Entity;

#[doc(hidden)]
pub mod codegen_support {
    pub use fieldmap_core::schema::{Catalog, ClassId, Entity, Model, Property};
    pub use std::any::type_name;
}
