//! Type descriptors: the introspection capability the mapping is built from.
//!
//! A [`TypeDescriptor`] exposes the declared properties of one type and the
//! type it extends. A [`TypeResolver`] turns a [`ClassId`] into a descriptor;
//! [`Catalog`] is the in-memory resolver that `#[derive(Entity)]` types
//! register themselves into.

mod catalog;
pub use catalog::Catalog;

mod class_id;
pub use class_id::ClassId;

mod descriptor;
pub use descriptor::{TypeDescriptor, TypeResolver};

mod entity;
pub use entity::Entity;

mod model;
pub use model::Model;

mod name;
pub use name::Name;

mod property;
pub use property::Property;
