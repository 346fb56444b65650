use super::{Catalog, ClassId, Model};

/// A Rust type that describes itself for field mapping.
///
/// Usually implemented with `#[derive(Entity)]`.
pub trait Entity: 'static {
    /// Identifier the type is registered and looked up under.
    fn class_id() -> ClassId;

    /// The type's own declared properties and the type it extends.
    fn descriptor() -> Model;

    /// Adds this type to the catalog. Derived implementations also register
    /// every embedded and extended type.
    fn register(catalog: &mut Catalog) {
        if !catalog.contains(&Self::class_id()) {
            catalog.insert(Self::descriptor());
        }
    }
}
