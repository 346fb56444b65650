use super::{ClassId, Property};
use std::fmt;

/// Introspection over a single type.
pub trait TypeDescriptor: fmt::Debug + Send + Sync {
    /// Identifier of the described type.
    fn class_id(&self) -> &ClassId;

    /// Properties declared by this type itself, in declaration order.
    /// Properties inherited from ancestors are not included.
    fn declared_properties(&self) -> &[Property];

    /// The type this one extends. `None` means the universal base type, which
    /// declares no properties.
    fn ancestor(&self) -> Option<&ClassId>;
}

/// Looks up type descriptors by identifier.
pub trait TypeResolver {
    fn resolve(&self, class: &ClassId) -> Option<&dyn TypeDescriptor>;
}

impl<T: TypeResolver + ?Sized> TypeResolver for &T {
    fn resolve(&self, class: &ClassId) -> Option<&dyn TypeDescriptor> {
        (**self).resolve(class)
    }
}
