use crate::schema::ClassId;

/// One entity property paired with the storage field it maps to.
///
/// Two bindings are equal when all four parts match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyBinding {
    name: String,
    full_path: String,
    store_field_name: String,
    value_type: ClassId,
}

impl PropertyBinding {
    pub fn new(
        name: impl Into<String>,
        full_path: impl Into<String>,
        store_field_name: impl Into<String>,
        value_type: impl Into<ClassId>,
    ) -> PropertyBinding {
        PropertyBinding {
            name: name.into(),
            full_path: full_path.into(),
            store_field_name: store_field_name.into(),
            value_type: value_type.into(),
        }
    }

    /// The property name within its declaring type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path from the registered class through embedded containers, e.g.
    /// `address.city`.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Storage field name. Blank when the property is known but not stored.
    pub fn store_field_name(&self) -> &str {
        &self.store_field_name
    }

    pub fn value_type(&self) -> &ClassId {
        &self.value_type
    }

    /// True if the binding has a non-blank storage field name.
    pub fn is_mapped(&self) -> bool {
        !self.store_field_name.trim().is_empty()
    }
}
