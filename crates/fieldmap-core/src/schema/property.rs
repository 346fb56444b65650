use super::ClassId;

/// A property declared directly on a type.
///
/// The markers mirror what a host reflection facility reports for a field.
/// When several are set they are honored in this order: embedded, excluded
/// (transient or class-level), explicit column name, naming convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// The property identifier, unique within its declaring type
    pub name: String,

    /// Declared value type. For embedded properties this is the type whose
    /// properties get flattened into the owner.
    pub ty: ClassId,

    /// Flatten the value type's properties into the owner
    pub embedded: bool,

    /// Never stored
    pub transient: bool,

    /// Belongs to the type rather than to instances, never stored
    pub class_level: bool,

    /// Storage field name overriding the naming convention
    pub column: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<ClassId>) -> Property {
        Property {
            name: name.into(),
            ty: ty.into(),
            embedded: false,
            transient: false,
            class_level: false,
            column: None,
        }
    }

    pub fn embedded(mut self) -> Property {
        self.embedded = true;
        self
    }

    pub fn transient(mut self) -> Property {
        self.transient = true;
        self
    }

    pub fn class_level(mut self) -> Property {
        self.class_level = true;
        self
    }

    pub fn column(mut self, name: impl Into<String>) -> Property {
        self.column = Some(name.into());
        self
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// True if the property never produces a binding of its own.
    pub fn is_excluded(&self) -> bool {
        self.transient || self.class_level
    }

    pub fn explicit_storage_name(&self) -> Option<&str> {
        self.column.as_deref()
    }
}
