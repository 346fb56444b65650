use super::{ClassId, Property, TypeDescriptor};

/// A type description assembled by hand or by `#[derive(Entity)]`.
///
/// ```
/// use fieldmap_core::schema::{Model, Property};
///
/// let user = Model::new("app::User")
///     .extends("app::Base")
///     .property(Property::new("userId", "i64"))
///     .property(Property::new("name", "String").column("user_name"))
///     .property(Property::new("address", "app::Address").embedded());
///
/// assert_eq!(user.properties.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Model identifier
    pub id: ClassId,

    /// Type the model extends, if any
    pub extends: Option<ClassId>,

    /// Declared properties, in declaration order
    pub properties: Vec<Property>,
}

impl Model {
    pub fn new(id: impl Into<ClassId>) -> Model {
        Model {
            id: id.into(),
            extends: None,
            properties: vec![],
        }
    }

    pub fn extends(mut self, ancestor: impl Into<ClassId>) -> Model {
        self.extends = Some(ancestor.into());
        self
    }

    pub fn property(mut self, property: Property) -> Model {
        self.properties.push(property);
        self
    }

    pub fn property_by_name(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }
}

impl TypeDescriptor for Model {
    fn class_id(&self) -> &ClassId {
        &self.id
    }

    fn declared_properties(&self) -> &[Property] {
        &self.properties
    }

    fn ancestor(&self) -> Option<&ClassId> {
        self.extends.as_ref()
    }
}
