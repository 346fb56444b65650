use super::{ClassId, Entity, TypeDescriptor, TypeResolver};
use indexmap::IndexMap;
use std::sync::Arc;

/// In-memory [`TypeResolver`] holding one descriptor per class.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    types: IndexMap<ClassId, Arc<dyn TypeDescriptor>>,
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog::default()
    }

    /// Adds a descriptor, replacing and returning any previous descriptor
    /// registered under the same class id.
    pub fn insert(
        &mut self,
        descriptor: impl TypeDescriptor + 'static,
    ) -> Option<Arc<dyn TypeDescriptor>> {
        let id = descriptor.class_id().clone();
        self.types.insert(id, Arc::new(descriptor))
    }

    /// Registers a derived entity along with every type it embeds or extends.
    pub fn register<T: Entity>(&mut self) -> &mut Self {
        T::register(self);
        self
    }

    pub fn contains(&self, class: &ClassId) -> bool {
        self.types.contains_key(class)
    }

    pub fn get(&self, class: &ClassId) -> Option<&Arc<dyn TypeDescriptor>> {
        self.types.get(class)
    }

    pub fn class_ids(&self) -> impl Iterator<Item = &ClassId> + '_ {
        self.types.keys()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeResolver for Catalog {
    fn resolve(&self, class: &ClassId) -> Option<&dyn TypeDescriptor> {
        self.types.get(class).map(|descriptor| &**descriptor)
    }
}
