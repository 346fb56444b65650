use super::{CollisionPolicy, Config, PropertyBinding};
use crate::schema::{ClassId, Name, Property, TypeDescriptor, TypeResolver};
use crate::{err, Error, Result};
use indexmap::{IndexMap, IndexSet};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Resolved property bindings for a set of registered classes, indexed by
/// storage field name and by property name.
///
/// The context is built once at startup and then only read. Lookups take
/// `&self`, so a context shared behind an `Arc` can be read from any number
/// of threads. Registering again requires `&mut self`, which keeps
/// re-registration from interleaving with readers.
#[derive(Debug, Default)]
pub struct MappingContext {
    config: Config,

    /// Per-class indices, in registration order
    classes: IndexMap<ClassId, ClassMapping>,
}

/// Both indices of one class, built from the same set of bindings.
#[derive(Debug, Default)]
struct ClassMapping {
    /// Upper-cased storage field name → binding
    by_store_name: IndexMap<String, Arc<PropertyBinding>>,

    /// Property name (not the full path) → binding
    by_property_name: IndexMap<String, Arc<PropertyBinding>>,
}

/// Walk state while collecting the bindings of one class.
struct Walk<'a, R: ?Sized> {
    resolver: &'a R,
    config: &'a Config,

    /// Bindings in traversal order
    bindings: IndexSet<PropertyBinding>,

    /// Types currently being walked, used to detect cycles
    stack: Vec<ClassId>,
}

impl MappingContext {
    pub fn new(config: Config) -> MappingContext {
        MappingContext {
            config,
            classes: IndexMap::new(),
        }
    }

    /// Creates a context and registers every class listed in
    /// `config.entities`.
    pub fn from_config<R>(resolver: &R, config: Config) -> Result<MappingContext>
    where
        R: TypeResolver + ?Sized,
    {
        let entities = config.entities.clone();
        let mut cx = MappingContext::new(config);
        cx.register(resolver, entities)?;
        Ok(cx)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the bindings of each class and indexes them.
    ///
    /// Registering a class again replaces its previous entries. Every class
    /// of the call is built before any is stored: if one fails, the context is
    /// left exactly as it was.
    pub fn register<R, I>(&mut self, resolver: &R, classes: I) -> Result<()>
    where
        R: TypeResolver + ?Sized,
        I: IntoIterator,
        I::Item: Into<ClassId>,
    {
        let mut built = vec![];

        for class in classes {
            let class = class.into();
            let mapping = self
                .build(resolver, &class)
                .map_err(|e| e.context(err!("failed to register {class}")))?;
            built.push((class, mapping));
        }

        for (class, mapping) in built {
            debug!(
                class = %class,
                bindings = mapping.by_property_name.len(),
                "registered entity mapping"
            );
            self.classes.insert(class, mapping);
        }

        Ok(())
    }

    /// Finds the binding stored under `store_name`, ignoring case.
    pub fn resolve_by_store_name(
        &self,
        class: &ClassId,
        store_name: &str,
    ) -> Option<&PropertyBinding> {
        let mapping = self.classes.get(class)?;
        mapping
            .by_store_name
            .get(&store_name.to_uppercase())
            .map(|binding| &**binding)
    }

    /// Finds the binding of a property. Properties without a storage field
    /// name resolve to `None`.
    pub fn resolve_by_property_name(
        &self,
        class: &ClassId,
        property: &str,
    ) -> Option<&PropertyBinding> {
        self.classes.get(class)?.mapped(property)
    }

    /// Storage field name of `property`, or `property` itself when the class
    /// or property has no mapped binding.
    pub fn to_store_name(&self, class: &ClassId, property: &str) -> String {
        match self.classes.get(class) {
            Some(mapping) => mapping.store_name_or_property(property),
            None => property.to_string(),
        }
    }

    /// Maps each property like [`to_store_name`](Self::to_store_name), but
    /// fails if `class` has no registered bindings.
    pub fn to_store_names<S>(&self, class: &ClassId, properties: &[S]) -> Result<Vec<String>>
    where
        S: AsRef<str>,
    {
        let mapping = self.registered(class)?;
        Ok(properties
            .iter()
            .map(|property| mapping.store_name_or_property(property.as_ref()))
            .collect())
    }

    /// Single-property form of [`to_store_names`](Self::to_store_names):
    /// fails if `class` has no registered bindings, falls back to `property`
    /// for an unknown property.
    pub fn resolve(&self, class: &ClassId, property: &str) -> Result<String> {
        Ok(self.registered(class)?.store_name_or_property(property))
    }

    /// Every binding of `class` keyed by upper-cased storage field name.
    /// Properties without a storage field name are listed under their blank
    /// name.
    pub fn list_all_by_store_name(
        &self,
        class: &ClassId,
    ) -> Option<&IndexMap<String, Arc<PropertyBinding>>> {
        self.classes.get(class).map(|mapping| &mapping.by_store_name)
    }

    /// Every binding of `class` keyed by property name, including properties
    /// without a storage field name.
    pub fn list_all_by_property_name(
        &self,
        class: &ClassId,
    ) -> Option<&IndexMap<String, Arc<PropertyBinding>>> {
        self.classes.get(class).map(|mapping| &mapping.by_property_name)
    }

    pub fn is_registered(&self, class: &ClassId) -> bool {
        self.classes.contains_key(class)
    }

    /// Registered classes, in registration order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassId> + '_ {
        self.classes.keys()
    }

    fn registered(&self, class: &ClassId) -> Result<&ClassMapping> {
        match self.classes.get(class) {
            Some(mapping) if !mapping.by_property_name.is_empty() => Ok(mapping),
            _ => Err(Error::invalid_argument(format!(
                "invalid entity class: {class}"
            ))),
        }
    }

    fn build<R>(&self, resolver: &R, class: &ClassId) -> Result<ClassMapping>
    where
        R: TypeResolver + ?Sized,
    {
        let mut walk = Walk {
            resolver,
            config: &self.config,
            bindings: IndexSet::new(),
            stack: vec![],
        };

        walk.visit_class(class, "")?;
        ClassMapping::index(class, walk.bindings, self.config.collisions)
    }
}

impl ClassMapping {
    fn index(
        class: &ClassId,
        bindings: IndexSet<PropertyBinding>,
        policy: CollisionPolicy,
    ) -> Result<ClassMapping> {
        let mut mapping = ClassMapping::default();

        for binding in bindings {
            let binding = Arc::new(binding);

            // Unmapped bindings share the blank key and never conflict
            let policy_for_store_name = if binding.is_mapped() {
                policy
            } else {
                CollisionPolicy::LastWriteWins
            };
            let key = binding.store_field_name().to_uppercase();
            insert(
                class,
                &mut mapping.by_store_name,
                key,
                &binding,
                policy_for_store_name,
            )?;

            let key = binding.name().to_string();
            insert(class, &mut mapping.by_property_name, key, &binding, policy)?;
        }

        Ok(mapping)
    }

    fn mapped(&self, property: &str) -> Option<&PropertyBinding> {
        self.by_property_name
            .get(property)
            .map(|binding| &**binding)
            .filter(|binding| binding.is_mapped())
    }

    fn store_name_or_property(&self, property: &str) -> String {
        match self.mapped(property) {
            Some(binding) => binding.store_field_name().to_string(),
            None => property.to_string(),
        }
    }
}

fn insert(
    class: &ClassId,
    index: &mut IndexMap<String, Arc<PropertyBinding>>,
    key: String,
    binding: &Arc<PropertyBinding>,
    policy: CollisionPolicy,
) -> Result<()> {
    if let Some(existing) = index.get(&key) {
        match policy {
            CollisionPolicy::Reject => {
                return Err(Error::mapping_conflict(
                    class.clone(),
                    key,
                    existing.full_path(),
                    binding.full_path(),
                ));
            }
            CollisionPolicy::LastWriteWins => {
                warn!(
                    class = %class,
                    key = %key,
                    replaced = existing.full_path(),
                    by = binding.full_path(),
                    "binding collision, keeping the later binding"
                );
            }
        }
    }

    index.insert(key, binding.clone());
    Ok(())
}

impl<'a, R> Walk<'a, R>
where
    R: TypeResolver + ?Sized,
{
    /// Collects the bindings of `class` and its ancestors. `prefix` is the
    /// full path of the embedding container, empty at the root.
    fn visit_class(&mut self, class: &ClassId, prefix: &str) -> Result<()> {
        let depth = self.stack.len();
        let mut descriptor = self.enter(class)?;

        loop {
            let properties = descriptor.declared_properties();

            if descriptor.ancestor().is_none() && properties.is_empty() {
                break;
            }

            for property in properties {
                self.visit_property(descriptor, property, prefix)?;
            }

            let Some(ancestor) = descriptor.ancestor() else {
                break;
            };

            descriptor = self
                .enter(ancestor)
                .map_err(|e| e.context(err!("ancestor of {}", descriptor.class_id())))?;
        }

        self.stack.truncate(depth);
        Ok(())
    }

    fn visit_property(
        &mut self,
        owner: &dyn TypeDescriptor,
        property: &Property,
        prefix: &str,
    ) -> Result<()> {
        let full_path = self.join(prefix, &property.name);

        if property.is_embedded() {
            return self.visit_class(&property.ty, &full_path).map_err(|e| {
                e.context(err!(
                    "embedded property `{}` of {}",
                    property.name,
                    owner.class_id()
                ))
            });
        }

        if property.is_excluded() {
            trace!(class = %owner.class_id(), property = %full_path, "skipping excluded property");
            return Ok(());
        }

        let store_field_name = match property.explicit_storage_name() {
            Some(name) => name.to_string(),
            None => Name::new(&property.name).upper_snake_case(),
        };

        trace!(
            class = %owner.class_id(),
            property = %full_path,
            store_field_name = %store_field_name,
            "binding property"
        );

        self.bindings.insert(PropertyBinding::new(
            property.name.clone(),
            full_path,
            store_field_name,
            property.ty.clone(),
        ));

        Ok(())
    }

    fn enter(&mut self, class: &ClassId) -> Result<&'a dyn TypeDescriptor> {
        if self.stack.contains(class) {
            let mut path = self.stack.clone();
            path.push(class.clone());
            return Err(Error::cyclic_type(path));
        }

        let resolver = self.resolver;
        let descriptor = resolver
            .resolve(class)
            .ok_or_else(|| Error::class_not_found(class.clone()))?;

        self.stack.push(class.clone());
        Ok(descriptor)
    }

    fn join(&self, prefix: &str, name: &str) -> String {
        if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}{}{name}", self.config.path_separator)
        }
    }
}
