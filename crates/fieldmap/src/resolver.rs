use crate::{Entity, MappingContext, PropertyBinding, Result};

/// Looks up bindings with the entity given as a type parameter.
///
/// ```
/// # use fieldmap::{Catalog, Entity, MappingContext, Resolver};
/// #[derive(Entity)]
/// #[allow(non_snake_case)]
/// struct User {
///     #[column("user_name")]
///     name: String,
///     userId: i64,
/// }
///
/// # fn main() -> fieldmap::Result<()> {
/// let mut catalog = Catalog::new();
/// catalog.register::<User>();
///
/// let mut cx = MappingContext::default();
/// cx.register(&catalog, [User::class_id()])?;
///
/// let resolver = Resolver::new(&cx);
/// let columns = resolver.to_store_names::<User, _>(&["name", "userId"])?;
/// assert_eq!(columns, ["user_name", "USER_ID"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    cx: &'a MappingContext,
}

impl<'a> Resolver<'a> {
    pub fn new(cx: &'a MappingContext) -> Resolver<'a> {
        Resolver { cx }
    }

    pub fn context(&self) -> &'a MappingContext {
        self.cx
    }

    pub fn resolve_by_store_name<T: Entity>(
        &self,
        store_name: &str,
    ) -> Option<&'a PropertyBinding> {
        self.cx.resolve_by_store_name(&T::class_id(), store_name)
    }

    pub fn resolve_by_property_name<T: Entity>(
        &self,
        property: &str,
    ) -> Option<&'a PropertyBinding> {
        self.cx.resolve_by_property_name(&T::class_id(), property)
    }

    pub fn to_store_name<T: Entity>(&self, property: &str) -> String {
        self.cx.to_store_name(&T::class_id(), property)
    }

    pub fn to_store_names<T, S>(&self, properties: &[S]) -> Result<Vec<String>>
    where
        T: Entity,
        S: AsRef<str>,
    {
        self.cx.to_store_names(&T::class_id(), properties)
    }

    pub fn resolve<T: Entity>(&self, property: &str) -> Result<String> {
        self.cx.resolve(&T::class_id(), property)
    }
}
