use super::{ErrorSet, Field, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Struct-level `#[entity(...)]` arguments
    pub(crate) attr: ModelAttr,

    /// Entity fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let named = match &ast.fields {
            syn::Fields::Named(node) => Some(node),
            syn::Fields::Unit => None,
            syn::Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &ast.fields,
                    "entity fields must be named",
                ));
            }
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "entity generics are not supported",
            ));
        }

        let mut attr = ModelAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        errs.check(attr.populate_from_ast(&ast.attrs));

        for node in named.into_iter().flat_map(|node| node.named.iter()) {
            fields.extend(errs.check(Field::from_ast(node)));
        }

        errs.finish(Self {
            ident: ast.ident.clone(),
            attr,
            fields,
        })
    }

    /// Types that must be registered alongside this one.
    pub(crate) fn dependencies(&self) -> impl Iterator<Item = syn::Type> + '_ {
        let extends = self.attr.extends.iter().map(|path| {
            syn::Type::Path(syn::TypePath {
                qself: None,
                path: path.clone(),
            })
        });

        let embedded = self
            .fields
            .iter()
            .filter(|field| field.attrs.embedded.is_some())
            .map(|field| field.ty.clone());

        extends.chain(embedded)
    }
}
