use super::{Column, ErrorSet};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Property name, the field identifier without any `r#` prefix
    pub(crate) name: syn::LitStr,

    /// Declared field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[embedded]`
    pub(crate) embedded: Option<syn::Attribute>,

    /// Set if the field is annotated with `#[transient]`
    pub(crate) transient: Option<syn::Attribute>,

    /// Explicit storage field name
    pub(crate) column: Option<Column>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let name = syn::LitStr::new(&ident.unraw().to_string(), ident.span());

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("embedded") {
                if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else if attrs.embedded.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[embedded] attribute",
                    ));
                } else {
                    attrs.embedded = Some(attr.clone());
                }
            } else if attr.path().is_ident("transient") {
                if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else if attrs.transient.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[transient] attribute",
                    ));
                } else {
                    attrs.transient = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    attrs.column = errs.check(Column::from_ast(attr));
                }
            }
        }

        if let Some(attr) = &attrs.embedded {
            if attrs.transient.is_some() {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "#[embedded] and #[transient] cannot be combined on the same field",
                ));
            }

            if attrs.column.is_some() {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "embedded fields cannot have a column name",
                ));
            }
        }

        if let (Some(attr), Some(_)) = (&attrs.transient, &attrs.column) {
            errs.push(syn::Error::new_spanned(
                attr,
                "transient fields cannot have a column name",
            ));
        }

        errs.finish(Self {
            attrs,
            name,
            ty: field.ty.clone(),
        })
    }
}
