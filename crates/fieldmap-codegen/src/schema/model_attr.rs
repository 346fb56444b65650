use super::ErrorSet;

#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Class identifier override: `#[entity(name = "...")]`
    pub(crate) name: Option<syn::LitStr>,

    /// Entity this one extends: `#[entity(extends = Path)]`
    pub(crate) extends: Option<syn::Path>,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if !attr.path().is_ident("entity") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    if self.name.is_some() {
                        return Err(meta.error("duplicate `name` argument"));
                    }
                    self.name = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("extends") {
                    if self.extends.is_some() {
                        return Err(meta.error("duplicate `extends` argument"));
                    }
                    self.extends = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("expected `name` or `extends`"))
                }
            });

            errs.check(res);
        }

        errs.finish(())
    }
}
