use crate::schema::{Field, Model};

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn model(model: &Model) -> TokenStream {
    let fieldmap = quote!(_fieldmap::codegen_support);
    let ident = &model.ident;

    let class_name = match &model.attr.name {
        Some(name) => quote!(#name),
        None => quote!(concat!(module_path!(), "::", stringify!(#ident))),
    };

    let extends = model.attr.extends.as_ref().map(|path| {
        quote! {
            .extends(<#path as #fieldmap::Entity>::class_id())
        }
    });

    let properties = model
        .fields
        .iter()
        .map(|field| expand_property(field, &fieldmap));

    let dependencies = model.dependencies().map(|ty| {
        quote! {
            <#ty as #fieldmap::Entity>::register(catalog);
        }
    });

    wrap_in_const(quote! {
        impl #fieldmap::Entity for #ident {
            fn class_id() -> #fieldmap::ClassId {
                static ID: std::sync::OnceLock<#fieldmap::ClassId> = std::sync::OnceLock::new();
                ID.get_or_init(|| #fieldmap::ClassId::new(#class_name)).clone()
            }

            fn descriptor() -> #fieldmap::Model {
                #fieldmap::Model::new(<Self as #fieldmap::Entity>::class_id())
                    #extends
                    #( .property(#properties) )*
            }

            fn register(catalog: &mut #fieldmap::Catalog) {
                if catalog.contains(&<Self as #fieldmap::Entity>::class_id()) {
                    return;
                }

                catalog.insert(<Self as #fieldmap::Entity>::descriptor());
                #( #dependencies )*
            }
        }
    })
}

fn expand_property(field: &Field, fieldmap: &TokenStream) -> TokenStream {
    let name = &field.name;
    let ty = &field.ty;

    if field.attrs.embedded.is_some() {
        return quote! {
            #fieldmap::Property::new(#name, <#ty as #fieldmap::Entity>::class_id()).embedded()
        };
    }

    let mut property = quote! {
        #fieldmap::Property::new(#name, #fieldmap::type_name::<#ty>())
    };

    if field.attrs.transient.is_some() {
        property = quote!(#property.transient());
    }

    if let Some(column) = &field.attrs.column {
        let column = &column.name;
        property = quote!(#property.column(#column));
    }

    property
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use fieldmap as _fieldmap;
            #code
        };
    }
}
