extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(Entity, attributes(entity, embedded, transient, column))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    match fieldmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
