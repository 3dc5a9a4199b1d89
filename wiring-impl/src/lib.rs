extern crate proc_macro;

mod container;
mod dependent;
mod types;

use proc_macro::TokenStream;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Turns a struct whose fields are bindings into a container.
///
/// Generates `new()`, `Default`, `wiring::Container` and one
/// `wiring::Binds<Iface>` per field. Binding the same interface twice is
/// rejected at compile time.
#[proc_macro_attribute]
pub fn container(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "The #[container] macro does not accept arguments",
        )
        .to_compile_error()
        .into();
    }

    let ast: syn::ItemStruct = match syn::parse(item) {
        Ok(ast) => ast,
        Err(err) => return err.to_compile_error().into(),
    };

    container::container_from_struct(ast).into()
}

/// Exposes every `Depends<Iface>` field of a struct as an injectable slot.
#[proc_macro_derive(Dependent)]
pub fn dependent(item: TokenStream) -> TokenStream {
    let ast: syn::DeriveInput = match syn::parse(item) {
        Ok(ast) => ast,
        Err(err) => return err.to_compile_error().into(),
    };

    dependent::dependent_from_derive(&ast).into()
}
