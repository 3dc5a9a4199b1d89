use multimap::MultiMap;
use proc_macro2::TokenStream;
use quote::quote;

use crate::types::{deduce_binding_kind, type_key, BindingKind};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct BindingField {
    ident: syn::Ident,
    typ: syn::Type,
    kind: BindingKind,
}

pub(crate) fn container_from_struct(ast: syn::ItemStruct) -> TokenStream {
    let syn::Fields::Named(named) = &ast.fields else {
        return syn::Error::new_spanned(
            &ast,
            "The #[container] macro can only be used on a struct with named fields",
        )
        .to_compile_error();
    };

    let mut fields = Vec::new();
    let mut errors: Option<syn::Error> = None;

    for field in &named.named {
        let Some(kind) = deduce_binding_kind(&field.ty) else {
            push_error(
                &mut errors,
                syn::Error::new_spanned(
                    &field.ty,
                    "Container fields must be bindings: Owner<Iface, Impl>, Shared<Iface, Impl> \
                     or Factory<Iface>",
                ),
            );
            continue;
        };

        fields.push(BindingField {
            // Named fields always carry an ident
            ident: field.ident.clone().unwrap(),
            typ: field.ty.clone(),
            kind,
        });
    }

    if let Err(err) = check_no_duplicate(&fields) {
        push_error(&mut errors, err);
    }

    if let Some(errors) = errors {
        let compile_errors = errors.to_compile_error();
        return quote! {
            #ast
            #compile_errors
        };
    }

    implement_container(&ast, &fields)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Counts, for every bound interface, how many bindings target it. The
/// configuration is valid only when the total equals the number of bindings,
/// i.e. every interface is bound exactly once.
fn check_no_duplicate(fields: &[BindingField]) -> Result<(), syn::Error> {
    let mut occurrences: MultiMap<String, &syn::Type> = MultiMap::new();
    for f in fields {
        occurrences.insert(type_key(f.kind.iface()), f.kind.iface());
    }

    let total: usize = fields
        .iter()
        .map(|f| occurrences.get_vec(&type_key(f.kind.iface())).map_or(0, Vec::len))
        .sum();

    if total == fields.len() {
        return Ok(());
    }

    let mut errors: Option<syn::Error> = None;
    for (key, ifaces) in occurrences.iter_all() {
        if ifaces.len() < 2 {
            continue;
        }
        for iface in &ifaces[1..] {
            push_error(
                &mut errors,
                syn::Error::new_spanned(
                    iface,
                    format!(
                        "Duplicate type mapping detected: `{key}` is bound {} times",
                        ifaces.len()
                    ),
                ),
            );
        }
    }

    match errors {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn push_error(errors: &mut Option<syn::Error>, err: syn::Error) {
    match errors {
        Some(errors) => errors.combine(err),
        None => *errors = Some(err),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn implement_container(ast: &syn::ItemStruct, fields: &[BindingField]) -> TokenStream {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let field_ident: Vec<_> = fields.iter().map(|f| &f.ident).collect();
    let field_type: Vec<_> = fields.iter().map(|f| &f.typ).collect();
    let field_iface: Vec<_> = fields.iter().map(|f| f.kind.iface()).collect();
    let field_ctor: Vec<_> = fields.iter().map(implement_ctor).collect();
    let num_bindings = fields.len();

    quote! {
        #ast

        impl #impl_generics #name #ty_generics #where_clause {
            pub fn new() -> Self {
                Self {
                    #( #field_ident: #field_ctor, )*
                }
            }
        }

        impl #impl_generics ::std::default::Default for #name #ty_generics #where_clause {
            fn default() -> Self {
                Self::new()
            }
        }

        impl #impl_generics ::wiring::Container for #name #ty_generics #where_clause {
            fn bindings(
                &self,
            ) -> ::std::boxed::Box<dyn ::std::iter::Iterator<Item = &dyn ::wiring::AnyBinding> + '_> {
                let bindings: [&dyn ::wiring::AnyBinding; #num_bindings] = [
                    #( &self.#field_ident, )*
                ];
                ::std::boxed::Box::new(bindings.into_iter())
            }
        }

        #(
            impl #impl_generics ::wiring::Binds<#field_iface> for #name #ty_generics #where_clause {
                type Binding = #field_type;

                fn binding(&self) -> &Self::Binding {
                    &self.#field_ident
                }
            }
        )*
    }
}

fn implement_ctor(field: &BindingField) -> TokenStream {
    let typ = &field.typ;

    match &field.kind {
        BindingKind::Owner {
            iface,
            implementation,
        }
        | BindingKind::Shared {
            iface,
            implementation,
        } => {
            let iface_ref = reference_target(iface);
            quote! {
                <#typ>::new(::wiring::TypeCaster::new(
                    |v: ::std::boxed::Box<#implementation>| -> ::std::boxed::Box<#iface> { v },
                    |v: &'static #implementation| -> &'static #iface_ref { v },
                ))
            }
        }
        BindingKind::Factory { .. } => quote! {
            <#typ>::new()
        },
    }
}

/// `&'static dyn A + Send` does not parse, multi-bound trait objects need
/// parentheses behind a reference
fn reference_target(iface: &syn::Type) -> TokenStream {
    match iface {
        syn::Type::TraitObject(obj) if obj.bounds.len() > 1 => quote! { (#iface) },
        _ => quote! { #iface },
    }
}
