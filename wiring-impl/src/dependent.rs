use proc_macro2::TokenStream;
use quote::quote;

use crate::types::get_depends_element_type;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) fn dependent_from_derive(ast: &syn::DeriveInput) -> TokenStream {
    let syn::Data::Struct(data) = &ast.data else {
        return syn::Error::new_spanned(
            &ast.ident,
            "#[derive(Dependent)] can only be used on structs",
        )
        .to_compile_error();
    };

    let slots: Vec<(syn::Member, syn::Type)> = data
        .fields
        .iter()
        .enumerate()
        .filter_map(|(index, field)| {
            let iface = get_depends_element_type(&field.ty)?;
            let member = match &field.ident {
                Some(ident) => syn::Member::Named(ident.clone()),
                None => syn::Member::Unnamed(syn::Index::from(index)),
            };
            Some((member, iface))
        })
        .collect();

    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let slot_member: Vec<_> = slots.iter().map(|(member, _)| member).collect();
    let slot_iface: Vec<_> = slots.iter().map(|(_, iface)| iface).collect();

    quote! {
        #(
            impl #impl_generics ::wiring::DependsOn<#slot_iface> for #name #ty_generics #where_clause {
                fn slot(&self) -> &::wiring::Depends<#slot_iface> {
                    &self.#slot_member
                }

                fn slot_mut(&mut self) -> &mut ::wiring::Depends<#slot_iface> {
                    &mut self.#slot_member
                }
            }
        )*

        impl #impl_generics ::wiring::Dependent for #name #ty_generics #where_clause {
            fn type_info(&self) -> ::wiring::TypeInfo {
                ::wiring::TypeInfo::of::<Self>()
            }

            fn dependencies(&self) -> ::std::vec::Vec<::wiring::TypeInfo> {
                ::std::vec![
                    #( ::wiring::TypeInfo::of::<#slot_iface>(), )*
                ]
            }

            fn slot_for(
                &mut self,
                iface: ::std::any::TypeId,
            ) -> ::std::option::Option<&mut dyn ::std::any::Any> {
                #(
                    if iface == ::std::any::TypeId::of::<#slot_iface>() {
                        return ::std::option::Option::Some(&mut self.#slot_member);
                    }
                )*
                let _ = iface;
                ::std::option::Option::None
            }
        }
    }
}
