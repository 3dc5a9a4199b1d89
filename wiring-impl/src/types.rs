use quote::ToTokens;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) enum BindingKind {
    Owner {
        iface: syn::Type,
        implementation: syn::Type,
    },
    Shared {
        iface: syn::Type,
        implementation: syn::Type,
    },
    Factory {
        iface: syn::Type,
    },
}

impl BindingKind {
    pub(crate) fn iface(&self) -> &syn::Type {
        match self {
            Self::Owner { iface, .. } | Self::Shared { iface, .. } | Self::Factory { iface } => {
                iface
            }
        }
    }
}

pub(crate) fn deduce_binding_kind(typ: &syn::Type) -> Option<BindingKind> {
    let (ident, args) = get_last_segment(typ)?;

    match (ident.to_string().as_str(), args.as_slice()) {
        ("Owner", [iface, implementation]) => Some(BindingKind::Owner {
            iface: iface.clone(),
            implementation: implementation.clone(),
        }),
        ("Shared", [iface, implementation]) => Some(BindingKind::Shared {
            iface: iface.clone(),
            implementation: implementation.clone(),
        }),
        ("Factory", [iface]) => Some(BindingKind::Factory {
            iface: iface.clone(),
        }),
        _ => None,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) fn get_depends_element_type(typ: &syn::Type) -> Option<syn::Type> {
    let (ident, args) = get_last_segment(typ)?;

    match (ident.to_string().as_str(), args.as_slice()) {
        ("Depends", [iface]) => Some(iface.clone()),
        _ => None,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Text form of a type used to compare interfaces for equality. Spacing is
/// normalized by re-printing the tokens.
pub(crate) fn type_key(typ: &syn::Type) -> String {
    typ.to_token_stream().to_string()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn get_last_segment(typ: &syn::Type) -> Option<(&syn::Ident, Vec<syn::Type>)> {
    let syn::Type::Path(typepath) = typ else {
        return None;
    };

    if typepath.qself.is_some() {
        return None;
    }

    let segment = typepath.path.segments.last()?;

    let args = match &segment.arguments {
        syn::PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                syn::GenericArgument::Type(t) => Some(t.clone()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    Some((&segment.ident, args))
}
