use std::any::{type_name, TypeId};

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InjectionError {
    #[error(transparent)]
    Unresolved(UnresolvedDependencyError),
    #[error(transparent)]
    FactoryNotBound(FactoryNotBoundError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl InjectionError {
    pub fn unresolved<Iface: 'static + ?Sized>() -> Self {
        Self::Unresolved(UnresolvedDependencyError {
            type_id: TypeId::of::<Iface>(),
            type_name: type_name::<Iface>(),
        })
    }

    pub fn factory_not_bound<Iface: 'static + ?Sized>() -> Self {
        Self::FactoryNotBound(FactoryNotBoundError {
            type_id: TypeId::of::<Iface>(),
            type_name: type_name::<Iface>(),
        })
    }

    /// Returns `true` if the error concerns the interface `Iface`
    pub fn is_for<Iface: 'static + ?Sized>(&self) -> bool {
        let type_id = TypeId::of::<Iface>();
        match self {
            Self::Unresolved(e) => e.type_id == type_id,
            Self::FactoryNotBound(e) => e.type_id == type_id,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A dependency was required but its handle is empty, either because the
/// container has no binding for it or because a factory was never installed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unresolved dependency: {type_name}")]
pub struct UnresolvedDependencyError {
    pub type_id: TypeId,
    pub type_name: &'static str,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No factory binding for type: {type_name}")]
pub struct FactoryNotBoundError {
    pub type_id: TypeId,
    pub type_name: &'static str,
}
