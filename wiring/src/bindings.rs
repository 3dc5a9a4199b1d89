use std::any::{type_name, Any};
use std::sync::{Arc, PoisonError, RwLock};

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Creation and lifetime strategy of a [`Binding`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Fresh, exclusively owned instance per resolution
    Owner,
    /// One process-lifetime instance shared by every resolution
    Shared,
    /// Instance produced by a closure installed at runtime
    Factory,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Owner => write!(f, "owner"),
            Strategy::Shared => write!(f, "shared"),
            Strategy::Factory => write!(f, "factory"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Associates an interface with a strategy that produces [`Handle`]s to it
pub trait Binding: Send + Sync + 'static {
    type Interface: ?Sized + 'static;

    const STRATEGY: Strategy;

    /// Concrete type the binding constructs, `None` when it is not known
    /// statically
    fn implementation() -> Option<TypeInfo>;

    fn resolve(&self) -> Handle<Self::Interface>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Converts a concrete `Impl` into the interface it is bound to.
///
/// Unsizing coercions can only be written where both types are known, so the
/// casts are captured as plain functions at that point (usually by the
/// [`container`](macro@crate::container) macro).
pub struct TypeCaster<Impl: 'static, Iface: 'static + ?Sized> {
    pub cast_box: fn(Box<Impl>) -> Box<Iface>,
    pub cast_ref: fn(&'static Impl) -> &'static Iface,
}

impl<Impl: 'static, Iface: 'static + ?Sized> TypeCaster<Impl, Iface> {
    pub fn new(
        cast_box: fn(Box<Impl>) -> Box<Iface>,
        cast_ref: fn(&'static Impl) -> &'static Iface,
    ) -> Self {
        Self { cast_box, cast_ref }
    }
}

impl<Impl: 'static, Iface: 'static + ?Sized> Clone for TypeCaster<Impl, Iface> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Impl: 'static, Iface: 'static + ?Sized> Copy for TypeCaster<Impl, Iface> {}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Owner
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Constructs a new `Impl` on every resolution and hands it out as an owning
/// [`Handle`]. Cloning the handle constructs another `Impl` the same way.
///
/// Every resolution is a distinct instance, even for zero-sized `Impl`s
/// ([`Handle::same_instance`] never reports two owning handles as the same).
pub struct Owner<Iface: 'static + ?Sized, Impl: 'static> {
    caster: TypeCaster<Impl, Iface>,
}

impl<Iface: 'static + ?Sized, Impl: 'static> Owner<Iface, Impl> {
    pub fn new(caster: TypeCaster<Impl, Iface>) -> Self {
        Self { caster }
    }
}

impl<Iface, Impl> Binding for Owner<Iface, Impl>
where
    Iface: 'static + ?Sized,
    Impl: 'static + Default,
{
    type Interface = Iface;

    const STRATEGY: Strategy = Strategy::Owner;

    fn implementation() -> Option<TypeInfo> {
        Some(TypeInfo::of::<Impl>())
    }

    fn resolve(&self) -> Handle<Iface> {
        tracing::trace!(
            interface = type_name::<Iface>(),
            implementation = type_name::<Impl>(),
            "Resolving owner binding"
        );

        let cast = self.caster.cast_box;
        Handle::from_fn(move || cast(Box::new(Impl::default())))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Shared
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Lazily constructs a single `Impl` for the life of the process and hands out
/// non-owning [`Handle`]s to it. The instance lives in
/// [`SharedRegistry::global`], so every container binding the same
/// (`Iface`, `Impl`) pair observes the same instance.
pub struct Shared<Iface: 'static + ?Sized, Impl: 'static> {
    caster: TypeCaster<Impl, Iface>,
}

impl<Iface: 'static + ?Sized, Impl: 'static> Shared<Iface, Impl> {
    pub fn new(caster: TypeCaster<Impl, Iface>) -> Self {
        Self { caster }
    }
}

impl<Iface, Impl> Binding for Shared<Iface, Impl>
where
    Iface: 'static + ?Sized,
    Impl: 'static + Default + Send + Sync,
{
    type Interface = Iface;

    const STRATEGY: Strategy = Strategy::Shared;

    fn implementation() -> Option<TypeInfo> {
        Some(TypeInfo::of::<Impl>())
    }

    fn resolve(&self) -> Handle<Iface> {
        tracing::trace!(
            interface = type_name::<Iface>(),
            implementation = type_name::<Impl>(),
            "Resolving shared binding"
        );

        let inst = SharedRegistry::global().get_or_init::<Iface, Impl>(Impl::default);
        Handle::from_instance((self.caster.cast_ref)(inst))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Factory
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type FactoryFn<Iface> = Arc<dyn Fn() -> Arc<Iface> + Send + Sync>;

/// Defers creation to a closure installed at runtime (see
/// [`Container::set_factory`]). Resolves into a shared [`Handle`] holding
/// whatever the current closure returns, or an empty handle while no closure
/// is installed.
///
/// Installing replaces the previous closure unconditionally. The slot is
/// guarded by a lock of its own, and the closure is invoked after the lock is
/// released so it may call back into the container.
pub struct Factory<Iface: 'static + ?Sized> {
    factory: RwLock<Option<FactoryFn<Iface>>>,
}

impl<Iface: 'static + ?Sized> Default for Factory<Iface> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Iface: 'static + ?Sized> Factory<Iface> {
    pub fn new() -> Self {
        Self {
            factory: RwLock::new(None),
        }
    }

    pub fn install(&self, factory: impl Fn() -> Arc<Iface> + Send + Sync + 'static) {
        self.install_fn(Arc::new(factory));
    }

    pub fn install_fn(&self, factory: FactoryFn<Iface>) {
        tracing::debug!(interface = type_name::<Iface>(), "Installing factory");

        *self
            .factory
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(factory);
    }

    /// Removes the current closure, subsequent resolutions yield empty handles
    pub fn clear(&self) {
        *self
            .factory
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn is_installed(&self) -> bool {
        self.current().is_some()
    }

    fn current(&self) -> Option<FactoryFn<Iface>> {
        self.factory
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<Iface: 'static + ?Sized> Binding for Factory<Iface> {
    type Interface = Iface;

    const STRATEGY: Strategy = Strategy::Factory;

    fn implementation() -> Option<TypeInfo> {
        None
    }

    fn resolve(&self) -> Handle<Iface> {
        let Some(factory) = self.current() else {
            tracing::trace!(
                interface = type_name::<Iface>(),
                "Factory is not installed, resolving to an empty handle"
            );
            return Handle::empty();
        };

        tracing::trace!(interface = type_name::<Iface>(), "Resolving factory binding");
        Handle::from_arc(factory())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// AnyBinding
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Type-erased view of a [`Binding`] that lets a container walk its binding
/// list without knowing the interface types
pub trait AnyBinding: Send + Sync {
    fn interface(&self) -> TypeInfo;
    fn implementation(&self) -> Option<TypeInfo>;
    fn strategy(&self) -> Strategy;

    /// Resolves into a `Box<Handle<Interface>>`
    fn resolve_any(&self) -> Box<dyn Any>;

    /// Resolves and injects the handle if `slot` is a `Depends<Interface>`,
    /// returns whether it was
    fn inject_into(&self, slot: &mut dyn Any) -> bool;

    fn as_any(&self) -> &dyn Any;
}

impl<B: Binding> AnyBinding for B {
    fn interface(&self) -> TypeInfo {
        TypeInfo::of::<B::Interface>()
    }

    fn implementation(&self) -> Option<TypeInfo> {
        <B as Binding>::implementation()
    }

    fn strategy(&self) -> Strategy {
        B::STRATEGY
    }

    fn resolve_any(&self) -> Box<dyn Any> {
        Box::new(self.resolve())
    }

    fn inject_into(&self, slot: &mut dyn Any) -> bool {
        match slot.downcast_mut::<Depends<B::Interface>>() {
            Some(slot) => {
                slot.inject(self.resolve());
                true
            }
            None => false,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
