use std::any::TypeId;
use std::sync::Arc;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Statically locates the binding of interface `I` within a container.
///
/// Implemented by the [`container`](macro@crate::container) macro once per binding, so two
/// bindings of the same interface are conflicting implementations.
pub trait Binds<I: ?Sized + 'static> {
    type Binding: Binding<Interface = I>;

    fn binding(&self) -> &Self::Binding;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Composition root holding a fixed list of bindings.
///
/// Normally implemented with the [`container`](macro@crate::container) macro, which also
/// guarantees that every interface is bound at most once.
pub trait Container {
    /// Iterates the bindings in declaration order
    fn bindings(&self) -> Box<dyn Iterator<Item = &dyn AnyBinding> + '_>;

    /// Populates every slot of `consumer` that has a matching binding. Slots
    /// without a binding are left untouched.
    fn inject_all(&self, consumer: &mut dyn Dependent) {
        for binding in self.bindings() {
            let iface = binding.interface();

            let Some(slot) = consumer.slot_for(iface.id) else {
                continue;
            };

            if binding.inject_into(slot) {
                tracing::debug!(
                    consumer = consumer.type_info().type_name,
                    interface = iface.type_name,
                    strategy = %binding.strategy(),
                    "Injected dependency"
                );
            }
        }
    }

    /// Injects dependencies into the constructed `consumer` and returns it
    fn make<C>(&self, consumer: C) -> C
    where
        C: Dependent,
        Self: Sized,
    {
        let mut consumer = consumer;
        self.inject_all(&mut consumer);
        consumer
    }

    fn make_with<C, F>(&self, ctor: F) -> C
    where
        C: Dependent,
        F: FnOnce() -> C,
        Self: Sized,
    {
        self.make(ctor())
    }

    fn make_default<C>(&self) -> C
    where
        C: Dependent + Default,
        Self: Sized,
    {
        self.make(C::default())
    }

    /// Resolves the binding of interface `I` found at runtime, or returns an
    /// empty handle if the container does not bind `I`
    fn get<I>(&self) -> Handle<I>
    where
        I: ?Sized + 'static,
        Self: Sized,
    {
        let iface = TypeId::of::<I>();

        self.bindings()
            .find(|b| b.interface().id == iface)
            .and_then(|b| b.resolve_any().downcast::<Handle<I>>().ok())
            .map(|h| *h)
            .unwrap_or_default()
    }

    /// Resolves the binding of interface `I`. Does not compile if the
    /// container does not bind `I`.
    fn resolve<I>(&self) -> Handle<I>
    where
        I: ?Sized + 'static,
        Self: Binds<I> + Sized,
    {
        Binds::<I>::binding(self).resolve()
    }

    /// Installs the closure of the [`Factory`] binding of interface `I`,
    /// replacing the previous one.
    ///
    /// When the container has no factory binding for `I` nothing changes and
    /// [`InjectionError::FactoryNotBound`] is returned.
    fn set_factory<I>(
        &self,
        factory: impl Fn() -> Arc<I> + Send + Sync + 'static,
    ) -> Result<(), InjectionError>
    where
        I: ?Sized + 'static,
        Self: Sized,
    {
        let binding = self
            .bindings()
            .find_map(|b| b.as_any().downcast_ref::<Factory<I>>());

        let Some(binding) = binding else {
            tracing::warn!(
                interface = std::any::type_name::<I>(),
                "Container has no factory binding for interface"
            );
            return Err(InjectionError::factory_not_bound::<I>());
        };

        binding.install(factory);
        Ok(())
    }
}
