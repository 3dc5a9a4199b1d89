use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

type SlotKey = (TypeId, TypeId);
type AnySlot = &'static (dyn Any + Send + Sync);

/// Holds process-lifetime instances for [`crate::Shared`] bindings.
///
/// There is one lazily initialized slot per (interface, implementation) pair.
/// An instance is constructed at most once per slot, even when several threads
/// race to resolve it, and is never dropped. The registry only guards the
/// construction - instances that are used concurrently through aliasing
/// handles need to synchronize internally.
pub struct SharedRegistry {
    slots: Mutex<HashMap<SlotKey, AnySlot>>,
}

static GLOBAL: OnceLock<SharedRegistry> = OnceLock::new();

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedRegistry {
    /// Creates an isolated registry.
    ///
    /// Slots are leaked like those of the global registry, so instances
    /// constructed here outlive the registry itself.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Registry used by all [`crate::Shared`] bindings of all containers
    pub fn global() -> &'static SharedRegistry {
        GLOBAL.get_or_init(SharedRegistry::new)
    }

    /// Returns the instance for the `(Iface, Impl)` pair, calling `init` if this
    /// is the first request.
    ///
    /// `init` runs without the registry lock held, so it may resolve other
    /// shared instances. Requesting the same pair from within its own `init`
    /// deadlocks.
    pub fn get_or_init<Iface, Impl>(&self, init: impl FnOnce() -> Impl) -> &'static Impl
    where
        Iface: 'static + ?Sized,
        Impl: 'static + Send + Sync,
    {
        self.slot::<Iface, Impl>().get_or_init(|| {
            tracing::debug!(
                interface = type_name::<Iface>(),
                implementation = type_name::<Impl>(),
                "Constructing shared instance"
            );
            init()
        })
    }

    /// Returns the instance if it was already constructed
    pub fn get<Iface, Impl>(&self) -> Option<&'static Impl>
    where
        Iface: 'static + ?Sized,
        Impl: 'static + Send + Sync,
    {
        self.slot::<Iface, Impl>().get()
    }

    /// Number of (interface, implementation) pairs that were requested so far
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot<Iface, Impl>(&self) -> &'static OnceLock<Impl>
    where
        Iface: 'static + ?Sized,
        Impl: 'static + Send + Sync,
    {
        let key = (TypeId::of::<Iface>(), TypeId::of::<Impl>());

        let slot: AnySlot = *self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert_with(|| {
                let slot: &'static OnceLock<Impl> = Box::leak(Box::new(OnceLock::new()));
                slot as AnySlot
            });

        slot.downcast_ref()
            .expect("Slot keyed by the TypeId of Impl holds a OnceLock<Impl>")
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
