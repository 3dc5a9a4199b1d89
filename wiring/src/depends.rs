use std::any::{Any, TypeId};

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Slot in which a consumer receives its dependency on interface `I`.
///
/// Consumers declare one slot per interface they depend on and derive
/// [`Dependent`] so that a [`Container`] can populate them:
///
/// ```
/// use wiring::{Dependent, Depends, Uses};
///
/// trait Clock: Send + Sync {
///     fn now(&self) -> u64;
/// }
///
/// #[derive(Default, Dependent)]
/// struct Scheduler {
///     clock: Depends<dyn Clock>,
///     interval: u64,
/// }
///
/// impl Scheduler {
///     fn next_tick(&self) -> Option<u64> {
///         let clock = self.dependency::<dyn Clock>()?;
///         Some(clock.now() + self.interval)
///     }
/// }
///
/// // Nothing was injected yet
/// assert_eq!(Scheduler::default().next_tick(), None);
/// ```
pub struct Depends<I: ?Sized + 'static> {
    handle: Handle<I>,
}

impl<I: ?Sized + 'static> Depends<I> {
    pub const fn new() -> Self {
        Self {
            handle: Handle::empty(),
        }
    }

    pub fn get(&self) -> Option<&I> {
        self.handle.get()
    }

    pub fn get_mut(&mut self) -> Option<&mut I> {
        self.handle.get_mut()
    }

    pub fn handle(&self) -> &Handle<I> {
        &self.handle
    }

    /// Replaces the current handle, dropping the previous one
    pub fn inject(&mut self, handle: Handle<I>) {
        self.handle = handle;
    }

    pub fn take(&mut self) -> Handle<I> {
        self.handle.take()
    }
}

impl<I: ?Sized + 'static> Default for Depends<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ?Sized + 'static> Clone for Depends<I> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
        }
    }
}

impl<I: ?Sized + 'static> std::fmt::Debug for Depends<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Depends").field(&self.handle).finish()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Implemented by a consumer once for every interface it declares a slot for.
/// A consumer cannot declare two slots for the same interface.
pub trait DependsOn<I: ?Sized + 'static> {
    fn slot(&self) -> &Depends<I>;
    fn slot_mut(&mut self) -> &mut Depends<I>;
}

/// Lets a container find a consumer's slots by interface type.
///
/// Usually derived, see [`Depends`].
pub trait Dependent {
    fn type_info(&self) -> TypeInfo;

    /// Interfaces this consumer declares slots for
    fn dependencies(&self) -> Vec<TypeInfo>;

    /// Returns the `Depends<I>` slot where `TypeId::of::<I>() == iface`
    fn slot_for(&mut self, iface: TypeId) -> Option<&mut dyn Any>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Accessors addressing a consumer's slots by interface type, e.g.
/// `self.dependency::<dyn Logger>()`. Referencing an interface the consumer
/// has no slot for does not compile.
pub trait Uses {
    /// Returns the injected instance or `None` if the slot is empty
    fn dependency<I>(&self) -> Option<&I>
    where
        I: ?Sized + 'static,
        Self: DependsOn<I>,
    {
        DependsOn::<I>::slot(self).get()
    }

    fn dependency_mut<I>(&mut self) -> Option<&mut I>
    where
        I: ?Sized + 'static,
        Self: DependsOn<I>,
    {
        DependsOn::<I>::slot_mut(self).get_mut()
    }

    /// Like [`Uses::dependency`] but reports an empty slot as an error
    fn require<I>(&self) -> Result<&I, InjectionError>
    where
        I: ?Sized + 'static,
        Self: DependsOn<I>,
    {
        DependsOn::<I>::slot(self).handle().require()
    }

    fn inject<I>(&mut self, handle: Handle<I>)
    where
        I: ?Sized + 'static,
        Self: DependsOn<I>,
    {
        DependsOn::<I>::slot_mut(self).inject(handle);
    }
}

impl<T: Dependent + ?Sized> Uses for T {}
