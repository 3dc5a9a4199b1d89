use std::sync::Arc;

use crate::InjectionError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Operation able to fabricate a fresh, independently owned instance. Stored
/// by [`Handle`]s in the owning representation and invoked on every clone.
pub type Recreate<I> = Arc<dyn Fn() -> Box<I> + Send + Sync>;

/// Which of the three ownership disciplines a [`Handle`] currently uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Non-owning reference to an instance that outlives the handle
    Raw,
    /// Exclusively owned instance that is rebuilt when the handle is cloned
    Owning,
    /// Reference-counted instance shared by all clones
    Shared,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Ownership-polymorphic reference to an instance of interface `I`.
///
/// Internally a handle is exactly one of:
/// - **raw** - a non-owning `&'static I`, or nothing at all for an empty handle
/// - **owning** - a `Box<I>` together with a [`Recreate`] operation
/// - **shared** - an `Arc<I>`
///
/// All three present the same access contract: [`Handle::get`] returns the
/// referent or `None` when the handle is empty. Accessing an empty handle never
/// panics.
///
/// Cloning follows the representation:
/// - raw handles are copied as shallow aliases
/// - owning handles call the stored recreation operation, so the clone refers to
///   a new instance with a different identity and none of the source's
///   transient state
/// - shared handles increment the reference count and keep the identity
///
/// The representation is chosen at construction and never changes in place.
/// Assigning a new handle drops the previous one according to its own rules,
/// and [`Handle::take`] moves the value out leaving an empty handle behind.
///
/// ```
/// use std::sync::Arc;
/// use wiring::{Handle, HandleKind};
///
/// trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// struct English(String);
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         format!("hello {}", self.0)
///     }
/// }
///
/// let owned = Handle::<dyn Greeter>::from_fn(|| Box::new(English("owned".into())));
/// let copy = owned.clone();
/// assert_eq!(copy.kind(), HandleKind::Owning);
/// assert!(!owned.same_instance(&copy));
///
/// let shared = Handle::<dyn Greeter>::from_arc(Arc::new(English("shared".into())));
/// assert!(shared.same_instance(&shared.clone()));
///
/// let empty = Handle::<dyn Greeter>::empty();
/// assert!(empty.get().is_none());
/// ```
pub struct Handle<I: ?Sized + 'static>(Repr<I>);

enum Repr<I: ?Sized + 'static> {
    Raw(Option<&'static I>),
    Owning {
        instance: Box<I>,
        recreate: Recreate<I>,
    },
    Shared(Arc<I>),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl<I: ?Sized + 'static> Handle<I> {
    /// Creates a handle that refers to nothing
    pub const fn empty() -> Self {
        Self(Repr::Raw(None))
    }

    /// Creates an owning handle by invoking `recreate` once and keeping it for
    /// subsequent clones
    pub fn from_fn(recreate: impl Fn() -> Box<I> + Send + Sync + 'static) -> Self {
        let recreate: Recreate<I> = Arc::new(recreate);
        let instance = recreate();
        Self(Repr::Owning { instance, recreate })
    }

    /// Creates an owning handle from an already constructed instance
    pub fn from_box(instance: Box<I>, recreate: Recreate<I>) -> Self {
        Self(Repr::Owning { instance, recreate })
    }

    /// Creates a non-owning handle
    pub const fn from_instance(instance: &'static I) -> Self {
        Self(Repr::Raw(Some(instance)))
    }

    /// Creates a shared handle
    pub fn from_arc(instance: Arc<I>) -> Self {
        Self(Repr::Shared(instance))
    }

    pub fn kind(&self) -> HandleKind {
        match &self.0 {
            Repr::Raw(_) => HandleKind::Raw,
            Repr::Owning { .. } => HandleKind::Owning,
            Repr::Shared(_) => HandleKind::Shared,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.0, Repr::Raw(None))
    }

    /// Returns the referent or `None` if the handle is empty
    pub fn get(&self) -> Option<&I> {
        match &self.0 {
            Repr::Raw(instance) => *instance,
            Repr::Owning { instance, .. } => Some(instance.as_ref()),
            Repr::Shared(instance) => Some(instance.as_ref()),
        }
    }

    /// Returns a mutable referent when the handle is its only holder: always
    /// for owning handles, for shared handles only while no clones exist, and
    /// never for raw handles.
    pub fn get_mut(&mut self) -> Option<&mut I> {
        match &mut self.0 {
            Repr::Raw(_) => None,
            Repr::Owning { instance, .. } => Some(instance.as_mut()),
            Repr::Shared(instance) => Arc::get_mut(instance),
        }
    }

    /// Like [`Handle::get`] but treats an empty handle as an error
    pub fn require(&self) -> Result<&I, InjectionError> {
        self.get().ok_or_else(InjectionError::unresolved::<I>)
    }

    /// Moves the value out, leaving an empty handle in its place
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Returns `true` if both handles refer to the same instance.
    ///
    /// Empty handles are never the same instance as anything. An owning handle
    /// is the sole holder of its instance, so it is only the same as itself.
    /// Raw and shared handles compare by address, where instances of zero-sized
    /// types have no meaningful identity.
    pub fn same_instance(&self, other: &Handle<I>) -> bool {
        if matches!(self.0, Repr::Owning { .. }) || matches!(other.0, Repr::Owning { .. }) {
            return std::ptr::eq(self, other);
        }

        match (self.get(), other.get()) {
            (Some(a), Some(b)) => std::ptr::addr_eq(a as *const I, b as *const I),
            _ => false,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl<I: ?Sized + 'static> Default for Handle<I> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<I: ?Sized + 'static> Clone for Handle<I> {
    fn clone(&self) -> Self {
        match &self.0 {
            Repr::Raw(instance) => Self(Repr::Raw(*instance)),
            Repr::Owning { recreate, .. } => Self(Repr::Owning {
                instance: recreate(),
                recreate: Arc::clone(recreate),
            }),
            Repr::Shared(instance) => Self(Repr::Shared(Arc::clone(instance))),
        }
    }
}

impl<I: ?Sized + 'static> From<Arc<I>> for Handle<I> {
    fn from(instance: Arc<I>) -> Self {
        Self::from_arc(instance)
    }
}

impl<I: ?Sized + 'static> From<&'static I> for Handle<I> {
    fn from(instance: &'static I) -> Self {
        Self::from_instance(instance)
    }
}

impl<I: ?Sized + 'static> std::fmt::Debug for Handle<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "Handle(<empty>)")
        } else {
            write!(f, "Handle({:?})", self.kind())
        }
    }
}
