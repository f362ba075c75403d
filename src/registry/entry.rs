//! Membership slot for a single registered delegate.

use std::sync::{Arc, Weak};

/// One entry in the membership set: a non-owning reference to a listener.
///
/// Holding the `Weak` keeps the shared *allocation* alive (not the value),
/// so the allocation address cannot be reused by another listener while
/// this slot is still in the set. Address comparison is therefore a sound
/// identity check for the slot's whole lifetime.
pub(crate) struct DelegateRef<C: ?Sized> {
    target: Weak<C>,
}

impl<C: ?Sized> DelegateRef<C> {
    pub(crate) fn new(delegate: &Arc<C>) -> Self {
        Self {
            target: Arc::downgrade(delegate),
        }
    }

    /// Strong reference to the listener, if it is still alive.
    pub(crate) fn upgrade(&self) -> Option<Arc<C>> {
        self.target.upgrade()
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.target.strong_count() > 0
    }

    /// True if this slot refers to the given listener.
    ///
    /// Identity is the address of the shared allocation, compared as a thin
    /// pointer so trait-object metadata never participates (two `Arc`s to
    /// the same allocation can carry vtable pointers from different
    /// codegen units).
    pub(crate) fn refers_to(&self, delegate: &Arc<C>) -> bool {
        self.target.as_ptr() as *const () == Arc::as_ptr(delegate) as *const ()
    }
}
