//! # DelegateRegistry: the membership set and broadcast loop.
//!
//! All operations share one pruning primitive: a single linear `retain`
//! pass that drops entries whose weak reference no longer resolves,
//! preserving the relative order of survivors. Pruning runs at every
//! observation point, so no caller ever sees a dead entry.
//!
//! The membership vector sits behind a single mutex. The lock is only held
//! for the duration of a pass over the vector, never while caller code
//! (the broadcast closure) runs, so re-entrant registry calls from inside
//! a callback cannot deadlock.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;

use super::entry::DelegateRef;

/// Multicast delegate registry over a capability set `C`.
///
/// Stores weak references only: registering a listener does not extend its
/// lifetime, and a listener whose last strong owner is dropped disappears
/// from the registry at the next observation point without an explicit
/// `remove` call.
///
/// `C` is typically a trait object type (`dyn SomeTrait`) whose trait gives
/// every method a default empty body, so listeners implement any subset of
/// it. The registry places no bound on `C`.
///
/// Cloning is cheap and clones share the same membership set. The registry
/// is `Send + Sync` whenever `C` is.
pub struct DelegateRegistry<C: ?Sized> {
    inner: Arc<Mutex<Vec<DelegateRef<C>>>>,
}

impl<C: ?Sized> DelegateRegistry<C> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates an empty registry with pre-allocated backing storage.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::with_capacity(capacity))),
        }
    }

    /// Registers a listener.
    ///
    /// Set semantics on identity: if the listener is already registered this
    /// is a no-op, so calling `add` repeatedly with the same listener is
    /// always safe and never grows the set. New listeners are appended, and
    /// broadcast visits listeners in insertion order.
    pub fn add(&self, delegate: &Arc<C>) {
        let mut entries = self.inner.lock();
        Self::prune(&mut entries);

        if entries.iter().any(|slot| slot.refers_to(delegate)) {
            tracing::trace!(members = entries.len(), "Delegate already registered");
            return;
        }

        entries.push(DelegateRef::new(delegate));
        tracing::debug!(members = entries.len(), "Delegate registered");
    }

    /// Unregisters a listener.
    ///
    /// Idempotent: removing a listener that was never added, or was already
    /// removed, is a silent no-op. Removal is not required for cleanup:
    /// dropping the listener's last strong owner has the same effect at the
    /// next pruning pass.
    pub fn remove(&self, delegate: &Arc<C>) {
        let mut entries = self.inner.lock();
        Self::prune(&mut entries);

        let before = entries.len();
        entries.retain(|slot| !slot.refers_to(delegate));
        if entries.len() < before {
            tracing::debug!(members = entries.len(), "Delegate removed");
        }
    }

    /// Returns strong references to all live listeners, in insertion order.
    ///
    /// Performs the pruning pass first, so after this call the registry
    /// holds exactly the entries that were returned.
    #[must_use]
    pub fn delegates(&self) -> Vec<Arc<C>> {
        let mut entries = self.inner.lock();
        let before = entries.len();

        let mut live = Vec::with_capacity(entries.len());
        entries.retain(|slot| match slot.upgrade() {
            Some(delegate) => {
                live.push(delegate);
                true
            }
            None => false,
        });

        let dropped = before - entries.len();
        if dropped > 0 {
            tracing::trace!(dropped, members = entries.len(), "Pruned dead delegates");
        }
        live
    }

    /// Invokes `invocation` once per live listener, in insertion order.
    ///
    /// The live set is snapshotted (with the same pruning semantics as
    /// [`delegates`](Self::delegates)) before the first callback runs and
    /// the lock is released, so:
    /// - a listener that died or was removed before this call is never
    ///   visited;
    /// - calling `add` / `remove` from inside the callback is safe and
    ///   cannot skip or double-invoke survivors;
    /// - a listener added mid-pass is not visited until the next pass.
    ///
    /// A panic inside the callback is contained per listener: the remaining
    /// survivors are still visited, the registry stays consistent, and the
    /// first captured payload is re-raised once the pass completes.
    pub fn broadcast<F>(&self, mut invocation: F)
    where
        F: FnMut(&C),
    {
        let snapshot = self.delegates();
        if snapshot.is_empty() {
            return;
        }
        tracing::trace!(members = snapshot.len(), "Broadcasting to delegates");

        let mut first_panic: Option<Box<dyn Any + Send>> = None;
        for (position, delegate) in snapshot.iter().enumerate() {
            let result = panic::catch_unwind(AssertUnwindSafe(|| invocation(delegate.as_ref())));
            if let Err(payload) = result {
                tracing::error!(
                    position,
                    info = %panic_message(&*payload),
                    "Delegate panicked during broadcast"
                );
                first_panic.get_or_insert(payload);
            }
        }

        if let Some(payload) = first_panic {
            panic::resume_unwind(payload);
        }
    }

    /// Number of live listeners.
    ///
    /// Prunes first, so the count never includes dead entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let mut entries = self.inner.lock();
        Self::prune(&mut entries);
        entries.len()
    }

    /// True if there are no live listeners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry, live or dead.
    pub fn clear(&self) {
        let mut entries = self.inner.lock();
        if !entries.is_empty() {
            tracing::debug!(dropped = entries.len(), "Registry cleared");
        }
        entries.clear();
    }

    /// Drops dead entries in one linear pass, keeping survivor order stable.
    fn prune(entries: &mut Vec<DelegateRef<C>>) {
        let before = entries.len();
        entries.retain(DelegateRef::is_alive);

        let dropped = before - entries.len();
        if dropped > 0 {
            tracing::trace!(dropped, members = entries.len(), "Pruned dead delegates");
        }
    }
}

impl<C: ?Sized> Clone for DelegateRegistry<C> {
    /// Clones share the same membership set: listeners added through one
    /// handle are observed through every other.
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: ?Sized> Default for DelegateRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
