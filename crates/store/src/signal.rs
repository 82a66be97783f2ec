//! Synchronous publish/subscribe primitive.
//!
//! Each store owns its own signal rather than going through an ambient
//! global dispatcher, so tests can assert exact notification counts and
//! observers subscribe to precisely the store they care about.

use std::sync::Arc;

use parking_lot::RwLock;

/// Handle returned by [`Signal::subscribe`], used to detach the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Inner<E> {
    next_id: u64,
    listeners: Vec<(u64, Listener<E>)>,
}

/// A synchronous, role-scoped change signal.
///
/// Listeners run on the emitting thread, immediately after the persist
/// that triggered them. Delivery order across listeners is unspecified.
/// Clones share the same listener list.
pub struct Signal<E> {
    inner: Arc<RwLock<Inner<E>>>,
}

impl<E> Clone for Signal<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> Default for Signal<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Signal<E> {
    /// Create a signal with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Attach a listener; it stays attached until [`Self::unsubscribe`].
    pub fn subscribe(&self, listener: impl Fn(&E) + Send + Sync + 'static) -> SubscriberId {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        SubscriberId(id)
    }

    /// Detach a listener. Returns false if the id was already detached.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut inner = self.inner.write();
        let before = inner.listeners.len();
        inner.listeners.retain(|(listener_id, _)| *listener_id != id.0);
        inner.listeners.len() != before
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.read().listeners.len()
    }

    /// Fire the signal, invoking every listener synchronously.
    ///
    /// The listener list is snapshotted before invocation, so a listener
    /// may subscribe or unsubscribe reentrantly without deadlocking;
    /// such changes take effect from the next emit.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<Listener<E>> = self
            .inner
            .read()
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(event);
        }
    }
}
