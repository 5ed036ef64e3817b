// Observable values. One SignalSource writes, read-only Signals subscribe;
// dropping a Subscription removes its callback. Single-threaded (Rc/RefCell).

use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<RefCell<dyn FnMut(T)>>;
type SubscriberList<T> = SmallVec<[(u64, Callback<T>); 4]>;

struct Inner<T> {
    value: T,
    version: u64,
    next_id: u64,
    subscribers: SubscriberList<T>,
}

impl<T> Inner<T> {
    fn is_subscribed(&self, id: u64) -> bool {
        self.subscribers.iter().any(|(sid, _)| *sid == id)
    }
}

/// Writable side of a signal. Not `Clone`: there is exactly one owner.
pub struct SignalSource<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

/// Read-only view handed to consumers.
pub struct Signal<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Copy + 'static> SignalSource<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value: initial,
                version: 0,
                next_id: 0,
                subscribers: SmallVec::new(),
            })),
        }
    }

    /// Store `value` and notify subscribers.
    ///
    /// The value is committed before the first callback runs, so every
    /// subscriber (and every reader they call into) observes the same value.
    /// A callback that calls `set` again supersedes this round: the nested
    /// round delivers the newer value and the remaining subscribers never
    /// receive the stale one.
    pub fn set(&self, value: T) {
        let (version, snapshot): (u64, SubscriberList<T>) = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            inner.version = inner.version.wrapping_add(1);
            (inner.version, inner.subscribers.clone())
        };
        for (id, callback) in snapshot {
            let inner = self.inner.borrow();
            if inner.version != version {
                break;
            }
            // unsubscribed by an earlier callback in this same round
            if !inner.is_subscribed(id) {
                continue;
            }
            drop(inner);
            // a callback that re-enters `set` on this signal is not re-invoked
            if let Ok(mut f) = callback.try_borrow_mut() {
                f(value);
            }
        }
    }

    pub fn read(&self) -> T {
        self.inner.borrow().value
    }

    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    pub fn signal(&self) -> Signal<T> {
        Signal {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Copy + 'static> Signal<T> {
    pub fn read(&self) -> T {
        self.inner.borrow().value
    }

    /// Incremented on every `set`, including sets that store an equal value.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Register `f` to run after every update. The callback stays registered
    /// for as long as the returned guard lives.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, f: F) -> Subscription
    where
        F: FnMut(T) + 'static,
    {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            let callback: Callback<T> = Rc::new(RefCell::new(f));
            inner.subscribers.push((id, callback));
            id
        };
        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Signal")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

/// Guard returned by [`Signal::subscribe`]. Unsubscribes on drop.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unsubscribe now rather than at end of scope.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Remembers the last version a consumer recomputed from, so a burst of
/// updates between two frames costs a single recomputation.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChangeTracker {
    seen: Option<u64>,
}

impl ChangeTracker {
    /// True (once) if `signal` changed since the previous call.
    pub fn take_changed<T: Copy + 'static>(&mut self, signal: &Signal<T>) -> bool {
        let version = signal.version();
        if self.seen == Some(version) {
            return false;
        }
        self.seen = Some(version);
        true
    }
}
