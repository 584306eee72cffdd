//! Synchronous publish/subscribe registry for store notifications.
//!
//! Each store owns a [`ListenerSet`] and publishes to it after every
//! applied mutation, within the same call. [`ListenerSet::subscribe`]
//! returns a [`Subscription`] guard; dropping the guard unsubscribes, so
//! a view-binding that subscribes at mount releases its slot no later
//! than its own teardown.
//!
//! # Delivery rules
//!
//! - Listeners run synchronously, in subscription order.
//! - A listener registered during a notification does not receive that
//!   notification; it starts with the next one.
//! - A [`Subscription`] dropped during a notification stops receiving
//!   immediately, including later in the same notification.
//! - Listeners receive the published value, not the store, so a listener
//!   cannot re-enter the store that is notifying it.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<E> = Box<dyn FnMut(&E)>;

struct Entry<E: ?Sized> {
    id: u64,
    callback: Callback<E>,
}

struct Inner<E: ?Sized> {
    next_id: u64,
    entries: Vec<Entry<E>>,
    /// Ids unsubscribed while a notification had the entries checked out
    dead: SmallVec<[u64; 2]>,
    /// Number of notifications currently on the stack
    depth: u32,
}

impl<E: ?Sized> Default for Inner<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
            dead: SmallVec::new(),
            depth: 0,
        }
    }
}

/// Registry of listeners interested in values of type `E`
pub struct ListenerSet<E: ?Sized> {
    inner: Rc<RefCell<Inner<E>>>,
}

impl<E: ?Sized> Default for ListenerSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ?Sized> ListenerSet<E> {
    /// Creates an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner::default())),
        }
    }

    /// Number of live listeners
    #[must_use]
    pub fn len(&self) -> usize {
        let inner = self.inner.borrow();
        inner
            .entries
            .iter()
            .filter(|entry| !inner.dead.contains(&entry.id))
            .count()
    }

    /// True when no listener is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registers a listener and returns its guard
    ///
    /// The listener stays registered until the returned [`Subscription`]
    /// is dropped.
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe(&self, callback: impl FnMut(&E) + 'static) -> Subscription<E> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(Entry {
            id,
            callback: Box::new(callback),
        });
        Subscription {
            registry: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Invokes every registered listener with `event`, synchronously
    ///
    /// Entries are checked out for the duration of the call so listeners
    /// may subscribe or drop subscriptions without invalidating the
    /// iteration; the registry is reconciled before returning.
    pub fn notify(&self, event: &E) {
        let mut active = {
            let mut inner = self.inner.borrow_mut();
            inner.depth += 1;
            std::mem::take(&mut inner.entries)
        };

        for entry in &mut active {
            let unsubscribed = self.inner.borrow().dead.contains(&entry.id);
            if !unsubscribed {
                (entry.callback)(event);
            }
        }

        let mut inner = self.inner.borrow_mut();
        inner.depth -= 1;
        // Listeners subscribed during the notification landed in the
        // (empty) shared list; they go after the checked-out entries.
        let added = std::mem::take(&mut inner.entries);
        active.extend(added);
        inner.entries = active;
        if inner.depth == 0 {
            let dead = std::mem::take(&mut inner.dead);
            inner.entries.retain(|entry| !dead.contains(&entry.id));
        }
    }
}

/// Guard for one registered listener
///
/// Dropping the guard unsubscribes. If the registry is gone the drop is
/// a no-op.
pub struct Subscription<E: ?Sized> {
    registry: Weak<RefCell<Inner<E>>>,
    id: u64,
}

impl<E: ?Sized> std::fmt::Debug for Subscription<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl<E: ?Sized> Drop for Subscription<E> {
    fn drop(&mut self) {
        let Some(inner) = self.registry.upgrade() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        if inner.depth > 0 {
            // Entries are checked out by a running notification; leave a
            // tombstone for the reconciliation pass.
            inner.dead.push(self.id);
        } else {
            inner.entries.retain(|entry| entry.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listeners_run_in_subscription_order() {
        let set: ListenerSet<u32> = ListenerSet::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let seen = Rc::clone(&seen);
            set.subscribe(move |n| seen.borrow_mut().push(("first", *n)))
        };
        let second = {
            let seen = Rc::clone(&seen);
            set.subscribe(move |n| seen.borrow_mut().push(("second", *n)))
        };

        set.notify(&7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
        drop((first, second));
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let set: ListenerSet<u32> = ListenerSet::new();
        let count = Rc::new(RefCell::new(0));

        let subscription = {
            let count = Rc::clone(&count);
            set.subscribe(move |_| *count.borrow_mut() += 1)
        };

        set.notify(&1);
        assert_eq!(*count.borrow(), 1);

        drop(subscription);
        assert!(set.is_empty());

        set.notify(&2);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn listener_added_during_notification_starts_with_the_next_one() {
        let set: Rc<ListenerSet<u32>> = Rc::new(ListenerSet::new());
        let count = Rc::new(RefCell::new(0));
        let late: Rc<RefCell<Option<Subscription<u32>>>> = Rc::new(RefCell::new(None));

        let trigger = {
            let set_inner = Rc::clone(&set);
            let set = Rc::clone(&set);
            let count = Rc::clone(&count);
            let late = Rc::clone(&late);
            set.subscribe(move |_| {
                if late.borrow().is_none() {
                    let count = Rc::clone(&count);
                    let subscription = set_inner.subscribe(move |_| *count.borrow_mut() += 1);
                    *late.borrow_mut() = Some(subscription);
                }
            })
        };

        set.notify(&1);
        assert_eq!(*count.borrow(), 0, "late listener must miss the in-flight event");

        set.notify(&2);
        assert_eq!(*count.borrow(), 1);
        drop(trigger);
    }

    #[test]
    fn subscription_dropped_mid_notification_is_skipped() {
        let set: ListenerSet<u32> = ListenerSet::new();
        let count = Rc::new(RefCell::new(0));
        let victim: Rc<RefCell<Option<Subscription<u32>>>> = Rc::new(RefCell::new(None));

        let killer = {
            let victim = Rc::clone(&victim);
            set.subscribe(move |_| {
                victim.borrow_mut().take();
            })
        };
        let subscription = {
            let count = Rc::clone(&count);
            set.subscribe(move |_| *count.borrow_mut() += 1)
        };
        *victim.borrow_mut() = Some(subscription);

        // The killer runs first and drops the victim's subscription; the
        // victim must not run in the same notification.
        set.notify(&1);
        assert_eq!(*count.borrow(), 0);
        assert_eq!(set.len(), 1);

        set.notify(&2);
        assert_eq!(*count.borrow(), 0);
        drop(killer);
    }

    #[test]
    fn drop_after_registry_is_gone_is_a_no_op() {
        let set: ListenerSet<u32> = ListenerSet::new();
        let subscription = set.subscribe(|_| {});
        drop(set);
        drop(subscription);
    }
}
