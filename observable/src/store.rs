//! The observable todo list store.

use tristore_core::environment::{Clock, IdSource, SystemClock, UuidSource};
use tristore_core::inspect::{Inspector, Transition};
use tristore_core::item::{TodoId, TodoItem, unfinished_count};
use tristore_core::listeners::{ListenerSet, Subscription};

/// Mutable todo list with explicit change notification
///
/// Owns the items outright. The two mutating operations
/// ([`ObservableTodoList::add_todo`], [`ObservableTodoList::toggle_todo`])
/// publish the new list to every subscriber synchronously, within the
/// mutating call, but only when they actually change state: rejected
/// operations (empty text, unknown id) are silent no-ops.
pub struct ObservableTodoList {
    todos: Vec<TodoItem>,
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
    inspector: Option<Box<dyn Inspector>>,
    listeners: ListenerSet<[TodoItem]>,
    seq: u64,
}

impl Default for ObservableTodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservableTodoList {
    /// Creates an empty store with production defaults (random UUIDs,
    /// system clock, no inspector)
    #[must_use]
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            ids: Box::new(UuidSource),
            clock: Box::new(SystemClock),
            inspector: None,
            listeners: ListenerSet::new(),
            seq: 0,
        }
    }

    /// Creates a store pre-populated with one unfinished item per seed
    /// text
    ///
    /// Seeding happens before anything can observe the store, so it does
    /// not notify and is not reported as a transition.
    #[must_use]
    pub fn seeded<I>(texts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut store = Self::new();
        for text in texts {
            let id = store.ids.next_id();
            store.todos.push(TodoItem::new(id, text.into()));
        }
        store
    }

    /// Replaces the id source
    #[must_use]
    pub fn with_ids(mut self, ids: Box<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    /// Replaces the clock used for transition timestamps
    #[must_use]
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Attaches a diagnostic inspector
    #[must_use]
    pub fn with_inspector(mut self, inspector: Box<dyn Inspector>) -> Self {
        self.inspector = Some(inspector);
        self
    }

    /// Current items, in insertion order
    #[must_use]
    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// True when the list holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Looks up an item by id
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|item| item.id == *id)
    }

    /// Live count of unfinished items
    #[must_use]
    pub fn unfinished_count(&self) -> usize {
        unfinished_count(&self.todos)
    }

    /// Registers a change listener
    ///
    /// The listener receives the current list after each applied
    /// mutation and stays registered until the returned guard is
    /// dropped.
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe(&self, listener: impl FnMut(&[TodoItem]) + 'static) -> Subscription<[TodoItem]> {
        self.listeners.subscribe(listener)
    }

    /// Appends a new unfinished item with a fresh id
    ///
    /// Text that trims to empty is rejected without touching state or
    /// notifying anyone.
    pub fn add_todo(&mut self, text: &str) {
        if text.trim().is_empty() {
            tracing::trace!("ignoring add of empty todo text");
            return;
        }
        let id = self.ids.next_id();
        self.todos.push(TodoItem::new(id, text.to_string()));
        self.applied(format!("add_todo({text:?})"));
    }

    /// Flips the completed flag of the item with the given id
    ///
    /// Unknown ids are rejected without touching state or notifying
    /// anyone.
    pub fn toggle_todo(&mut self, id: &TodoId) {
        let Some(item) = self.todos.iter_mut().find(|item| item.id == *id) else {
            tracing::trace!(%id, "ignoring toggle for unknown todo");
            return;
        };
        item.toggle();
        self.applied(format!("toggle_todo({id})"));
    }

    fn applied(&mut self, action: String) {
        self.seq += 1;
        tracing::debug!(
            seq = self.seq,
            %action,
            len = self.todos.len(),
            "state changed"
        );
        if let Some(inspector) = self.inspector.as_mut() {
            let transition = Transition {
                seq: self.seq,
                at: self.clock.now(),
                action,
                len: self.todos.len(),
                unfinished: unfinished_count(&self.todos),
            };
            inspector.transition(&transition);
        }
        self.listeners.notify(&self.todos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tristore_testing::{RecordingInspector, SequentialIds, test_clock};

    fn seed() -> ObservableTodoList {
        ObservableTodoList::seeded(["Get Coffee", "Write simpler code", "Get a cookie as well"])
    }

    #[test]
    fn add_appends_unfinished_items_in_order() {
        let mut store = ObservableTodoList::new();
        store.add_todo("one");
        store.add_todo("two");

        assert_eq!(store.len(), 2);
        assert_eq!(store.todos()[0].text, "one");
        assert_eq!(store.todos()[1].text, "two");
        assert!(store.todos().iter().all(|item| !item.completed));
    }

    #[test]
    fn empty_and_whitespace_text_is_rejected() {
        let mut store = seed();
        store.add_todo("");
        store.add_todo("   ");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let mut store = seed();
        store.toggle_todo(&TodoId::new());
        assert_eq!(store.unfinished_count(), 3);
    }

    #[test]
    fn toggle_twice_restores_the_flag() {
        let mut store = seed();
        let id = store.todos()[1].id.clone();

        store.toggle_todo(&id);
        assert!(store.get(&id).is_some_and(|item| item.completed));

        store.toggle_todo(&id);
        assert!(store.get(&id).is_some_and(|item| !item.completed));
    }

    #[test]
    fn seeded_scenario() {
        let mut store = seed();
        assert_eq!(store.unfinished_count(), 3);

        let first = store.todos()[0].id.clone();
        store.toggle_todo(&first);
        assert_eq!(store.unfinished_count(), 2);

        store.add_todo("Buy milk");
        assert_eq!(store.len(), 4);
        assert_eq!(store.unfinished_count(), 3);

        store.add_todo("");
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn listeners_fire_once_per_applied_mutation() {
        let mut store = ObservableTodoList::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let subscription = {
            let seen = Rc::clone(&seen);
            store.subscribe(move |items| seen.borrow_mut().push(items.len()))
        };

        store.add_todo("one");
        store.add_todo("");
        store.toggle_todo(&TodoId::new());
        store.add_todo("two");

        assert_eq!(*seen.borrow(), vec![1, 2]);
        drop(subscription);
    }

    #[test]
    fn dropped_subscription_stops_receiving() {
        let mut store = ObservableTodoList::new();
        let count = Rc::new(RefCell::new(0));
        let subscription = {
            let count = Rc::clone(&count);
            store.subscribe(move |_| *count.borrow_mut() += 1)
        };

        store.add_todo("one");
        drop(subscription);
        store.add_todo("two");

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn inspector_sees_applied_transitions_only() {
        let inspector = RecordingInspector::new();
        let mut store = ObservableTodoList::new()
            .with_ids(Box::new(SequentialIds::new()))
            .with_clock(Box::new(test_clock()))
            .with_inspector(Box::new(inspector.clone()));

        store.add_todo("Buy milk");
        store.add_todo("   ");
        store.toggle_todo(&SequentialIds::nth(1));

        let transitions = inspector.transitions();
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].seq, 1);
        assert_eq!(transitions[0].unfinished, 1);
        assert_eq!(transitions[1].seq, 2);
        assert_eq!(transitions[1].unfinished, 0);
        assert_eq!(transitions[0].at, test_clock().now());
    }
}
