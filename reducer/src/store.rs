//! The dispatching store around the pure reducer.

use tristore_core::environment::{Clock, IdSource, SystemClock, UuidSource};
use tristore_core::inspect::{Inspector, Transition};
use tristore_core::item::TodoId;
use tristore_core::listeners::{ListenerSet, Subscription};

use crate::action::TodoAction;
use crate::reducer::reduce;
use crate::state::TodoListState;

/// Store holding the current [`TodoListState`]
///
/// All writes go through [`ReducerStore::dispatch`]: the pure reducer
/// computes the next state, the store swaps it in, and subscribers are
/// notified with the new value — but only when the action actually
/// changed something. An action the reducer rejects produces no
/// notification and no transition record.
pub struct ReducerStore {
    state: TodoListState,
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
    inspector: Option<Box<dyn Inspector>>,
    listeners: ListenerSet<TodoListState>,
    seq: u64,
}

impl Default for ReducerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReducerStore {
    /// Creates a store over an empty state with production defaults
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(TodoListState::new())
    }

    /// Creates a store over the given initial state
    #[must_use]
    pub fn with_state(state: TodoListState) -> Self {
        Self {
            state,
            ids: Box::new(UuidSource),
            clock: Box::new(SystemClock),
            inspector: None,
            listeners: ListenerSet::new(),
            seq: 0,
        }
    }

    /// Replaces the id source used by the convenience dispatchers
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
    ///
    /// This is the devtools seam: absent by default, invoked on every
    /// applied dispatch, never consulted for correctness.
    #[must_use]
    pub fn with_inspector(mut self, inspector: Box<dyn Inspector>) -> Self {
        self.inspector = Some(inspector);
        self
    }

    /// The current state
    #[must_use]
    pub const fn state(&self) -> &TodoListState {
        &self.state
    }

    /// Live count of unfinished items
    #[must_use]
    pub fn unfinished_count(&self) -> usize {
        self.state.unfinished_count()
    }

    /// Registers a listener for state changes
    ///
    /// The listener receives the new state after each applied dispatch
    /// and stays registered until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe(
        &self,
        listener: impl FnMut(&TodoListState) + 'static,
    ) -> Subscription<TodoListState> {
        self.listeners.subscribe(listener)
    }

    /// Runs an action through the reducer and publishes the result
    pub fn dispatch(&mut self, action: TodoAction) {
        let next = reduce(&self.state, &action);
        if next == self.state {
            tracing::trace!(%action, "action left state unchanged");
            return;
        }

        self.state = next;
        self.seq += 1;
        tracing::debug!(seq = self.seq, %action, len = self.state.len(), "state changed");
        if let Some(inspector) = self.inspector.as_mut() {
            let transition = Transition {
                seq: self.seq,
                at: self.clock.now(),
                action: action.to_string(),
                len: self.state.len(),
                unfinished: self.state.unfinished_count(),
            };
            inspector.transition(&transition);
        }
        self.listeners.notify(&self.state);
    }

    /// Mints a fresh id and dispatches [`TodoAction::AddTodo`]
    pub fn add_todo(&mut self, text: &str) {
        let id = self.ids.next_id();
        self.dispatch(TodoAction::AddTodo {
            id,
            text: text.to_string(),
        });
    }

    /// Dispatches [`TodoAction::ToggleTodo`] for the given id
    pub fn toggle_todo(&mut self, id: &TodoId) {
        self.dispatch(TodoAction::ToggleTodo { id: id.clone() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tristore_testing::{RecordingInspector, SequentialIds, test_clock};

    fn seeded_store() -> ReducerStore {
        let mut ids = SequentialIds::new();
        let state = TodoListState::seeded(
            ["Get Coffee", "Write simpler code", "Get a cookie as well"],
            &mut ids,
        );
        ReducerStore::with_state(state).with_ids(Box::new(ids))
    }

    #[test]
    fn seeded_scenario() {
        let mut store = seeded_store();
        assert_eq!(store.unfinished_count(), 3);

        store.toggle_todo(&SequentialIds::nth(1));
        assert_eq!(store.unfinished_count(), 2);

        store.add_todo("Buy milk");
        assert_eq!(store.state().len(), 4);
        assert_eq!(store.unfinished_count(), 3);

        store.add_todo("");
        assert_eq!(store.state().len(), 4);
    }

    #[test]
    fn subscribers_see_each_new_state_once() {
        let mut store = ReducerStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let subscription = {
            let seen = Rc::clone(&seen);
            store.subscribe(move |state| seen.borrow_mut().push(state.len()))
        };

        store.add_todo("one");
        store.add_todo("   ");
        store.toggle_todo(&TodoId::new());
        store.add_todo("two");

        assert_eq!(*seen.borrow(), vec![1, 2]);
        drop(subscription);
    }

    #[test]
    fn rejected_dispatch_keeps_the_same_state_value() {
        let mut store = seeded_store();
        let before = store.state().clone();

        store.dispatch(TodoAction::ToggleTodo { id: TodoId::new() });

        assert_eq!(*store.state(), before);
    }

    #[test]
    fn inspector_records_timestamped_transitions() {
        let inspector = RecordingInspector::new();
        let mut store = ReducerStore::new()
            .with_ids(Box::new(SequentialIds::new()))
            .with_clock(Box::new(test_clock()))
            .with_inspector(Box::new(inspector.clone()));

        store.add_todo("Buy milk");
        store.toggle_todo(&SequentialIds::nth(1));
        store.toggle_todo(&TodoId::new());

        let transitions = inspector.transitions();
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].seq, 1);
        assert!(transitions[0].action.contains("AddTodo"));
        assert_eq!(transitions[1].unfinished, 0);
        assert_eq!(transitions[1].at, test_clock().now());
    }

    #[test]
    fn store_without_inspector_behaves_identically() {
        let mut plain = ReducerStore::new().with_ids(Box::new(SequentialIds::new()));
        let mut inspected = ReducerStore::new()
            .with_ids(Box::new(SequentialIds::new()))
            .with_inspector(Box::new(RecordingInspector::new()));

        for store in [&mut plain, &mut inspected] {
            store.add_todo("one");
            store.toggle_todo(&SequentialIds::nth(1));
        }

        assert_eq!(plain.state(), inspected.state());
    }
}
