//! View-binding for the reducer store.
//!
//! The original split this into a state-mapping container (todos plus
//! the unfinished count) and a dispatch-mapping container (submit and
//! toggle callbacks); here both halves live on one binding that
//! subscribes at mount and renders exactly when a dispatch is applied.

use std::cell::RefCell;
use std::rc::Rc;
use tristore_core::listeners::Subscription;
use tristore_core::view::{Frame, Surface, ViewEvent};

use crate::state::TodoListState;
use crate::store::ReducerStore;

/// Title rendered above the list for this variant
pub const TITLE: &str = "Reducer";

/// Binds a [`ReducerStore`] to a [`Surface`]
pub struct ReducerBinding<S: Surface> {
    store: ReducerStore,
    surface: Rc<RefCell<S>>,
    draft: Rc<RefCell<String>>,
    _subscription: Subscription<TodoListState>,
}

impl<S: Surface + 'static> ReducerBinding<S> {
    /// Mounts the binding: subscribes to the store and presents the
    /// initial frame
    #[must_use]
    pub fn mount(store: ReducerStore, surface: S) -> Self {
        let surface = Rc::new(RefCell::new(surface));
        let draft = Rc::new(RefCell::new(String::new()));
        let subscription = {
            let surface = Rc::clone(&surface);
            let draft = Rc::clone(&draft);
            store.subscribe(move |state| {
                let frame = Frame::of_items(TITLE, &state.todos, draft.borrow().as_str());
                surface.borrow_mut().present(&frame);
            })
        };
        let binding = Self {
            store,
            surface,
            draft,
            _subscription: subscription,
        };
        binding.refresh();
        binding
    }

    /// Dispatches a user interaction into the store
    ///
    /// `Submit` clears the draft whether or not the reducer accepts the
    /// text.
    pub fn handle_event(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::Input(text) => {
                *self.draft.borrow_mut() = text;
            },
            ViewEvent::Submit => {
                let text = std::mem::take(&mut *self.draft.borrow_mut());
                self.store.add_todo(&text);
            },
            ViewEvent::Toggle(id) => {
                self.store.toggle_todo(&id);
            },
        }
    }

    /// The frame for the current store state
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::of_items(TITLE, &self.store.state().todos, self.draft.borrow().as_str())
    }

    /// Presents the current frame without requiring a state change
    pub fn refresh(&self) {
        self.surface.borrow_mut().present(&self.frame());
    }

    /// The bound store
    #[must_use]
    pub const fn store(&self) -> &ReducerStore {
        &self.store
    }

    /// Unmounts the binding, releasing its subscription, and returns the
    /// store
    #[must_use]
    pub fn unmount(self) -> ReducerStore {
        let Self {
            store,
            _subscription,
            ..
        } = self;
        drop(_subscription);
        store
    }
}
