//! View-binding for the observable store.
//!
//! The binding subscribes once at mount, re-renders exactly when the
//! store notifies, and dispatches user input back into the store. It
//! never renders for rejected operations and never observes anything but
//! its own store.

use std::cell::RefCell;
use std::rc::Rc;
use tristore_core::item::TodoItem;
use tristore_core::listeners::Subscription;
use tristore_core::view::{Frame, Surface, ViewEvent};

use crate::store::ObservableTodoList;

/// Title rendered above the list for this variant
pub const TITLE: &str = "Observable";

/// Binds an [`ObservableTodoList`] to a [`Surface`]
pub struct ObservableBinding<S: Surface> {
    store: ObservableTodoList,
    surface: Rc<RefCell<S>>,
    draft: Rc<RefCell<String>>,
    _subscription: Subscription<[TodoItem]>,
}

impl<S: Surface + 'static> ObservableBinding<S> {
    /// Mounts the binding: subscribes to the store and presents the
    /// initial frame
    #[must_use]
    pub fn mount(store: ObservableTodoList, surface: S) -> Self {
        let surface = Rc::new(RefCell::new(surface));
        let draft = Rc::new(RefCell::new(String::new()));
        let subscription = {
            let surface = Rc::clone(&surface);
            let draft = Rc::clone(&draft);
            store.subscribe(move |items| {
                let frame = Frame::of_items(TITLE, items, draft.borrow().as_str());
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
    /// `Input` only updates the draft (the store did not change, so
    /// nothing re-renders). `Submit` clears the draft whether or not the
    /// store accepts the text.
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
        Frame::of_items(TITLE, self.store.todos(), self.draft.borrow().as_str())
    }

    /// Presents the current frame without requiring a state change
    pub fn refresh(&self) {
        self.surface.borrow_mut().present(&self.frame());
    }

    /// The bound store
    #[must_use]
    pub fn store(&self) -> &ObservableTodoList {
        &self.store
    }

    /// Unmounts the binding, releasing its subscription, and returns the
    /// store
    #[must_use]
    pub fn unmount(self) -> ObservableTodoList {
        let Self {
            store,
            _subscription,
            ..
        } = self;
        drop(_subscription);
        store
    }
}
