//! View-binding for the model tree.
//!
//! Renders from the snapshot stream: the binding registers one snapshot
//! listener at mount and turns each emitted snapshot into a frame.

use std::cell::RefCell;
use std::rc::Rc;
use tristore_core::view::{Frame, Surface, TodoRow, ViewEvent};

use crate::model::{SnapshotHandle, TodoListModel};
use crate::snapshot::{TodoListSnapshot, TodoSnapshot};

/// Title rendered above the list for this variant
pub const TITLE: &str = "Model tree";

impl From<&TodoSnapshot> for TodoRow {
    fn from(todo: &TodoSnapshot) -> Self {
        Self {
            id: todo.id.clone(),
            text: todo.text.clone(),
            completed: todo.completed,
        }
    }
}

fn frame_of(snapshot: &TodoListSnapshot, draft: &str) -> Frame {
    Frame::new(
        TITLE,
        snapshot.todos.iter().map(TodoRow::from).collect(),
        draft,
    )
}

/// Binds a [`TodoListModel`] to a [`Surface`]
pub struct ModelTreeBinding<S: Surface> {
    model: TodoListModel,
    surface: Rc<RefCell<S>>,
    draft: Rc<RefCell<String>>,
    _handle: SnapshotHandle,
}

impl<S: Surface + 'static> ModelTreeBinding<S> {
    /// Mounts the binding: registers the snapshot listener and presents
    /// the initial frame
    #[must_use]
    pub fn mount(model: TodoListModel, surface: S) -> Self {
        let surface = Rc::new(RefCell::new(surface));
        let draft = Rc::new(RefCell::new(String::new()));
        let handle = {
            let surface = Rc::clone(&surface);
            let draft = Rc::clone(&draft);
            model.on_snapshot(move |snapshot| {
                let frame = frame_of(snapshot, draft.borrow().as_str());
                surface.borrow_mut().present(&frame);
            })
        };
        let binding = Self {
            model,
            surface,
            draft,
            _handle: handle,
        };
        binding.refresh();
        binding
    }

    /// Dispatches a user interaction into the model
    ///
    /// `Submit` clears the draft whether or not the model accepts the
    /// text.
    pub fn handle_event(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::Input(text) => {
                *self.draft.borrow_mut() = text;
            },
            ViewEvent::Submit => {
                let text = std::mem::take(&mut *self.draft.borrow_mut());
                self.model.add_todo(&text);
            },
            ViewEvent::Toggle(id) => {
                self.model.toggle_todo(&id);
            },
        }
    }

    /// The frame for the current tree
    #[must_use]
    pub fn frame(&self) -> Frame {
        frame_of(&self.model.snapshot(), self.draft.borrow().as_str())
    }

    /// Presents the current frame without requiring a state change
    pub fn refresh(&self) {
        self.surface.borrow_mut().present(&self.frame());
    }

    /// The bound model
    #[must_use]
    pub const fn model(&self) -> &TodoListModel {
        &self.model
    }

    /// Unmounts the binding, releasing its listener, and returns the
    /// model
    #[must_use]
    pub fn unmount(self) -> TodoListModel {
        let Self { model, _handle, .. } = self;
        drop(_handle);
        model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tristore_testing::{RecordingSurface, SequentialIds};

    fn mounted() -> (ModelTreeBinding<RecordingSurface>, RecordingSurface) {
        let recorder = RecordingSurface::new();
        let model = TodoListModel::new().with_ids(Box::new(SequentialIds::new()));
        let binding = ModelTreeBinding::mount(model, recorder.clone());
        (binding, recorder)
    }

    #[test]
    fn mount_presents_the_initial_frame() {
        let (_binding, recorder) = mounted();
        assert_eq!(recorder.frame_count(), 1);
        let frame = recorder.last().unwrap();
        assert_eq!(frame.title, TITLE);
        assert!(frame.rows.is_empty());
    }

    #[test]
    fn submit_renders_the_snapshot_and_clears_the_draft() {
        let (mut binding, recorder) = mounted();
        binding.handle_event(ViewEvent::Input("Buy milk".to_string()));
        binding.handle_event(ViewEvent::Submit);

        assert_eq!(recorder.frame_count(), 2);
        let frame = recorder.last().unwrap();
        assert_eq!(frame.rows[0].text, "Buy milk");
        assert_eq!(frame.draft, "");
    }

    #[test]
    fn rejected_submit_renders_nothing() {
        let (mut binding, recorder) = mounted();
        binding.handle_event(ViewEvent::Input(" ".to_string()));
        binding.handle_event(ViewEvent::Submit);

        assert_eq!(recorder.frame_count(), 1);
    }

    #[test]
    fn toggle_re_renders_with_the_flag_flipped() {
        let (mut binding, recorder) = mounted();
        binding.handle_event(ViewEvent::Input("Buy milk".to_string()));
        binding.handle_event(ViewEvent::Submit);

        binding.handle_event(ViewEvent::Toggle(SequentialIds::nth(1)));
        assert_eq!(recorder.frame_count(), 3);
        let frame = recorder.last().unwrap();
        assert!(frame.rows[0].completed);
        assert_eq!(frame.unfinished, 0);
    }

    #[test]
    fn unmount_releases_the_listener() {
        let (binding, recorder) = mounted();
        let mut model = binding.unmount();

        model.add_todo("after teardown");
        assert_eq!(recorder.frame_count(), 1);
    }
}
