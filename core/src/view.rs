//! The render contract between a store and its view-binding.
//!
//! A view-binding turns store state into a [`Frame`] and hands it to a
//! [`Surface`]; user interactions come back as [`ViewEvent`]s. The frame
//! is a plain value, so surfaces (terminal, test recorder) stay trivial
//! and the binding logic stays inspectable.

use crate::item::{TodoId, TodoItem};

/// One rendered todo row: a checkbox bound to `completed` plus the text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoRow {
    /// Identifier of the item this row toggles
    pub id: TodoId,
    /// Item text
    pub text: String,
    /// Checkbox state
    pub completed: bool,
}

impl From<&TodoItem> for TodoRow {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id.clone(),
            text: item.text.clone(),
            completed: item.completed,
        }
    }
}

/// A fully rendered view of one store
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Variant title shown above the list
    pub title: String,
    /// Rendered rows, in list order
    pub rows: Vec<TodoRow>,
    /// Count of unfinished rows, recomputed from `rows` at construction
    pub unfinished: usize,
    /// Current content of the text-entry control
    pub draft: String,
}

impl Frame {
    /// Builds a frame, deriving the unfinished count from the rows
    #[must_use]
    pub fn new(title: impl Into<String>, rows: Vec<TodoRow>, draft: impl Into<String>) -> Self {
        let unfinished = rows.iter().filter(|row| !row.completed).count();
        Self {
            title: title.into(),
            rows,
            unfinished,
            draft: draft.into(),
        }
    }

    /// Builds a frame straight from a slice of items
    #[must_use]
    pub fn of_items(title: impl Into<String>, items: &[TodoItem], draft: impl Into<String>) -> Self {
        Self::new(title, items.iter().map(TodoRow::from).collect(), draft)
    }
}

/// User interactions a view-binding dispatches back into its store
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    /// Replace the text-entry draft
    Input(String),
    /// Submit the draft: non-empty trimmed content becomes a new todo;
    /// the draft is cleared either way
    Submit,
    /// Toggle the checkbox of the row with this id
    Toggle(TodoId),
}

/// Render target for a view-binding
pub trait Surface {
    /// Present a freshly rendered frame
    fn present(&mut self, frame: &Frame);
}
