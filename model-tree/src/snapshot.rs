//! Serializable snapshots of the model tree.
//!
//! A snapshot is a plain-data mirror of the tree: safe to hand to
//! listeners, print as JSON, or feed back into
//! [`crate::model::TodoListModel::from_snapshot`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tristore_core::item::TodoId;

/// Snapshot of one todo node
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoSnapshot {
    /// Identifier of the node
    pub id: TodoId,
    /// Node text
    pub text: String,
    /// Completion flag
    pub completed: bool,
}

/// Snapshot of the whole tree
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListSnapshot {
    /// Node snapshots, in list order
    pub todos: Vec<TodoSnapshot>,
}

impl TodoListSnapshot {
    /// Live count of unfinished nodes in the snapshot
    #[must_use]
    pub fn unfinished_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }
}

/// Why a snapshot cannot be turned back into a model
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// Two nodes carry the same id
    #[error("duplicate todo id in snapshot: {0}")]
    DuplicateId(TodoId),

    /// A node's text trims to empty
    #[error("blank todo text in snapshot (id {0})")]
    BlankText(TodoId),
}
