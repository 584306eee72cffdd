//! Tagged actions for the reducer store.

use serde::{Deserialize, Serialize};
use tristore_core::item::TodoId;

/// All inputs the reducer understands
///
/// Ids are minted at the dispatch boundary (see
/// [`crate::store::ReducerStore::add_todo`]) so the reducer itself stays
/// a pure function of state and action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append a new unfinished item
    AddTodo {
        /// Identifier for the new item
        id: TodoId,
        /// Text of the new item
        text: String,
    },
    /// Flip the completed flag of an existing item
    ToggleTodo {
        /// Identifier of the item to toggle
        id: TodoId,
    },
}

impl std::fmt::Display for TodoAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AddTodo { id, text } => write!(f, "AddTodo({text:?}, {id})"),
            Self::ToggleTodo { id } => write!(f, "ToggleTodo({id})"),
        }
    }
}
