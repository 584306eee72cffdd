//! State of the reducer store.

use serde::{Deserialize, Serialize};
use tristore_core::environment::IdSource;
use tristore_core::item::{TodoId, TodoItem, unfinished_count};

/// Immutable todo list state
///
/// A plain value: the reducer never mutates one in place, it returns a
/// fresh state. Cloning is cheap at the scale of a todo list, which
/// keeps the immutable discipline honest without structural sharing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListState {
    /// Items in insertion order
    pub todos: Vec<TodoItem>,
}

impl TodoListState {
    /// Creates an empty state
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Creates a state pre-populated with one unfinished item per seed
    /// text, minting ids from the given source
    #[must_use]
    pub fn seeded<I>(texts: I, ids: &mut dyn IdSource) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            todos: texts
                .into_iter()
                .map(|text| TodoItem::new(ids.next_id(), text.into()))
                .collect(),
        }
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

    /// True when an item with this id exists
    #[must_use]
    pub fn contains(&self, id: &TodoId) -> bool {
        self.todos.iter().any(|item| item.id == *id)
    }

    /// Live count of unfinished items
    #[must_use]
    pub fn unfinished_count(&self) -> usize {
        unfinished_count(&self.todos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tristore_testing::SequentialIds;

    #[test]
    fn seeded_state_mints_sequential_ids() {
        let mut ids = SequentialIds::new();
        let state = TodoListState::seeded(["one", "two"], &mut ids);

        assert_eq!(state.len(), 2);
        assert_eq!(state.todos[0].id, SequentialIds::nth(1));
        assert_eq!(state.todos[1].id, SequentialIds::nth(2));
        assert_eq!(state.unfinished_count(), 2);
    }
}
