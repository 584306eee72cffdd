//! The pure transition function.

use crate::action::TodoAction;
use crate::state::TodoListState;
use tristore_core::item::TodoItem;

/// Computes the next state for an action
///
/// Pure and total: the input state is never modified, and rejected
/// actions (empty text, duplicate id, unknown id) return a state equal
/// to the input. The store uses that equality to decide whether a
/// transition happened at all.
#[must_use]
pub fn reduce(state: &TodoListState, action: &TodoAction) -> TodoListState {
    match action {
        TodoAction::AddTodo { id, text } => {
            if text.trim().is_empty() || state.contains(id) {
                return state.clone();
            }
            let mut next = state.clone();
            next.todos.push(TodoItem::new(id.clone(), text.clone()));
            next
        },
        TodoAction::ToggleTodo { id } => {
            let Some(position) = state.todos.iter().position(|item| item.id == *id) else {
                return state.clone();
            };
            let mut next = state.clone();
            next.todos[position].toggle();
            next
        },
    }
}
