//! The model tree and its action dispatch.

use std::collections::HashSet;
use tristore_core::environment::{Clock, IdSource, SystemClock, UuidSource};
use tristore_core::inspect::{Inspector, Transition};
use tristore_core::item::TodoId;
use tristore_core::listeners::{ListenerSet, Subscription};

use crate::snapshot::{SnapshotError, TodoListSnapshot, TodoSnapshot};

/// Leaf model of the tree: one todo
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoNode {
    /// Identifier of the node
    pub id: TodoId,
    /// Node text
    pub text: String,
    /// Completion flag
    pub completed: bool,
}

impl TodoNode {
    /// Creates an unfinished node
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Flips the completion flag
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Plain-data mirror of this node
    #[must_use]
    pub fn snapshot(&self) -> TodoSnapshot {
        TodoSnapshot {
            id: self.id.clone(),
            text: self.text.clone(),
            completed: self.completed,
        }
    }
}

/// Inputs the tree accepts through [`TodoListModel::dispatch`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeAction {
    /// Append a new unfinished node; the id is minted during dispatch
    AddTodo {
        /// Text of the new node
        text: String,
    },
    /// Flip the completion flag of an existing node
    ToggleTodo {
        /// Identifier of the node to toggle
        id: TodoId,
    },
}

/// A validated, resolved mutation of the tree
///
/// Dispatch turns a [`TreeAction`] into a patch (or rejects it); the
/// patch is what actually gets applied, and what the inspector sees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreePatch {
    /// Append a node with this id and text
    Add {
        /// Identifier of the new node
        id: TodoId,
        /// Text of the new node
        text: String,
    },
    /// Flip the node with this id
    Toggle {
        /// Identifier of the node to flip
        id: TodoId,
    },
}

impl std::fmt::Display for TreePatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add { id, text } => write!(f, "add({text:?}, {id})"),
            Self::Toggle { id } => write!(f, "toggle({id})"),
        }
    }
}

/// Applies a resolved patch to the tree
///
/// Pure over its inputs: no id minting, no observation, no rejection
/// logic — that all happened during resolution.
fn apply(todos: &mut Vec<TodoNode>, patch: &TreePatch) {
    match patch {
        TreePatch::Add { id, text } => {
            todos.push(TodoNode::new(id.clone(), text.clone()));
        },
        TreePatch::Toggle { id } => {
            if let Some(node) = todos.iter_mut().find(|node| node.id == *id) {
                node.toggle();
            }
        },
    }
}

/// Handle for a registered snapshot listener; dropping it unregisters
pub type SnapshotHandle = Subscription<TodoListSnapshot>;

/// Root of the model tree
///
/// Owns the [`TodoNode`] children. All mutation flows through
/// [`TodoListModel::dispatch`]; each applied patch produces one snapshot
/// notification, synchronously.
pub struct TodoListModel {
    todos: Vec<TodoNode>,
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
    inspector: Option<Box<dyn Inspector>>,
    listeners: ListenerSet<TodoListSnapshot>,
    seq: u64,
}

impl Default for TodoListModel {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListModel {
    /// Creates an empty model with production defaults
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

    /// Rebuilds a model from a snapshot, restoring ids and flags
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::DuplicateId`] when two nodes share an id
    /// and [`SnapshotError::BlankText`] when a node's text trims to
    /// empty; both would break invariants no dispatch can produce.
    pub fn from_snapshot(snapshot: &TodoListSnapshot) -> Result<Self, SnapshotError> {
        let mut seen = HashSet::new();
        for todo in &snapshot.todos {
            if !seen.insert(todo.id.clone()) {
                return Err(SnapshotError::DuplicateId(todo.id.clone()));
            }
            if todo.text.trim().is_empty() {
                return Err(SnapshotError::BlankText(todo.id.clone()));
            }
        }

        let mut model = Self::new();
        model.todos = snapshot
            .todos
            .iter()
            .map(|todo| TodoNode {
                id: todo.id.clone(),
                text: todo.text.clone(),
                completed: todo.completed,
            })
            .collect();
        Ok(model)
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

    /// Current nodes, in insertion order
    #[must_use]
    pub fn todos(&self) -> &[TodoNode] {
        &self.todos
    }

    /// Number of nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// True when the tree holds no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Live count of unfinished nodes
    #[must_use]
    pub fn unfinished_count(&self) -> usize {
        self.todos.iter().filter(|node| !node.completed).count()
    }

    /// Plain-data mirror of the whole tree
    #[must_use]
    pub fn snapshot(&self) -> TodoListSnapshot {
        TodoListSnapshot {
            todos: self.todos.iter().map(TodoNode::snapshot).collect(),
        }
    }

    /// Registers a snapshot listener
    ///
    /// The listener receives the post-mutation snapshot after each
    /// applied patch and stays registered until the handle is dropped.
    #[must_use = "dropping the handle unregisters the listener"]
    pub fn on_snapshot(&self, listener: impl FnMut(&TodoListSnapshot) + 'static) -> SnapshotHandle {
        self.listeners.subscribe(listener)
    }

    /// Resolves an action against the current tree and applies it
    ///
    /// Rejected actions (blank text, unknown id) leave the tree alone
    /// and notify nobody.
    pub fn dispatch(&mut self, action: TreeAction) {
        let patch = match action {
            TreeAction::AddTodo { text } => {
                if text.trim().is_empty() {
                    tracing::trace!("ignoring add of empty todo text");
                    return;
                }
                TreePatch::Add {
                    id: self.ids.next_id(),
                    text,
                }
            },
            TreeAction::ToggleTodo { id } => {
                if !self.todos.iter().any(|node| node.id == id) {
                    tracing::trace!(%id, "ignoring toggle for unknown todo");
                    return;
                }
                TreePatch::Toggle { id }
            },
        };

        apply(&mut self.todos, &patch);
        self.seq += 1;
        tracing::debug!(seq = self.seq, patch = %patch, len = self.todos.len(), "tree changed");
        let unfinished = self.unfinished_count();
        let now = self.clock.now();
        if let Some(inspector) = self.inspector.as_mut() {
            let transition = Transition {
                seq: self.seq,
                at: now,
                action: patch.to_string(),
                len: self.todos.len(),
                unfinished,
            };
            inspector.transition(&transition);
        }
        let snapshot = self.snapshot();
        self.listeners.notify(&snapshot);
    }

    /// Dispatches [`TreeAction::AddTodo`]
    pub fn add_todo(&mut self, text: &str) {
        self.dispatch(TreeAction::AddTodo {
            text: text.to_string(),
        });
    }

    /// Dispatches [`TreeAction::ToggleTodo`] for the given id
    pub fn toggle_todo(&mut self, id: &TodoId) {
        self.dispatch(TreeAction::ToggleTodo { id: id.clone() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tristore_testing::SequentialIds;

    fn seeded_model() -> TodoListModel {
        let mut model = TodoListModel::new().with_ids(Box::new(SequentialIds::new()));
        for text in ["Get Coffee", "Write simpler code", "Get a cookie as well"] {
            model.add_todo(text);
        }
        model
    }

    #[test]
    fn seeded_scenario() {
        let mut model = seeded_model();
        assert_eq!(model.unfinished_count(), 3);

        model.toggle_todo(&SequentialIds::nth(1));
        assert_eq!(model.unfinished_count(), 2);

        model.add_todo("Buy milk");
        assert_eq!(model.len(), 4);
        assert_eq!(model.unfinished_count(), 3);

        model.add_todo("");
        assert_eq!(model.len(), 4);
    }

    #[test]
    fn snapshot_listeners_fire_once_per_applied_patch() {
        let mut model = TodoListModel::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let handle = {
            let seen = Rc::clone(&seen);
            model.on_snapshot(move |snapshot| seen.borrow_mut().push(snapshot.todos.len()))
        };

        model.add_todo("one");
        model.add_todo("  ");
        model.toggle_todo(&TodoId::new());
        model.add_todo("two");

        assert_eq!(*seen.borrow(), vec![1, 2]);
        drop(handle);
    }

    #[test]
    fn snapshot_reflects_the_post_mutation_tree() {
        let mut model = seeded_model();
        let last: Rc<RefCell<Option<TodoListSnapshot>>> = Rc::new(RefCell::new(None));
        let handle = {
            let last = Rc::clone(&last);
            model.on_snapshot(move |snapshot| *last.borrow_mut() = Some(snapshot.clone()))
        };

        model.toggle_todo(&SequentialIds::nth(2));

        let snapshot = last.borrow().clone().unwrap();
        assert!(snapshot.todos[1].completed);
        assert_eq!(snapshot.unfinished_count(), 2);
        drop(handle);
    }

    #[test]
    fn from_snapshot_round_trips_the_tree() {
        let mut model = seeded_model();
        model.toggle_todo(&SequentialIds::nth(3));

        let restored = TodoListModel::from_snapshot(&model.snapshot()).unwrap();
        assert_eq!(restored.todos(), model.todos());
        assert_eq!(restored.unfinished_count(), 2);
    }

    #[test]
    fn from_snapshot_rejects_duplicate_ids() {
        let node = TodoSnapshot {
            id: SequentialIds::nth(1),
            text: "one".to_string(),
            completed: false,
        };
        let snapshot = TodoListSnapshot {
            todos: vec![node.clone(), node],
        };

        let result = TodoListModel::from_snapshot(&snapshot);
        assert!(matches!(result, Err(SnapshotError::DuplicateId(id)) if id == SequentialIds::nth(1)));
    }

    #[test]
    fn from_snapshot_rejects_blank_text() {
        let snapshot = TodoListSnapshot {
            todos: vec![TodoSnapshot {
                id: SequentialIds::nth(1),
                text: "   ".to_string(),
                completed: false,
            }],
        };

        let result = TodoListModel::from_snapshot(&snapshot);
        assert!(matches!(result, Err(SnapshotError::BlankText(id)) if id == SequentialIds::nth(1)));
    }
}
