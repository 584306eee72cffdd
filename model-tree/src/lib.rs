//! # Tristore Model Tree
//!
//! Variant 3 of the tristore comparison: a tree-structured observable
//! store.
//!
//! The state is a small tree of plain model structs ([`TodoListModel`]
//! owning [`TodoNode`] leaves) instead of a schema-described model layer.
//! Mutation goes through [`TodoListModel::dispatch`] with a tagged
//! [`TreeAction`]; valid actions resolve to a [`TreePatch`] that a pure
//! function applies to the tree.
//!
//! What makes this variant distinct is snapshot observation: after each
//! applied patch the model captures a serializable [`TodoListSnapshot`]
//! and hands it to every listener registered with
//! [`TodoListModel::on_snapshot`]. A model can also be rebuilt from a
//! snapshot, which round-trips ids and completion flags.
//!
//! ## Example
//!
//! ```
//! use tristore_model_tree::TodoListModel;
//!
//! let mut model = TodoListModel::new();
//! let handle = model.on_snapshot(|snapshot| {
//!     println!("now {} item(s)", snapshot.todos.len());
//! });
//!
//! model.add_todo("Get Coffee"); // prints "now 1 item(s)"
//!
//! let restored = TodoListModel::from_snapshot(&model.snapshot()).unwrap();
//! assert_eq!(restored.unfinished_count(), 1);
//! drop(handle);
//! ```

pub mod binding;
pub mod model;
pub mod snapshot;

pub use binding::ModelTreeBinding;
pub use model::{SnapshotHandle, TodoListModel, TodoNode, TreeAction, TreePatch};
pub use snapshot::{SnapshotError, TodoListSnapshot, TodoSnapshot};
