//! Interactive session: commands in, frames out.
//!
//! A session owns exactly one mounted view-binding. Commands are parsed
//! into [`Command`] values and translated into the view events the
//! bindings understand; row numbers are resolved against the current
//! frame so toggling stays id-based at the store boundary.

use std::ops::ControlFlow;
use thiserror::Error;
use tristore_core::item::TodoId;
use tristore_core::view::{Frame, ViewEvent};
use tristore_model_tree::{ModelTreeBinding, TodoListModel};
use tristore_observable::{ObservableBinding, ObservableTodoList};
use tristore_reducer::{ReducerBinding, ReducerStore};

use crate::inspect::TraceInspector;
use crate::route::Variant;
use crate::surface::TerminalSurface;

/// Seed for the observable variant, as in the original demo
const SEED: [&str; 3] = ["Get Coffee", "Write simpler code", "Get a cookie as well"];

/// One parsed line of user input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a todo with the given text
    Add(String),
    /// Toggle the numbered row (1-based, as displayed)
    Toggle(usize),
    /// Re-present the current frame
    List,
    /// Print the model-tree snapshot as JSON
    Snapshot,
    /// Print the command summary
    Help,
    /// End the session
    Quit,
}

/// Failure to parse an input line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The line was blank
    #[error("empty command")]
    Empty,
    /// The first word matches no command
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    /// `toggle` without a usable row number
    #[error("toggle needs a row number, e.g. 'toggle 2'")]
    BadToggle,
}

impl Command {
    /// Parses one input line
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Empty`] for blank lines,
    /// [`CommandError::BadToggle`] when `toggle` is missing its row
    /// number, and [`CommandError::Unknown`] otherwise.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        match word {
            "add" => Ok(Self::Add(rest.trim().to_string())),
            "toggle" => rest
                .trim()
                .parse::<usize>()
                .map(Self::Toggle)
                .map_err(|_| CommandError::BadToggle),
            "list" => Ok(Self::List),
            "snapshot" => Ok(Self::Snapshot),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Prints the command summary
pub fn print_help() {
    println!("commands: add <text> | toggle <n> | list | snapshot | help | quit");
}

/// One mounted variant driving a terminal surface
pub enum Session {
    /// Observable-object store session
    Observable(ObservableBinding<TerminalSurface>),
    /// Immutable reducer store session
    Reducer(ReducerBinding<TerminalSurface>),
    /// Model-tree store session
    ModelTree(ModelTreeBinding<TerminalSurface>),
}

impl Session {
    /// Mounts the selected variant
    ///
    /// Only the observable variant is seeded, as in the original demo.
    /// When `inspect` is set, the store reports every transition through
    /// [`TraceInspector`].
    #[must_use]
    pub fn mount(variant: Variant, inspect: bool) -> Self {
        match variant {
            Variant::Observable => {
                let mut store = ObservableTodoList::seeded(SEED);
                if inspect {
                    store = store.with_inspector(Box::new(TraceInspector));
                }
                Self::Observable(ObservableBinding::mount(store, TerminalSurface))
            },
            Variant::Reducer => {
                let mut store = ReducerStore::new();
                if inspect {
                    store = store.with_inspector(Box::new(TraceInspector));
                }
                Self::Reducer(ReducerBinding::mount(store, TerminalSurface))
            },
            Variant::ModelTree => {
                let mut model = TodoListModel::new();
                if inspect {
                    model = model.with_inspector(Box::new(TraceInspector));
                }
                Self::ModelTree(ModelTreeBinding::mount(model, TerminalSurface))
            },
        }
    }

    /// Handles one parsed command; `Break` ends the session
    pub fn handle(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::Add(text) => {
                self.dispatch(ViewEvent::Input(text));
                self.dispatch(ViewEvent::Submit);
            },
            Command::Toggle(row) => {
                if let Some(id) = self.row_id(row) {
                    self.dispatch(ViewEvent::Toggle(id));
                } else {
                    println!("no row {row}");
                }
            },
            Command::List => self.refresh(),
            Command::Snapshot => self.print_snapshot(),
            Command::Help => print_help(),
            Command::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// The current frame of the mounted binding
    #[must_use]
    pub fn frame(&self) -> Frame {
        match self {
            Self::Observable(binding) => binding.frame(),
            Self::Reducer(binding) => binding.frame(),
            Self::ModelTree(binding) => binding.frame(),
        }
    }

    fn dispatch(&mut self, event: ViewEvent) {
        match self {
            Self::Observable(binding) => binding.handle_event(event),
            Self::Reducer(binding) => binding.handle_event(event),
            Self::ModelTree(binding) => binding.handle_event(event),
        }
    }

    fn refresh(&self) {
        match self {
            Self::Observable(binding) => binding.refresh(),
            Self::Reducer(binding) => binding.refresh(),
            Self::ModelTree(binding) => binding.refresh(),
        }
    }

    fn row_id(&self, row: usize) -> Option<TodoId> {
        let frame = self.frame();
        frame
            .rows
            .get(row.checked_sub(1)?)
            .map(|rendered| rendered.id.clone())
    }

    fn print_snapshot(&self) {
        match self {
            Self::ModelTree(binding) => {
                match serde_json::to_string_pretty(&binding.model().snapshot()) {
                    Ok(json) => println!("{json}"),
                    Err(error) => tracing::error!(%error, "failed to serialize snapshot"),
                }
            },
            Self::Observable(_) | Self::Reducer(_) => {
                println!("snapshot is only available on the model-tree variant");
            },
        }
    }
}
