//! Route-style variant selection.
//!
//! The original demo switched implementations by URL path; the terminal
//! app takes the path as its first argument. `/` and `/observable` are
//! equivalent, and the leading slash is optional.

use std::str::FromStr;
use thiserror::Error;

/// Which store implementation the session runs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Observable-object store
    Observable,
    /// Immutable reducer store
    Reducer,
    /// Tree-structured observable store
    ModelTree,
}

impl Variant {
    /// Title rendered above the list for this variant
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Observable => tristore_observable::binding::TITLE,
            Self::Reducer => tristore_reducer::binding::TITLE,
            Self::ModelTree => tristore_model_tree::binding::TITLE,
        }
    }
}

/// Failure to map a path onto a variant
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// The path matches no known route
    #[error("unknown route '{0}' (expected /, /observable, /reducer or /model-tree)")]
    Unknown(String),
}

impl FromStr for Variant {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        let path = path.strip_prefix('/').unwrap_or(path);
        match path {
            "" | "observable" => Ok(Self::Observable),
            "reducer" => Ok(Self::Reducer),
            "model-tree" => Ok(Self::ModelTree),
            _ => Err(RouteError::Unknown(s.to_string())),
        }
    }
}
