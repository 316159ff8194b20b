//! Tree-building error types.
//!
//! Event dispatch never fails; these only report misuse of the API that
//! wires widgets together.

use thiserror::Error;

use crate::window::WindowId;

/// Errors returned when building or reconfiguring a window tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The id does not (or no longer) name a node in this tree.
    #[error("unknown window: {0:?}")]
    UnknownWindow(WindowId),

    /// Children can only be attached under container widgets.
    #[error("window {0:?} is not a container")]
    NotAContainer(WindowId),

    /// Moving a node to a new parent is unsupported.
    #[error("window {0:?} already has a parent")]
    AlreadyAttached(WindowId),

    /// The attachment would make a node its own ancestor.
    #[error("attaching {0:?} would create a cycle")]
    WouldCycle(WindowId),

    /// The node exists but is not the widget the operation needs.
    #[error("window {id:?} is a {found}, not a {expected}")]
    WrongKind {
        /// Offending node.
        id: WindowId,
        /// Widget kind the operation expected.
        expected: &'static str,
        /// Widget kind actually stored in the node.
        found: &'static str,
    },
}

/// Result alias for tree-building operations.
pub type Result<T> = std::result::Result<T, TreeError>;
