//! Error types for the editor session.

use storyedit_core::{ElementId, ValidationError};
use thiserror::Error;

use crate::session::Interaction;
use crate::tool::Tool;

/// Errors that can occur while driving an editor session.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    /// The draft rejected the edit; it is unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The action is not possible in the current interaction state.
    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        from: Interaction,
        action: &'static str,
    },

    /// The tool is not part of this editor's tool set.
    #[error("The {0} tool is not available in this editor")]
    ToolUnavailable(Tool),

    /// No element with this id exists in the draft.
    #[error("Unknown element {0}")]
    UnknownElement(ElementId),

    /// The action needs a selected element.
    #[error("No element is selected")]
    NothingSelected,

    /// The selected element is of the other kind (text vs. sticker).
    #[error("Element {0} is not a {1}")]
    WrongElementKind(ElementId, &'static str),
}

/// Result type alias for session operations.
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Errors loading an [`EditorConfig`](crate::config::EditorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
