//! Error types for StoryEdit.

use thiserror::Error;

use crate::id::ElementId;

/// A rejected draft mutation or publish attempt.
///
/// Every variant is local and recoverable: the draft that produced it is left
/// exactly as it was, and the caller may retry with corrected input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Text must not be empty")]
    EmptyText,

    #[error("Invalid trim range {start}s..{end}s for media of {duration}s")]
    InvalidTrim { start: f64, end: f64, duration: f64 },

    #[error("Unsupported playback speed: {0}x")]
    InvalidSpeed(f64),

    #[error("Draft has no media reference")]
    MissingMedia,

    #[error("Video media has no usable duration")]
    MissingDuration,

    #[error("Visible text overlay {0} has no text")]
    BlankVisibleOverlay(ElementId),

    #[error("{0} is only available when editing a reel")]
    ReelOnly(&'static str),

    #[error("Filter does not belong to this draft's format")]
    FilterMismatch,

    #[error("Invalid link: {0}")]
    InvalidLink(String),
}

/// Result type alias for draft operations.
pub type Result<T> = std::result::Result<T, ValidationError>;
