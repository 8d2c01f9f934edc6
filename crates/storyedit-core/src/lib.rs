//! StoryEdit Core - Foundation types for story and reel editing
//!
//! This crate provides the small value types shared by the draft model and
//! the editor session:
//! - Validation errors
//! - Element identifiers
//! - Colors
//! - Canvas geometry and hit areas
//! - Reel timing (trim range, playback speed)

pub mod color;
pub mod error;
pub mod geometry;
pub mod id;
pub mod time;

pub use color::{Color, ParseColorError};
pub use error::{Result, ValidationError};
pub use geometry::{OrientedRect, Vec2};
pub use id::ElementId;
pub use time::{PlaybackSpeed, TrimRange};
