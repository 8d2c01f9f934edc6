//! StoryEdit Session - Interactive editor controller
//!
//! Sits between the host UI and the draft model:
//! - Tool tabs and the tool set of each editor
//! - The interaction state machine (idle, tool open, selection, text entry)
//! - Undo/redo over draft snapshots
//! - Preview and the hand-off to the publish collaborator

pub mod config;
pub mod error;
pub mod publisher;
pub mod session;
pub mod tool;

pub use config::EditorConfig;
pub use error::{ConfigError, SessionError, SessionResult};
pub use publisher::Publisher;
pub use session::{EditorSession, Interaction, PublishRejected};
pub use tool::{Tool, ToolSet};
