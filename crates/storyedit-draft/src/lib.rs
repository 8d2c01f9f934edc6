//! StoryEdit Draft - The story/reel composition model
//!
//! Implements the editable draft and everything it is built from:
//! - Media references picked by the host
//! - Text and sticker overlays with patch-based edits
//! - Adjustments, filter presets and reel effects
//! - The immutable `Draft` aggregate and its snapshot history
//! - The publish gate producing a `PublishPayload`

pub mod adjust;
pub mod attachments;
pub mod draft;
pub mod history;
pub mod media;
pub mod overlay;
pub mod publish;
pub mod serialization;

pub use adjust::{Adjustments, Filter, ReelEffect, ReelFilter, StoryFilter};
pub use attachments::{Link, MusicSelection};
pub use draft::{Draft, DraftFormat, ReelSettings};
pub use history::History;
pub use media::{MediaKind, MediaReference};
pub use overlay::{
    ElementRef, StickerElement, StickerPatch, TextOverlay, TextOverlayPatch, TextStyle,
};
pub use publish::{finalize, PublishPayload};
pub use serialization::{PayloadEnvelope, SerializationError};
