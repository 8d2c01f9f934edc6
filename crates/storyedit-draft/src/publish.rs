//! Preview/publish gate.
//!
//! `finalize` validates a draft and copies it into a `PublishPayload`. The
//! payload owns its data outright, so edits made to the draft after a preview
//! never reach a payload that has already been handed out.

use serde::{Deserialize, Serialize};
use storyedit_core::{PlaybackSpeed, Result, TrimRange, ValidationError};
use uuid::Uuid;

use crate::adjust::{Adjustments, Filter, ReelEffect};
use crate::attachments::{Link, MusicSelection};
use crate::draft::Draft;
use crate::media::MediaReference;
use crate::overlay::{StickerElement, TextOverlay};

/// The finished composition handed to the publish collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishPayload {
    pub draft_id: Uuid,
    pub media: MediaReference,
    pub text_overlays: Vec<TextOverlay>,
    pub sticker_elements: Vec<StickerElement>,
    pub adjustments: Adjustments,
    pub filter: Filter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<TrimRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<PlaybackSpeed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<ReelEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music: Option<MusicSelection>,
}

impl PublishPayload {
    pub fn is_reel(&self) -> bool {
        self.trim.is_some()
    }

    /// Length of the published reel in seconds after trimming and speed.
    pub fn output_duration(&self) -> Option<f64> {
        let trim = self.trim?;
        let speed = self.speed.unwrap_or_default();
        Some(speed.output_duration(trim.duration()))
    }
}

/// Validate `draft` and snapshot it for publishing.
///
/// Checks run in order: media present, trim within the media (reels), no
/// visible text overlay left blank, link still valid.
pub fn finalize(draft: &Draft) -> Result<PublishPayload> {
    let media = draft.media();
    media.ensure_present()?;

    if let Some(trim) = draft.trim() {
        let duration = media.playable_duration()?;
        if !trim.fits(duration) {
            return Err(ValidationError::InvalidTrim {
                start: trim.start(),
                end: trim.end(),
                duration,
            });
        }
    }

    if let Some(blank) = draft
        .text_overlays()
        .iter()
        .find(|t| t.is_visible && t.is_blank())
    {
        return Err(ValidationError::BlankVisibleOverlay(blank.id));
    }

    if let Some(link) = draft.link() {
        link.validate()?;
    }

    Ok(PublishPayload {
        draft_id: draft.id(),
        media: media.clone(),
        text_overlays: draft.text_overlays().to_vec(),
        sticker_elements: draft.sticker_elements().to_vec(),
        adjustments: draft.adjustments(),
        filter: draft.filter(),
        trim: draft.trim(),
        speed: draft.speed(),
        effect: draft.effect(),
        link: draft.link().cloned(),
        music: draft.music().cloned(),
    })
}
