//! Reference to the picked source asset.

use serde::{Deserialize, Serialize};
use storyedit_core::{Vec2, ValidationError};

/// Kind of source media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Reference to a media source, supplied by the camera or gallery picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaReference {
    /// URI of the asset on the device
    pub uri: String,
    /// Image or video
    pub kind: MediaKind,
    /// Duration in seconds (videos only)
    pub duration: Option<f64>,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
}

impl MediaReference {
    /// Reference a still image.
    pub fn image(uri: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            uri: uri.into(),
            kind: MediaKind::Image,
            duration: None,
            width,
            height,
        }
    }

    /// Reference a video of `duration` seconds.
    pub fn video(uri: impl Into<String>, duration: f64, width: u32, height: u32) -> Self {
        Self {
            uri: uri.into(),
            kind: MediaKind::Video,
            duration: Some(duration),
            width,
            height,
        }
    }

    /// Fail with `MissingMedia` if the URI is blank.
    pub fn ensure_present(&self) -> storyedit_core::Result<()> {
        if self.uri.trim().is_empty() {
            Err(ValidationError::MissingMedia)
        } else {
            Ok(())
        }
    }

    /// Duration usable for trimming: finite and positive.
    pub fn playable_duration(&self) -> storyedit_core::Result<f64> {
        match self.duration {
            Some(d) if d.is_finite() && d > 0.0 => Ok(d),
            _ => Err(ValidationError::MissingDuration),
        }
    }

    /// Center of the canvas, where new overlays are placed.
    pub fn canvas_center(&self) -> Vec2 {
        Vec2::new(self.width as f32 * 0.5, self.height as f32 * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_uri_is_missing() {
        let media = MediaReference::image("   ", 1080, 1920);
        assert_eq!(media.ensure_present(), Err(ValidationError::MissingMedia));
    }

    #[test]
    fn test_playable_duration() {
        assert_eq!(
            MediaReference::video("file://a.mp4", 30.0, 1080, 1920).playable_duration(),
            Ok(30.0)
        );
        assert!(MediaReference::video("file://a.mp4", 0.0, 1080, 1920)
            .playable_duration()
            .is_err());
        assert!(MediaReference::image("file://a.jpg", 1080, 1920)
            .playable_duration()
            .is_err());
    }

    #[test]
    fn test_canvas_center() {
        let media = MediaReference::image("file://a.jpg", 1080, 1920);
        assert_eq!(media.canvas_center(), Vec2::new(540.0, 960.0));
    }
}
