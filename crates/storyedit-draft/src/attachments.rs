//! Link stickers and background music attached to a draft.

use serde::{Deserialize, Serialize};
use storyedit_core::{Result, ValidationError};
use url::Url;

/// A tappable link shown on the published story or reel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub title: Option<String>,
}

impl Link {
    /// Validate and normalize a link. Only absolute http(s) URLs with a host
    /// are accepted; a blank title becomes `None`.
    pub fn new(url: &str, title: Option<&str>) -> Result<Self> {
        let parsed = Self::parse(url)?;
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Ok(Self {
            url: parsed.to_string(),
            title,
        })
    }

    /// Re-run validation on an existing link.
    pub fn validate(&self) -> Result<()> {
        Self::parse(&self.url).map(|_| ())
    }

    fn parse(raw: &str) -> Result<Url> {
        let url =
            Url::parse(raw.trim()).map_err(|e| ValidationError::InvalidLink(format!("{raw}: {e}")))?;
        match url.scheme() {
            "http" | "https" if url.host_str().is_some() => Ok(url),
            _ => Err(ValidationError::InvalidLink(format!(
                "{raw}: only http and https links are allowed"
            ))),
        }
    }
}

/// A music track picked from the library to play under the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicSelection {
    pub track_id: String,
    pub title: String,
    pub artist: String,
    /// Where in the song playback begins, in seconds
    pub start_offset: f64,
}

impl MusicSelection {
    pub fn new(
        track_id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        Self {
            track_id: track_id.into(),
            title: title.into(),
            artist: artist.into(),
            start_offset: 0.0,
        }
    }

    pub fn starting_at(mut self, seconds: f64) -> Self {
        self.start_offset = seconds;
        self
    }

    /// Reject untitled tracks and pull the offset to a finite, non-negative value.
    pub(crate) fn normalized(mut self) -> Result<Self> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        self.start_offset = if self.start_offset.is_finite() {
            self.start_offset.max(0.0)
        } else {
            0.0
        };
        Ok(self)
    }
}
