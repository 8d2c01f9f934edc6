//! The draft aggregate.
//!
//! A `Draft` is an immutable value. Every edit takes `&self` and returns a new
//! draft; the overlay lists are shared between versions behind `Arc` and only
//! copied when an edit actually touches them. Rejected edits return a
//! [`ValidationError`] and leave the original draft untouched.

use std::sync::Arc;

use storyedit_core::{
    Color, ElementId, PlaybackSpeed, Result, TrimRange, ValidationError, Vec2,
};
use uuid::Uuid;

use crate::adjust::{Adjustments, Filter, ReelEffect, ReelFilter, StoryFilter};
use crate::attachments::{Link, MusicSelection};
use crate::media::MediaReference;
use crate::overlay::{
    ElementRef, StickerElement, StickerPatch, TextOverlay, TextOverlayPatch, TextStyle,
};

/// Reel-only parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReelSettings {
    pub filter: ReelFilter,
    pub trim: TrimRange,
    pub speed: PlaybackSpeed,
    pub effect: ReelEffect,
}

/// What is being composed: a still story or a video reel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DraftFormat {
    Story { filter: StoryFilter },
    Reel(ReelSettings),
}

/// An in-progress story or reel.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    id: Uuid,
    media: MediaReference,
    format: DraftFormat,
    text_overlays: Arc<Vec<TextOverlay>>,
    sticker_elements: Arc<Vec<StickerElement>>,
    adjustments: Adjustments,
    link: Option<Link>,
    music: Option<MusicSelection>,
    next_element_id: ElementId,
}

impl Draft {
    /// Start a story draft from a picked image (or a video used as a still).
    pub fn story(media: MediaReference) -> Result<Self> {
        media.ensure_present()?;
        Ok(Self::with_format(
            media,
            DraftFormat::Story {
                filter: StoryFilter::None,
            },
        ))
    }

    /// Start a reel draft. The media must carry a positive duration; the
    /// initial trim covers the whole clip at normal speed.
    pub fn reel(media: MediaReference) -> Result<Self> {
        media.ensure_present()?;
        let duration = media.playable_duration()?;
        let trim = TrimRange::full(duration)?;
        Ok(Self::with_format(
            media,
            DraftFormat::Reel(ReelSettings {
                filter: ReelFilter::None,
                trim,
                speed: PlaybackSpeed::Normal,
                effect: ReelEffect::None,
            }),
        ))
    }

    fn with_format(media: MediaReference, format: DraftFormat) -> Self {
        Self {
            id: Uuid::new_v4(),
            media,
            format,
            text_overlays: Arc::new(Vec::new()),
            sticker_elements: Arc::new(Vec::new()),
            adjustments: Adjustments::NEUTRAL,
            link: None,
            music: None,
            next_element_id: ElementId::FIRST,
        }
    }

    // ── Accessors ───────────────────────────────────────────────

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn media(&self) -> &MediaReference {
        &self.media
    }

    pub fn format(&self) -> &DraftFormat {
        &self.format
    }

    pub fn is_reel(&self) -> bool {
        matches!(self.format, DraftFormat::Reel(_))
    }

    pub fn text_overlays(&self) -> &[TextOverlay] {
        &self.text_overlays
    }

    pub fn sticker_elements(&self) -> &[StickerElement] {
        &self.sticker_elements
    }

    pub fn adjustments(&self) -> Adjustments {
        self.adjustments
    }

    pub fn filter(&self) -> Filter {
        match self.format {
            DraftFormat::Story { filter } => Filter::Story(filter),
            DraftFormat::Reel(reel) => Filter::Reel(reel.filter),
        }
    }

    pub fn reel_settings(&self) -> Option<&ReelSettings> {
        match &self.format {
            DraftFormat::Reel(reel) => Some(reel),
            DraftFormat::Story { .. } => None,
        }
    }

    pub fn trim(&self) -> Option<TrimRange> {
        self.reel_settings().map(|r| r.trim)
    }

    pub fn speed(&self) -> Option<PlaybackSpeed> {
        self.reel_settings().map(|r| r.speed)
    }

    pub fn effect(&self) -> Option<ReelEffect> {
        self.reel_settings().map(|r| r.effect)
    }

    pub fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    pub fn music(&self) -> Option<&MusicSelection> {
        self.music.as_ref()
    }

    /// The id the next added element will receive.
    pub fn next_element_id(&self) -> ElementId {
        self.next_element_id
    }

    /// Look up an element of either kind.
    pub fn element(&self, id: ElementId) -> Option<ElementRef<'_>> {
        self.text_overlay(id)
            .map(ElementRef::Text)
            .or_else(|| self.sticker_element(id).map(ElementRef::Sticker))
    }

    pub fn text_overlay(&self, id: ElementId) -> Option<&TextOverlay> {
        self.text_overlays.iter().find(|t| t.id == id)
    }

    pub fn sticker_element(&self, id: ElementId) -> Option<&StickerElement> {
        self.sticker_elements.iter().find(|s| s.id == id)
    }

    pub fn contains_element(&self, id: ElementId) -> bool {
        self.element(id).is_some()
    }

    /// All element ids, texts first, each list in layer order.
    pub fn element_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.text_overlays
            .iter()
            .map(|t| t.id)
            .chain(self.sticker_elements.iter().map(|s| s.id))
    }

    /// The topmost visible element under a canvas point.
    ///
    /// Texts render above stickers; within each list later entries are on top.
    pub fn element_at(&self, point: Vec2, slop: f32) -> Option<ElementId> {
        let text_hit = self
            .text_overlays
            .iter()
            .rev()
            .filter(|t| t.is_visible)
            .find(|t| t.bounds().contains(point, slop))
            .map(|t| t.id);
        text_hit.or_else(|| {
            self.sticker_elements
                .iter()
                .rev()
                .filter(|s| s.is_visible)
                .find(|s| s.bounds().contains(point, slop))
                .map(|s| s.id)
        })
    }

    // ── Text overlays ───────────────────────────────────────────

    /// Append a text overlay at the canvas center.
    pub fn add_text_overlay(&self, text: &str, style: TextStyle, color: Color) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        let mut next = self.clone();
        let id = next.take_element_id();
        let overlay = TextOverlay::new(
            id,
            text.to_string(),
            style,
            color,
            self.media.canvas_center(),
        );
        Arc::make_mut(&mut next.text_overlays).push(overlay);
        Ok(next)
    }

    /// Merge `patch` into the overlay with `id`. No-op if absent.
    pub fn update_text_overlay(&self, id: ElementId, patch: &TextOverlayPatch) -> Self {
        let Some(index) = self.text_overlays.iter().position(|t| t.id == id) else {
            return self.clone();
        };
        let mut next = self.clone();
        patch.apply_to(&mut Arc::make_mut(&mut next.text_overlays)[index]);
        next
    }

    /// Remove the overlay with `id`. No-op if absent.
    pub fn remove_text_overlay(&self, id: ElementId) -> Self {
        if self.text_overlay(id).is_none() {
            return self.clone();
        }
        let mut next = self.clone();
        Arc::make_mut(&mut next.text_overlays).retain(|t| t.id != id);
        next
    }

    // ── Stickers ────────────────────────────────────────────────

    /// Append a sticker at the canvas center.
    pub fn add_sticker_element(&self, emoji: &str) -> Result<Self> {
        let emoji = emoji.trim();
        if emoji.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        let mut next = self.clone();
        let id = next.take_element_id();
        let sticker = StickerElement::new(id, emoji.to_string(), self.media.canvas_center());
        Arc::make_mut(&mut next.sticker_elements).push(sticker);
        Ok(next)
    }

    /// Merge `patch` into the sticker with `id`. No-op if absent.
    pub fn update_sticker_element(&self, id: ElementId, patch: &StickerPatch) -> Self {
        let Some(index) = self.sticker_elements.iter().position(|s| s.id == id) else {
            return self.clone();
        };
        let mut next = self.clone();
        patch.apply_to(&mut Arc::make_mut(&mut next.sticker_elements)[index]);
        next
    }

    /// Remove the sticker with `id`. No-op if absent.
    pub fn remove_sticker_element(&self, id: ElementId) -> Self {
        if self.sticker_element(id).is_none() {
            return self.clone();
        }
        let mut next = self.clone();
        Arc::make_mut(&mut next.sticker_elements).retain(|s| s.id != id);
        next
    }

    // ── Either kind ─────────────────────────────────────────────

    /// Remove a text or sticker. No-op if absent.
    pub fn remove_element(&self, id: ElementId) -> Self {
        match self.element(id) {
            Some(ElementRef::Text(_)) => self.remove_text_overlay(id),
            Some(ElementRef::Sticker(_)) => self.remove_sticker_element(id),
            None => self.clone(),
        }
    }

    /// Move an element by `delta` canvas pixels. No-op if absent.
    pub fn translate_element(&self, id: ElementId, delta: Vec2) -> Self {
        match self.element(id) {
            Some(ElementRef::Text(t)) => {
                let to = t.position + delta;
                self.update_text_overlay(id, &TextOverlayPatch::new().position(to))
            }
            Some(ElementRef::Sticker(s)) => {
                let to = s.position + delta;
                self.update_sticker_element(id, &StickerPatch::new().position(to))
            }
            None => self.clone(),
        }
    }

    /// Raise an element to the top of its layer. No-op if absent or already on top.
    pub fn bring_to_front(&self, id: ElementId) -> Self {
        fn raise<T: Clone>(list: &mut Arc<Vec<T>>, index: usize) {
            if index + 1 < list.len() {
                let items = Arc::make_mut(list);
                let item = items.remove(index);
                items.push(item);
            }
        }

        let mut next = self.clone();
        if let Some(i) = self.text_overlays.iter().position(|t| t.id == id) {
            raise(&mut next.text_overlays, i);
        } else if let Some(i) = self.sticker_elements.iter().position(|s| s.id == id) {
            raise(&mut next.sticker_elements, i);
        }
        next
    }

    // ── Look ────────────────────────────────────────────────────

    /// Replace all adjustments, clamping each into range.
    pub fn set_adjustments(&self, adjustments: Adjustments) -> Self {
        Self {
            adjustments: adjustments.clamped(),
            ..self.clone()
        }
    }

    /// Replace the filter. The filter family must match the draft format.
    pub fn set_filter(&self, filter: impl Into<Filter>) -> Result<Self> {
        let format = match (self.format, filter.into()) {
            (DraftFormat::Story { .. }, Filter::Story(filter)) => DraftFormat::Story { filter },
            (DraftFormat::Reel(reel), Filter::Reel(filter)) => {
                DraftFormat::Reel(ReelSettings { filter, ..reel })
            }
            _ => return Err(ValidationError::FilterMismatch),
        };
        Ok(Self {
            format,
            ..self.clone()
        })
    }

    // ── Reel timing ─────────────────────────────────────────────

    /// Set the trim range in seconds.
    pub fn set_trim(&self, start: f64, end: f64) -> Result<Self> {
        let reel = self.require_reel("Trim")?;
        let duration = self.media.playable_duration()?;
        let trim = TrimRange::new(start, end, duration)?;
        Ok(self.with_reel(ReelSettings { trim, ..reel }))
    }

    /// Set the playback speed from a raw multiplier.
    pub fn set_speed(&self, speed: f64) -> Result<Self> {
        self.require_reel("Speed")?;
        self.with_speed(PlaybackSpeed::try_from(speed)?)
    }

    pub fn with_speed(&self, speed: PlaybackSpeed) -> Result<Self> {
        let reel = self.require_reel("Speed")?;
        Ok(self.with_reel(ReelSettings { speed, ..reel }))
    }

    pub fn set_effect(&self, effect: ReelEffect) -> Result<Self> {
        let reel = self.require_reel("Effects")?;
        Ok(self.with_reel(ReelSettings { effect, ..reel }))
    }

    // ── Attachments ─────────────────────────────────────────────

    pub fn set_link(&self, url: &str, title: Option<&str>) -> Result<Self> {
        let link = Link::new(url, title)?;
        Ok(Self {
            link: Some(link),
            ..self.clone()
        })
    }

    pub fn clear_link(&self) -> Self {
        Self {
            link: None,
            ..self.clone()
        }
    }

    pub fn set_music(&self, music: MusicSelection) -> Result<Self> {
        let music = music.normalized()?;
        Ok(Self {
            music: Some(music),
            ..self.clone()
        })
    }

    pub fn clear_music(&self) -> Self {
        Self {
            music: None,
            ..self.clone()
        }
    }

    /// Make sure ids below `floor` are never handed out again.
    ///
    /// Used when an older snapshot is restored so that ids issued after it
    /// was taken stay retired.
    pub fn retire_element_ids_below(&self, floor: ElementId) -> Self {
        Self {
            next_element_id: self.next_element_id.max(floor),
            ..self.clone()
        }
    }

    // ── Internals ───────────────────────────────────────────────

    fn take_element_id(&mut self) -> ElementId {
        let id = self.next_element_id;
        self.next_element_id = id.next();
        id
    }

    fn require_reel(&self, feature: &'static str) -> Result<ReelSettings> {
        match self.format {
            DraftFormat::Reel(reel) => Ok(reel),
            DraftFormat::Story { .. } => Err(ValidationError::ReelOnly(feature)),
        }
    }

    fn with_reel(&self, reel: ReelSettings) -> Self {
        Self {
            format: DraftFormat::Reel(reel),
            ..self.clone()
        }
    }
}
