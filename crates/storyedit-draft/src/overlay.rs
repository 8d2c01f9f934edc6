//! Overlay elements layered on top of the base media.
//!
//! Elements are plain values owned by their draft. Edits arrive as patches
//! (every field optional) and are merged into a copy of the element.

use serde::{Deserialize, Serialize};
use storyedit_core::{Color, ElementId, OrientedRect, Vec2};

/// Default font size for new text, in canvas pixels.
pub const DEFAULT_FONT_SIZE: f32 = 32.0;
/// Smallest font size a text overlay can have.
pub const MIN_FONT_SIZE: f32 = 8.0;
/// Largest font size a text overlay can have.
pub const MAX_FONT_SIZE: f32 = 200.0;

/// Default edge length for new stickers, in canvas pixels.
pub const DEFAULT_STICKER_SIZE: f32 = 96.0;
pub const MIN_STICKER_SIZE: f32 = 16.0;
pub const MAX_STICKER_SIZE: f32 = 512.0;

// Rough glyph metrics used for hit areas; the renderer owns real layout.
const GLYPH_WIDTH_RATIO: f32 = 0.6;
const LINE_HEIGHT_RATIO: f32 = 1.2;

/// Text rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextStyle {
    #[default]
    Modern,
    Bold,
    Italic,
    Outlined,
    Shadow,
    Classic,
}

impl TextStyle {
    pub const ALL: [Self; 6] = [
        Self::Modern,
        Self::Bold,
        Self::Italic,
        Self::Outlined,
        Self::Shadow,
        Self::Classic,
    ];
}

/// A text layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOverlay {
    pub id: ElementId,
    pub text: String,
    pub style: TextStyle,
    pub color: Color,
    pub font_size: f32,
    /// Center of the text on the canvas
    pub position: Vec2,
    /// Radians
    pub rotation: f32,
    pub is_visible: bool,
}

impl TextOverlay {
    pub(crate) fn new(
        id: ElementId,
        text: String,
        style: TextStyle,
        color: Color,
        position: Vec2,
    ) -> Self {
        Self {
            id,
            text,
            style,
            color,
            font_size: DEFAULT_FONT_SIZE,
            position,
            rotation: 0.0,
            is_visible: true,
        }
    }

    /// True when the overlay would render as nothing.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Approximate hit area of the rendered text.
    pub fn bounds(&self) -> OrientedRect {
        let columns = self
            .text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .max(1);
        let rows = self.text.lines().count().max(1);
        let size = Vec2::new(
            columns as f32 * self.font_size * GLYPH_WIDTH_RATIO,
            rows as f32 * self.font_size * LINE_HEIGHT_RATIO,
        );
        OrientedRect::new(self.position, size, self.rotation)
    }
}

/// Partial update for a [`TextOverlay`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextOverlayPatch {
    pub text: Option<String>,
    pub style: Option<TextStyle>,
    pub color: Option<Color>,
    pub font_size: Option<f32>,
    pub position: Option<Vec2>,
    pub rotation: Option<f32>,
    pub is_visible: Option<bool>,
}

impl TextOverlayPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn position(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    pub fn rotation(mut self, radians: f32) -> Self {
        self.rotation = Some(radians);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.is_visible = Some(visible);
        self
    }

    /// Merge into `overlay`. Sizes clamp; non-finite numbers are ignored.
    pub(crate) fn apply_to(&self, overlay: &mut TextOverlay) {
        if let Some(text) = &self.text {
            overlay.text.clone_from(text);
        }
        if let Some(style) = self.style {
            overlay.style = style;
        }
        if let Some(color) = self.color {
            overlay.color = color;
        }
        if let Some(size) = self.font_size.filter(|s| s.is_finite()) {
            overlay.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        }
        if let Some(position) = self.position.filter(|p| p.is_finite()) {
            overlay.position = position;
        }
        if let Some(rotation) = self.rotation.filter(|r| r.is_finite()) {
            overlay.rotation = rotation;
        }
        if let Some(visible) = self.is_visible {
            overlay.is_visible = visible;
        }
    }
}

/// An emoji sticker layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerElement {
    pub id: ElementId,
    pub emoji: String,
    /// Center of the sticker on the canvas
    pub position: Vec2,
    /// Radians
    pub rotation: f32,
    /// Edge length of the square sticker
    pub size: f32,
    /// 0.0 (transparent) to 1.0 (opaque)
    pub opacity: f32,
    pub is_visible: bool,
}

impl StickerElement {
    pub(crate) fn new(id: ElementId, emoji: String, position: Vec2) -> Self {
        Self {
            id,
            emoji,
            position,
            rotation: 0.0,
            size: DEFAULT_STICKER_SIZE,
            opacity: 1.0,
            is_visible: true,
        }
    }

    pub fn bounds(&self) -> OrientedRect {
        OrientedRect::new(self.position, Vec2::splat(self.size), self.rotation)
    }
}

/// Partial update for a [`StickerElement`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StickerPatch {
    pub emoji: Option<String>,
    pub position: Option<Vec2>,
    pub rotation: Option<f32>,
    pub size: Option<f32>,
    pub opacity: Option<f32>,
    pub is_visible: Option<bool>,
}

impl StickerPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    pub fn position(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    pub fn rotation(mut self, radians: f32) -> Self {
        self.rotation = Some(radians);
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.is_visible = Some(visible);
        self
    }

    /// Merge into `sticker`. A blank emoji is ignored so a sticker never
    /// loses its glyph.
    pub(crate) fn apply_to(&self, sticker: &mut StickerElement) {
        if let Some(emoji) = self.emoji.as_ref().filter(|e| !e.trim().is_empty()) {
            sticker.emoji.clone_from(emoji);
        }
        if let Some(position) = self.position.filter(|p| p.is_finite()) {
            sticker.position = position;
        }
        if let Some(rotation) = self.rotation.filter(|r| r.is_finite()) {
            sticker.rotation = rotation;
        }
        if let Some(size) = self.size.filter(|s| s.is_finite()) {
            sticker.size = size.clamp(MIN_STICKER_SIZE, MAX_STICKER_SIZE);
        }
        if let Some(opacity) = self.opacity.filter(|o| o.is_finite()) {
            sticker.opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(visible) = self.is_visible {
            sticker.is_visible = visible;
        }
    }
}

/// Borrowed view of either kind of element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementRef<'a> {
    Text(&'a TextOverlay),
    Sticker(&'a StickerElement),
}

impl ElementRef<'_> {
    pub fn id(&self) -> ElementId {
        match self {
            ElementRef::Text(t) => t.id,
            ElementRef::Sticker(s) => s.id,
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            ElementRef::Text(t) => t.is_visible,
            ElementRef::Sticker(s) => s.is_visible,
        }
    }

    pub fn position(&self) -> Vec2 {
        match self {
            ElementRef::Text(t) => t.position,
            ElementRef::Sticker(s) => s.position,
        }
    }

    pub fn bounds(&self) -> OrientedRect {
        match self {
            ElementRef::Text(t) => t.bounds(),
            ElementRef::Sticker(s) => s.bounds(),
        }
    }
}
