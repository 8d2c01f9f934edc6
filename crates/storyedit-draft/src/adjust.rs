//! Image adjustments, filter presets and reel effects.

use serde::{Deserialize, Serialize};

/// Lower bound of every adjustment slider.
pub const ADJUSTMENT_MIN: i32 = -100;
/// Upper bound of every adjustment slider.
pub const ADJUSTMENT_MAX: i32 = 100;

/// Scalar image parameters. Always replaced as a whole.
///
/// Deserialized values are clamped the same way slider input is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawAdjustments")]
pub struct Adjustments {
    pub brightness: i32,
    pub contrast: i32,
    pub saturation: i32,
}

#[derive(Deserialize)]
struct RawAdjustments {
    brightness: i32,
    contrast: i32,
    saturation: i32,
}

impl From<RawAdjustments> for Adjustments {
    fn from(raw: RawAdjustments) -> Self {
        Self::new(raw.brightness, raw.contrast, raw.saturation).clamped()
    }
}

impl Adjustments {
    pub const NEUTRAL: Self = Self {
        brightness: 0,
        contrast: 0,
        saturation: 0,
    };

    pub const fn new(brightness: i32, contrast: i32, saturation: i32) -> Self {
        Self {
            brightness,
            contrast,
            saturation,
        }
    }

    /// Clamp every field into `[-100, 100]`.
    ///
    /// Slider drags may momentarily overshoot because of UI rounding, so
    /// out-of-range input is pulled back rather than rejected.
    pub fn clamped(self) -> Self {
        let clamp = |v: i32| v.clamp(ADJUSTMENT_MIN, ADJUSTMENT_MAX);
        Self {
            brightness: clamp(self.brightness),
            contrast: clamp(self.contrast),
            saturation: clamp(self.saturation),
        }
    }

    pub fn is_neutral(self) -> bool {
        self == Self::NEUTRAL
    }
}

/// Filter presets offered by the story (image) editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoryFilter {
    #[default]
    None,
    Warm,
    Cool,
    Grayscale,
    Vintage,
    Vivid,
    Fade,
}

impl StoryFilter {
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::Warm,
        Self::Cool,
        Self::Grayscale,
        Self::Vintage,
        Self::Vivid,
        Self::Fade,
    ];
}

/// Filter presets offered by the reel (video) editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReelFilter {
    #[default]
    None,
    Warm,
    Cool,
    Grayscale,
    Vintage,
    Cinematic,
    Noir,
}

impl ReelFilter {
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::Warm,
        Self::Cool,
        Self::Grayscale,
        Self::Vintage,
        Self::Cinematic,
        Self::Noir,
    ];
}

/// A filter from either family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "format", content = "preset", rename_all = "lowercase")]
pub enum Filter {
    Story(StoryFilter),
    Reel(ReelFilter),
}

impl From<StoryFilter> for Filter {
    fn from(f: StoryFilter) -> Self {
        Filter::Story(f)
    }
}

impl From<ReelFilter> for Filter {
    fn from(f: ReelFilter) -> Self {
        Filter::Reel(f)
    }
}

/// Motion effect applied to a reel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReelEffect {
    #[default]
    None,
    Glitch,
    Zoom,
    Shake,
    Vhs,
    Sparkle,
}
