//! Editor session configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Configuration for an editor session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// How many edits can be undone.
    pub history_depth: usize,
    /// Extra touch margin around elements when hit-testing taps, in canvas pixels.
    pub hit_slop: f32,
    /// Select a sticker right after it is added.
    pub select_new_stickers: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_depth: 100,
            hit_slop: 12.0,
            select_new_stickers: true,
        }
    }
}

impl EditorConfig {
    /// Parse from JSON bytes. Missing fields take their defaults.
    pub fn from_json(data: &[u8]) -> Result<Self, ConfigError> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }
}
