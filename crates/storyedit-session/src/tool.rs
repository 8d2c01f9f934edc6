//! Editor tools and the tool sets each editor offers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tool tab in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Trim,
    Text,
    Music,
    Speed,
    Effects,
    Stickers,
    Filters,
    Adjustments,
    Link,
}

impl Tool {
    /// Display name for the tool tab.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Trim => "Trim",
            Tool::Text => "Text",
            Tool::Music => "Music",
            Tool::Speed => "Speed",
            Tool::Effects => "Effects",
            Tool::Stickers => "Stickers",
            Tool::Filters => "Filters",
            Tool::Adjustments => "Adjust",
            Tool::Link => "Link",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The tools an editor exposes, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSet {
    tools: &'static [Tool],
}

const STORY_TOOLS: &[Tool] = &[
    Tool::Text,
    Tool::Stickers,
    Tool::Filters,
    Tool::Adjustments,
    Tool::Music,
    Tool::Link,
];

const REEL_TOOLS: &[Tool] = &[
    Tool::Trim,
    Tool::Text,
    Tool::Music,
    Tool::Speed,
    Tool::Effects,
    Tool::Stickers,
    Tool::Filters,
    Tool::Adjustments,
];

impl ToolSet {
    /// Tools of the image/story editor.
    pub const fn story() -> Self {
        Self { tools: STORY_TOOLS }
    }

    /// Tools of the video/reel editor.
    pub const fn reel() -> Self {
        Self { tools: REEL_TOOLS }
    }

    pub fn contains(self, tool: Tool) -> bool {
        self.tools.contains(&tool)
    }

    pub fn tools(self) -> &'static [Tool] {
        self.tools
    }
}
