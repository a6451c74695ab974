//! Style types for chat markup.
//!
//! A Style combines an optional color with the legacy formatting codes
//! (`&l`, `&o`, `&n`, `&m`, `&k`).

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::color::Color;

bitflags! {
    /// Text decorations toggled by legacy formatting codes.
    ///
    /// # Example
    ///
    /// ```
    /// use markup::StyleFlags;
    ///
    /// let mut flags = StyleFlags::empty();
    /// flags |= StyleFlags::BOLD;
    /// assert!(flags.contains(StyleFlags::BOLD));
    /// assert_eq!(StyleFlags::from_code('o'), Some(StyleFlags::ITALIC));
    /// ```
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct StyleFlags: u8 {
        /// `&l`
        const BOLD = 1 << 0;
        /// `&o`
        const ITALIC = 1 << 1;
        /// `&n`
        const UNDERLINED = 1 << 2;
        /// `&m`
        const STRIKETHROUGH = 1 << 3;
        /// `&k`
        const OBFUSCATED = 1 << 4;
    }
}

impl StyleFlags {
    /// Map a formatting code character to its flag.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'l' => Some(StyleFlags::BOLD),
            'o' => Some(StyleFlags::ITALIC),
            'n' => Some(StyleFlags::UNDERLINED),
            'm' => Some(StyleFlags::STRIKETHROUGH),
            'k' => Some(StyleFlags::OBFUSCATED),
            _ => None,
        }
    }
}

/// Color plus decorations applied to one segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    /// Text color, if any code set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Active decorations.
    #[serde(default, skip_serializing_if = "StyleFlags::is_empty")]
    pub flags: StyleFlags,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a style with only a color.
    pub fn with_color(color: impl Into<Color>) -> Self {
        Self {
            color: Some(color.into()),
            flags: StyleFlags::empty(),
        }
    }

    /// Returns true if no color and no decorations are set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.flags.is_empty()
    }

    /// A color code replaces the color and clears every decoration.
    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
        self.flags = StyleFlags::empty();
    }

    /// A formatting code adds to the current decorations.
    pub fn add_flags(&mut self, flags: StyleFlags) {
        self.flags |= flags;
    }

    /// `&r`: back to no color and no decorations.
    pub fn reset(&mut self) {
        *self = Style::default();
    }

    pub fn is_bold(&self) -> bool {
        self.flags.contains(StyleFlags::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        self.flags.contains(StyleFlags::ITALIC)
    }
}
