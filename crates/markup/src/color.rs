//! Color types for chat markup.
//!
//! A color is either one of the sixteen legacy palette entries (`&0` to `&f`)
//! or an RGB triple written as a 3 or 6 digit hex literal (`&#f00`,
//! `&#ff0000`).

use serde::{Deserialize, Serialize};

/// Luminescence below this value counts as unreadably dark.
pub const DARK_LUMINESCENCE: f64 = 16.0;

/// Perceptual brightness of an RGB color, in `0.0..=255.0`.
///
/// # Examples
///
/// ```
/// use markup::color::luminescence;
///
/// assert_eq!(luminescence(0, 0, 0), 0.0);
/// assert!((luminescence(255, 255, 255) - 255.0).abs() < 1e-9);
/// ```
pub fn luminescence(r: u8, g: u8, b: u8) -> f64 {
    0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)
}

/// The sixteen legacy palette colors, keyed by their code character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl LegacyColor {
    /// Look up a palette color by its code character (case-insensitive).
    pub fn from_code(code: char) -> Option<Self> {
        let color = match code.to_ascii_lowercase() {
            '0' => LegacyColor::Black,
            '1' => LegacyColor::DarkBlue,
            '2' => LegacyColor::DarkGreen,
            '3' => LegacyColor::DarkAqua,
            '4' => LegacyColor::DarkRed,
            '5' => LegacyColor::DarkPurple,
            '6' => LegacyColor::Gold,
            '7' => LegacyColor::Gray,
            '8' => LegacyColor::DarkGray,
            '9' => LegacyColor::Blue,
            'a' => LegacyColor::Green,
            'b' => LegacyColor::Aqua,
            'c' => LegacyColor::Red,
            'd' => LegacyColor::LightPurple,
            'e' => LegacyColor::Yellow,
            'f' => LegacyColor::White,
            _ => return None,
        };
        Some(color)
    }

    /// The code character for this color.
    pub fn code(self) -> char {
        match self {
            LegacyColor::Black => '0',
            LegacyColor::DarkBlue => '1',
            LegacyColor::DarkGreen => '2',
            LegacyColor::DarkAqua => '3',
            LegacyColor::DarkRed => '4',
            LegacyColor::DarkPurple => '5',
            LegacyColor::Gold => '6',
            LegacyColor::Gray => '7',
            LegacyColor::DarkGray => '8',
            LegacyColor::Blue => '9',
            LegacyColor::Green => 'a',
            LegacyColor::Aqua => 'b',
            LegacyColor::Red => 'c',
            LegacyColor::LightPurple => 'd',
            LegacyColor::Yellow => 'e',
            LegacyColor::White => 'f',
        }
    }

    /// Canonical RGB value of the palette entry.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            LegacyColor::Black => (0, 0, 0),
            LegacyColor::DarkBlue => (0, 0, 170),
            LegacyColor::DarkGreen => (0, 170, 0),
            LegacyColor::DarkAqua => (0, 170, 170),
            LegacyColor::DarkRed => (170, 0, 0),
            LegacyColor::DarkPurple => (170, 0, 170),
            LegacyColor::Gold => (255, 170, 0),
            LegacyColor::Gray => (170, 170, 170),
            LegacyColor::DarkGray => (85, 85, 85),
            LegacyColor::Blue => (85, 85, 255),
            LegacyColor::Green => (85, 255, 85),
            LegacyColor::Aqua => (85, 255, 255),
            LegacyColor::Red => (255, 85, 85),
            LegacyColor::LightPurple => (255, 85, 255),
            LegacyColor::Yellow => (255, 255, 85),
            LegacyColor::White => (255, 255, 255),
        }
    }
}

/// A segment color: legacy palette entry or hex RGB.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Legacy palette color (`&c`).
    Legacy(LegacyColor),
    /// RGB color from a hex literal (`&#ff5733`).
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a hex literal with or without the leading `#`.
    ///
    /// Accepts `rgb` and `rrggbb`; three digit literals are expanded by
    /// doubling each nibble.
    ///
    /// # Examples
    ///
    /// ```
    /// use markup::Color;
    ///
    /// assert_eq!(Color::from_hex("#f00"), Some(Color::Rgb(255, 0, 0)));
    /// assert_eq!(Color::from_hex("ff5733"), Some(Color::Rgb(255, 87, 51)));
    /// assert_eq!(Color::from_hex("#gg0000"), None);
    /// ```
    pub fn from_hex(input: &str) -> Option<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        let digits: Vec<u8> = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<_>>()?;

        match digits.as_slice() {
            [r, g, b] => Some(Color::Rgb(r * 17, g * 17, b * 17)),
            [r1, r2, g1, g2, b1, b2] => {
                Some(Color::Rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2))
            }
            _ => None,
        }
    }

    /// Convert the color to RGB components.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Legacy(legacy) => legacy.to_rgb(),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }

    /// Perceptual brightness of this color.
    pub fn luminescence(self) -> f64 {
        let (r, g, b) = self.to_rgb();
        luminescence(r, g, b)
    }

    /// Returns true if the color is too dark to read on a dark background.
    pub fn is_dark(self) -> bool {
        self.luminescence() < DARK_LUMINESCENCE
    }

    /// Returns true for hex colors.
    pub fn is_hex(self) -> bool {
        matches!(self, Color::Rgb(..))
    }

    /// Lowercase `rrggbb` form for hex colors, `None` for legacy ones.
    pub fn hex_digits(self) -> Option<String> {
        match self {
            Color::Rgb(r, g, b) => Some(format!("{:02x}{:02x}{:02x}", r, g, b)),
            Color::Legacy(_) => None,
        }
    }
}

impl From<LegacyColor> for Color {
    fn from(color: LegacyColor) -> Self {
        Color::Legacy(color)
    }
}
