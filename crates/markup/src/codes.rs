//! Color code translation.
//!
//! Authors write colors with the `&` marker: legacy codes (`&c`, `&l`) and
//! hex literals (`&#f00`, `&#ff0000`). [`apply_color_codes`] rewrites all of
//! them into the internal `§` form that the segment builder reads:
//!
//! ```text
//! &c        -> §c
//! &#ff0000  -> §x§f§f§0§0§0§0
//! &#f00     -> §x§f§f§0§0§0§0
//! ```
//!
//! The patterns are compiled once per process and never mutated.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::color::{Color, DARK_LUMINESCENCE};

/// Marker authors type in front of a color code.
pub const AUTHOR_MARKER: char = '&';

/// Marker used in translated text.
pub const INTERNAL_MARKER: char = '§';

/// Code that introduces a six nibble hex sequence in translated text.
pub const HEX_CODE: char = 'x';

/// Every code character a marker can precede.
///
/// The sixteen palette colors, the formatting codes, reset, and the hex
/// sequence introducer.
pub const LEGACY_CODES: &str = "0123456789abcdefklmnorx";

static HEX_SIX: Lazy<Regex> =
    Lazy::new(|| Regex::new("&#([0-9a-fA-F]{6})").expect("valid six digit hex pattern"));

static HEX_THREE: Lazy<Regex> =
    Lazy::new(|| Regex::new("&#([0-9a-fA-F]{3})").expect("valid three digit hex pattern"));

/// Returns true if `c` is a valid code character (case-insensitive).
pub fn is_code(c: char) -> bool {
    LEGACY_CODES.contains(c.to_ascii_lowercase())
}

/// Translate hex literals and legacy codes into the internal form.
///
/// With `block_dark_colors`, `&0` and any hex literal whose luminescence is
/// below 16 are removed instead of translated.
///
/// # Examples
///
/// ```
/// use markup::codes::apply_color_codes;
///
/// assert_eq!(apply_color_codes("&cHi", false), "§cHi");
/// assert_eq!(apply_color_codes("&#abc", false), "§x§a§a§b§b§c§c");
/// assert_eq!(apply_color_codes("&0&#000Hi", true), "Hi");
/// ```
pub fn apply_color_codes(text: &str, block_dark_colors: bool) -> String {
    // Strip before hex translation so the 0 nibbles of hex literals survive.
    // Repeat until stable: removing `&0` from `&&00` leaves another `&0`.
    let mut text = text.to_string();
    if block_dark_colors {
        while text.contains("&0") {
            text = text.replace("&0", "");
        }
    }

    // Six digits first: the three digit pattern matches their prefix.
    let text = HEX_SIX.replace_all(&text, |caps: &Captures<'_>| {
        hex_replacement(&caps[1], block_dark_colors)
    });
    let text = HEX_THREE.replace_all(&text, |caps: &Captures<'_>| {
        let doubled: String = caps[1].chars().flat_map(|c| [c, c]).collect();
        hex_replacement(&doubled, block_dark_colors)
    });

    translate_legacy(&text)
}

/// Build `&x&r&r&g&g&b&b` from six hex digits, or nothing if too dark.
fn hex_replacement(digits: &str, block_dark_colors: bool) -> String {
    if block_dark_colors {
        let too_dark = Color::from_hex(digits)
            .map(|color| color.luminescence() < DARK_LUMINESCENCE)
            .unwrap_or(false);
        if too_dark {
            log::trace!("dropping dark hex color #{}", digits);
            return String::new();
        }
    }

    let mut out = String::with_capacity(14);
    out.push(AUTHOR_MARKER);
    out.push(HEX_CODE);
    for c in digits.chars() {
        out.push(AUTHOR_MARKER);
        out.push(c);
    }
    out
}

/// `&<code>` to `§<code>`, lowercasing the code.
fn translate_legacy(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == AUTHOR_MARKER {
            if let Some(&next) = chars.peek() {
                if is_code(next) {
                    chars.next();
                    out.push(INTERNAL_MARKER);
                    out.push(next.to_ascii_lowercase());
                    continue;
                }
            }
        }
        out.push(c);
    }

    out
}

/// Remove every color code, leaving plain text.
///
/// A marker that is not followed by a valid code is kept. Stripping runs
/// until no code is left, so in `&&cc` the `&c` exposed by removing the
/// inner code goes too.
///
/// # Examples
///
/// ```
/// use markup::codes::remove_color_codes;
///
/// assert_eq!(remove_color_codes("&c&lHi &#ff0000there"), "Hi there");
/// assert_eq!(remove_color_codes("Tom & Jerry"), "Tom & Jerry");
/// assert_eq!(remove_color_codes("&&cc"), "");
/// ```
pub fn remove_color_codes(text: &str) -> String {
    let mut stripped = strip_codes(&apply_color_codes(text, false));
    loop {
        let next = strip_codes(&apply_color_codes(&stripped, false));
        if next == stripped {
            return stripped;
        }
        stripped = next;
    }
}

fn strip_codes(translated: &str) -> String {
    let mut out = String::with_capacity(translated.len());
    let mut chars = translated.chars().peekable();

    while let Some(c) = chars.next() {
        if c == INTERNAL_MARKER && chars.peek().is_some_and(|&next| is_code(next)) {
            chars.next();
            continue;
        }
        out.push(c);
    }

    out
}

/// Collect the color codes of `text`, in order, in authored (`&`) form.
///
/// Prefixing the result to another run of text and translating it restores
/// the formatting that was active at the end of `text`.
///
/// # Examples
///
/// ```
/// use markup::codes::get_color_codes;
///
/// assert_eq!(get_color_codes("&cHello &lworld"), "&c&l");
/// assert_eq!(get_color_codes("&#f00x"), "&x&f&f&0&0&0&0");
/// ```
pub fn get_color_codes(text: &str) -> String {
    collect_codes(&apply_color_codes(text, false), AUTHOR_MARKER)
}

/// Like [`get_color_codes`], but translated with `block_dark_colors` and
/// returned in internal (`§`) form.
///
/// The result can be prefixed to authored text and translated again with
/// the same setting without the dark color pass touching it: it holds no
/// `&`, so hex nibbles such as `§0` are never mistaken for `&0`.
///
/// ```
/// use markup::codes::active_codes;
///
/// assert_eq!(active_codes("&#f00Red", true), "§x§f§f§0§0§0§0");
/// assert_eq!(active_codes("&cRed &0black", true), "§c");
/// ```
pub fn active_codes(text: &str, block_dark_colors: bool) -> String {
    collect_codes(&apply_color_codes(text, block_dark_colors), INTERNAL_MARKER)
}

fn collect_codes(translated: &str, marker: char) -> String {
    let mut out = String::new();
    let mut chars = translated.chars().peekable();

    while let Some(c) = chars.next() {
        if c == INTERNAL_MARKER {
            if let Some(&next) = chars.peek() {
                if is_code(next) {
                    chars.next();
                    out.push(marker);
                    out.push(next.to_ascii_lowercase());
                }
            }
        }
    }

    out
}
