//! Segment builder for color-translated text.
//!
//! Reads text in the internal `§` form produced by
//! [`apply_color_codes`](crate::codes::apply_color_codes) and splits it into
//! styled segments. Every code closes the current run of text.

use crate::codes::{HEX_CODE, INTERNAL_MARKER, apply_color_codes, is_code};
use crate::color::{Color, LegacyColor};
use crate::segment::RichTextSegment;
use crate::style::{Style, StyleFlags};

/// Build segments from translated text.
///
/// Color codes replace the color and clear decorations, formatting codes add
/// a decoration, `§r` resets both. A `§x` must be followed by six `§<hex>`
/// pairs to form a color; otherwise it is ignored. Empty runs produce no
/// segment.
///
/// # Examples
///
/// ```
/// use markup::parser::segments_from_legacy;
/// use markup::{Color, LegacyColor};
///
/// let segments = segments_from_legacy("§cRed §lbold");
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].text(), "Red ");
/// assert_eq!(segments[1].color(), Some(Color::Legacy(LegacyColor::Red)));
/// assert!(segments[1].style().is_bold());
/// ```
pub fn segments_from_legacy(text: &str) -> Vec<RichTextSegment> {
    SegmentBuilder::new().build(text)
}

/// Translate the authored color codes of `text` and build its segments.
pub fn text_segments(text: &str, block_dark_colors: bool) -> Vec<RichTextSegment> {
    segments_from_legacy(&apply_color_codes(text, block_dark_colors))
}

struct SegmentBuilder {
    style: Style,
    current: String,
    segments: Vec<RichTextSegment>,
}

impl SegmentBuilder {
    fn new() -> Self {
        Self {
            style: Style::default(),
            current: String::new(),
            segments: Vec::new(),
        }
    }

    fn build(mut self, text: &str) -> Vec<RichTextSegment> {
        let chars: Vec<char> = text.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let code = chars.get(i + 1).copied().filter(|&next| is_code(next));

            match (c == INTERNAL_MARKER, code) {
                (true, Some(code)) => {
                    let code = code.to_ascii_lowercase();
                    if code == HEX_CODE {
                        match read_hex_sequence(&chars[i + 2..]) {
                            Some(color) => {
                                self.flush();
                                self.style.set_color(color);
                                i += 14;
                            }
                            None => i += 2,
                        }
                        continue;
                    }
                    self.flush();
                    self.apply_code(code);
                    i += 2;
                }
                _ => {
                    self.current.push(c);
                    i += 1;
                }
            }
        }

        self.flush();
        self.segments
    }

    fn apply_code(&mut self, code: char) {
        if let Some(color) = LegacyColor::from_code(code) {
            self.style.set_color(Color::Legacy(color));
        } else if let Some(flags) = StyleFlags::from_code(code) {
            self.style.add_flags(flags);
        } else if code == 'r' {
            self.style.reset();
        }
    }

    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.current);
        self.segments.push(RichTextSegment::styled(text, self.style));
    }
}

/// Read `§r§r§g§g§b§b` following a `§x`.
fn read_hex_sequence(chars: &[char]) -> Option<Color> {
    if chars.len() < 12 {
        return None;
    }

    let mut digits = String::with_capacity(6);
    for pair in chars[..12].chunks(2) {
        if pair[0] != INTERNAL_MARKER || !pair[1].is_ascii_hexdigit() {
            return None;
        }
        digits.push(pair[1]);
    }

    Color::from_hex(&digits)
}
