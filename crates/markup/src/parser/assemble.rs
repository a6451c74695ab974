//! Message assembler.
//!
//! Splits a message on `$(` / `${` triggers, interprets each expression and
//! stitches the literal text between them back together, carrying the
//! active color codes across every expression.

use crate::codes::active_codes;
use crate::config::MarkupConfig;
use crate::error::Result;
use crate::segment::RichTextSegment;

use super::expression::MarkupExpression;
use super::legacy::text_segments;
use super::scanner::{is_opener, scan_enclosed};

/// Character that introduces a markup expression.
pub const TRIGGER: char = '$';

/// Parse one message into segments, in reading order.
///
/// A `$` not followed by `(` or `{` is plain text. An expression whose
/// brackets never close loses its `$` and the rest is read as text.
///
/// # Errors
///
/// Fails with a [`MarkupError`](crate::MarkupError) when an expression is
/// structurally malformed; see
/// [`MarkupExpression::classify`](super::MarkupExpression::classify).
///
/// # Examples
///
/// ```
/// use markup::MarkupConfig;
/// use markup::parser::assemble;
///
/// let segments = assemble("Hi $({hover,there,Tip})", &MarkupConfig::default()).unwrap();
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[1].hover_text().as_deref(), Some("Tip"));
/// ```
pub fn assemble(message: &str, config: &MarkupConfig) -> Result<Vec<RichTextSegment>> {
    let block = config.block_dark_colors;

    if !message.contains(TRIGGER) {
        return Ok(text_segments(message, block));
    }

    let mut segments = Vec::new();
    // Codes active at the end of the last literal run, in internal form so
    // translating them again leaves them untouched.
    let mut carried = String::new();
    // Literal text since the last expression, minus any dropped triggers.
    let mut literal = String::new();
    let mut cursor = 0;

    while let Some(found) = message[cursor..].find(TRIGGER) {
        let trigger = cursor + found;
        let open = trigger + TRIGGER.len_utf8();
        literal.push_str(&message[cursor..trigger]);
        cursor = open;

        if !message[open..].chars().next().is_some_and(is_opener) {
            literal.push(TRIGGER);
            continue;
        }

        let Some(enclosed) = scan_enclosed(message, open) else {
            log::trace!("unterminated expression at byte {}, dropping trigger", trigger);
            continue;
        };

        let run = format!("{}{}", carried, literal);
        segments.extend(text_segments(&run, block));
        if config.carry_colors {
            carried = active_codes(&run, block);
        }
        literal.clear();

        let expression = MarkupExpression::classify(enclosed.expression)?;
        segments.extend(expression.into_segments(block));
        cursor = enclosed.end;
    }

    literal.push_str(&message[cursor..]);
    let run = format!("{}{}", carried, literal);
    segments.extend(text_segments(&run, block));

    Ok(segments)
}
