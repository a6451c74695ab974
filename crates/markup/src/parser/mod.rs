//! Parser for chat markup.
//!
//! This module contains the bracket scanner, the segment builder for
//! color-coded text, the expression interpreter and the message assembler.

mod assemble;
mod expression;
mod legacy;
mod scanner;

pub use assemble::{TRIGGER, assemble};
pub use expression::{Grammar, MarkupExpression, MessagePart, MiniFunction, MiniJson};
pub use legacy::{segments_from_legacy, text_segments};
pub use scanner::{Enclosed, is_opener, scan_enclosed};
