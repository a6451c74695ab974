//! Chat markup engine.
//!
//! This crate turns chat messages written with color codes and embedded
//! expressions into an ordered list of styled segments that carry hover
//! content and click actions. It only builds the model; rendering it to a
//! terminal, a game client or a web widget is up to the caller.
//!
//! # Overview
//!
//! Colors use the `&` marker:
//!
//! - `&c`, `&a`, ... - Legacy palette colors (`0-9`, `a-f`)
//! - `&l`, `&o`, `&n`, `&m`, `&k` - Bold, italic, underlined, strikethrough, obfuscated
//! - `&r` - Reset
//! - `&#ff5733`, `&#f53` - Hex colors
//!
//! Expressions start with `$` and come in two grammars:
//!
//! ```text
//! $({hover,Click me,Tooltip text})
//! $({hover-command,Home,Teleport home,/home})
//! ${"message-parts":[{"base-text":"Hi","run-command":"/spawn"}]}
//! ```
//!
//! Color state carries across expressions: `&cRed $(...) still red`.
//!
//! # Usage
//!
//! ```
//! use markup::{ClickAction, Color, LegacyColor, RichText};
//!
//! let parsed = RichText::parse("&cHi $({command,there,/spawn})").unwrap();
//! assert_eq!(parsed.plain_text(), "Hi there");
//!
//! let segments = parsed.segments();
//! assert_eq!(segments[0].color(), Some(Color::Legacy(LegacyColor::Red)));
//! assert_eq!(segments[1].click(), Some(&ClickAction::RunCommand("/spawn".into())));
//! ```
//!
//! Parsing is a pure function of its input; nothing is cached or shared
//! between calls beyond the compiled color patterns.

pub mod codes;
pub mod color;
pub mod config;
pub mod error;
pub mod markup;
pub mod parser;
pub mod segment;
pub mod style;

// Re-export main types at crate root
pub use codes::{active_codes, apply_color_codes, get_color_codes, remove_color_codes};
pub use color::{Color, LegacyColor, luminescence};
pub use config::MarkupConfig;
pub use error::{MarkupError, Result};
pub use markup::{MarkupParser, RichText, parse_expression};
pub use segment::{ClickAction, RichTextSegment};
pub use style::{Style, StyleFlags};
