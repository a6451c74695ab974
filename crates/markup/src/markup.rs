//! RichText result type and parse entry points.
//!
//! This is the result of parsing one chat message.

use serde::{Deserialize, Serialize};

use crate::config::MarkupConfig;
use crate::error::Result;
use crate::segment::RichTextSegment;

/// The result of parsing a chat message.
///
/// An ordered list of segments; the order is the left to right reading
/// order of the original message.
///
/// # Examples
///
/// ```
/// use markup::RichText;
///
/// let parsed = RichText::parse("&cHello $({hover,World,Tip})").unwrap();
/// assert_eq!(parsed.plain_text(), "Hello World");
/// assert_eq!(parsed.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText {
    segments: Vec<RichTextSegment>,
}

impl RichText {
    /// Create a RichText from segments.
    pub fn new(segments: Vec<RichTextSegment>) -> Self {
        Self { segments }
    }

    /// Create a RichText holding one unstyled segment.
    pub fn plain(text: impl Into<String>) -> Self {
        let segment = RichTextSegment::plain(text);
        if segment.is_empty() {
            return Self::default();
        }
        Self::new(vec![segment])
    }

    /// Parse a message with the default configuration.
    pub fn parse(message: &str) -> Result<Self> {
        MarkupParser::default().parse(message)
    }

    /// Text of every segment, concatenated.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(RichTextSegment::text).collect()
    }

    /// Segments in reading order.
    pub fn segments(&self) -> &[RichTextSegment] {
        &self.segments
    }

    /// Iterate over the segments in reading order.
    pub fn iter(&self) -> std::slice::Iter<'_, RichTextSegment> {
        self.segments.iter()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if there are no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns true if no segment carries style, click or hover.
    pub fn is_plain(&self) -> bool {
        self.segments.iter().all(RichTextSegment::is_plain)
    }

    /// Consume the text, returning its segments.
    pub fn into_segments(self) -> Vec<RichTextSegment> {
        self.segments
    }
}

impl<'a> IntoIterator for &'a RichText {
    type Item = &'a RichTextSegment;
    type IntoIter = std::slice::Iter<'a, RichTextSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl IntoIterator for RichText {
    type Item = RichTextSegment;
    type IntoIter = std::vec::IntoIter<RichTextSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

/// Parses chat messages with a fixed configuration.
///
/// Holds no state between calls; one parser can be shared across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkupParser {
    config: MarkupConfig,
}

impl MarkupParser {
    /// Create a parser with the given configuration.
    pub fn new(config: MarkupConfig) -> Self {
        Self { config }
    }

    /// The configuration this parser was built with.
    pub fn config(&self) -> &MarkupConfig {
        &self.config
    }

    /// Parse one message into a RichText.
    pub fn parse(&self, message: &str) -> Result<RichText> {
        crate::parser::assemble(message, &self.config).map(RichText::new)
    }
}

/// Parse one message with the default configuration.
///
/// # Examples
///
/// ```
/// use markup::{ClickAction, parse_expression};
///
/// let text = parse_expression(r#"${"message-parts":[{"base-text":"Hi","run-command":"/spawn"}]}"#).unwrap();
/// assert_eq!(text.len(), 1);
/// assert_eq!(text.segments()[0].click(), Some(&ClickAction::RunCommand("/spawn".into())));
/// ```
pub fn parse_expression(message: &str) -> Result<RichText> {
    RichText::parse(message)
}
