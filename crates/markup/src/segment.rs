//! Segment type for styled runs of a rendered message.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::style::{Style, StyleFlags};

/// What happens when a segment is clicked.
///
/// A segment carries at most one click action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum ClickAction {
    /// Run the payload as a command.
    RunCommand(String),
    /// Put the payload into the chat input.
    SuggestCommand(String),
    /// Open the payload as a URL.
    OpenUrl(String),
    /// Copy the payload to the clipboard.
    CopyToClipboard(String),
}

impl ClickAction {
    /// The string the action carries.
    pub fn payload(&self) -> &str {
        match self {
            ClickAction::RunCommand(value)
            | ClickAction::SuggestCommand(value)
            | ClickAction::OpenUrl(value)
            | ClickAction::CopyToClipboard(value) => value,
        }
    }
}

/// A styled run of text within a rendered message.
///
/// Segments are immutable once built; the `with_*` methods consume and
/// return a new segment.
///
/// # Examples
///
/// ```
/// use markup::{ClickAction, RichTextSegment};
///
/// let seg = RichTextSegment::plain("Click me")
///     .with_click(ClickAction::RunCommand("/spawn".into()))
///     .with_hover(vec![RichTextSegment::plain("Teleport")]);
///
/// assert_eq!(seg.text(), "Click me");
/// assert_eq!(seg.click().map(|c| c.payload()), Some("/spawn"));
/// assert_eq!(seg.hover().unwrap()[0].text(), "Teleport");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RichTextSegment {
    text: String,
    #[serde(default, skip_serializing_if = "Style::is_empty")]
    style: Style,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    click: Option<ClickAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hover: Option<Vec<RichTextSegment>>,
}

impl RichTextSegment {
    /// Create an unstyled segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a segment with a style.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            ..Default::default()
        }
    }

    /// Attach a click action, replacing any previous one.
    pub fn with_click(mut self, click: ClickAction) -> Self {
        self.click = Some(click);
        self
    }

    /// Attach hover content, replacing any previous one.
    pub fn with_hover(mut self, hover: Vec<RichTextSegment>) -> Self {
        self.hover = Some(hover);
        self
    }

    /// The text shown for this segment, codes removed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Color and decorations applied to the text.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Shorthand for `style().color`.
    pub fn color(&self) -> Option<Color> {
        self.style.color
    }

    /// Shorthand for `style().flags`.
    pub fn flags(&self) -> StyleFlags {
        self.style.flags
    }

    /// Action run when the segment is clicked, if any.
    pub fn click(&self) -> Option<&ClickAction> {
        self.click.as_ref()
    }

    /// Segments shown while hovering, if any.
    pub fn hover(&self) -> Option<&[RichTextSegment]> {
        self.hover.as_deref()
    }

    /// Hover content flattened to plain text.
    pub fn hover_text(&self) -> Option<String> {
        self.hover
            .as_ref()
            .map(|segments| segments.iter().map(|s| s.text.as_str()).collect())
    }

    /// Returns true if the segment has no style, click or hover.
    pub fn is_plain(&self) -> bool {
        self.style.is_empty() && self.click.is_none() && self.hover.is_none()
    }

    /// Returns true if the segment holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
