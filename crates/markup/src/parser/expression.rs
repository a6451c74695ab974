//! Interpreter for a single markup expression.
//!
//! An expression is the bracketed text after a `$` trigger. It resolves to
//! one of two grammars:
//!
//! - Full form, a JSON object:
//!   `{"message-parts":[{"base-text":"Hi","hover-text":"Tip","run-command":"/spawn"}]}`
//! - MiniJSON, comma separated fields:
//!   `({function,base text,function text[,function text 2]})`
//!
//! Anything that is not a JSON object is tried as MiniJSON. A MiniJSON
//! expression naming an unknown function is inert and renders verbatim.

use serde_json::{Map, Value};

use crate::error::{MarkupError, Result};
use crate::parser::legacy::text_segments;
use crate::segment::{ClickAction, RichTextSegment};

const MESSAGE_PARTS: &str = "message-parts";
const BASE_TEXT: &str = "base-text";
const HOVER_TEXT: &str = "hover-text";

/// Click keys of a message part, in priority order.
const CLICK_KEYS: [(&str, fn(String) -> ClickAction); 4] = [
    ("run-command", ClickAction::RunCommand),
    ("suggest-command", ClickAction::SuggestCommand),
    ("open-url", ClickAction::OpenUrl),
    ("copy-to-clipboard", ClickAction::CopyToClipboard),
];

/// The grammar an expression resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grammar {
    /// JSON object with `message-parts`.
    Full,
    /// Compact comma separated form.
    MiniJson,
    /// Neither; rendered as literal text.
    Inert,
}

/// A classified expression, ready to turn into segments.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkupExpression<'a> {
    raw: &'a str,
    kind: ExpressionKind,
}

#[derive(Clone, Debug, PartialEq)]
enum ExpressionKind {
    Full(Vec<MessagePart>),
    MiniJson(MiniJson),
    Inert,
}

/// One entry of a full form `message-parts` array.
#[derive(Clone, Debug, PartialEq)]
pub struct MessagePart {
    pub base_text: String,
    pub hover_text: Option<String>,
    pub click: Option<ClickAction>,
}

/// A recognized MiniJSON expression.
#[derive(Clone, Debug, PartialEq)]
pub struct MiniJson {
    pub function: MiniFunction,
    pub base_text: String,
    pub function_text: String,
    pub function_text2: String,
}

/// MiniJSON function names, with their aliases folded together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MiniFunction {
    /// `hover`, `hover-text`
    Hover,
    /// `command`, `run-command`
    RunCommand,
    /// `suggest-command`
    SuggestCommand,
    /// `link`, `url`, `open-url`
    OpenUrl,
    /// `clipboard`, `copy-to-clipboard`
    CopyToClipboard,
    /// `hover-command`: hover text plus a command to run
    HoverCommand,
    /// `hover-suggest`: hover text plus a command to suggest
    HoverSuggest,
}

impl MiniFunction {
    /// Look up a function name (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        let function = match name.trim().to_lowercase().as_str() {
            "hover" | "hover-text" => MiniFunction::Hover,
            "command" | "run-command" => MiniFunction::RunCommand,
            "suggest-command" => MiniFunction::SuggestCommand,
            "link" | "url" | "open-url" => MiniFunction::OpenUrl,
            "clipboard" | "copy-to-clipboard" => MiniFunction::CopyToClipboard,
            "hover-command" => MiniFunction::HoverCommand,
            "hover-suggest" => MiniFunction::HoverSuggest,
            _ => return None,
        };
        Some(function)
    }
}

impl<'a> MarkupExpression<'a> {
    /// Resolve the grammar of `raw` and validate it.
    ///
    /// # Errors
    ///
    /// A JSON object without a `message-parts` array, a part that is not an
    /// object or has no `base-text`, and a MiniJSON expression with fewer
    /// than three fields are all [`MarkupError`]s.
    ///
    /// # Examples
    ///
    /// ```
    /// use markup::parser::{Grammar, MarkupExpression};
    ///
    /// let expr = MarkupExpression::classify("({hover,Hi,Tip})").unwrap();
    /// assert_eq!(expr.grammar(), Grammar::MiniJson);
    ///
    /// let expr = MarkupExpression::classify("({wave,Hi,there})").unwrap();
    /// assert_eq!(expr.grammar(), Grammar::Inert);
    ///
    /// assert!(MarkupExpression::classify("({hover,Hi})").is_err());
    /// ```
    pub fn classify(raw: &'a str) -> Result<Self> {
        let kind = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(object)) => ExpressionKind::Full(parse_full(&object)?),
            _ => match parse_mini(raw)? {
                Some(mini) => ExpressionKind::MiniJson(mini),
                None => ExpressionKind::Inert,
            },
        };

        let expression = Self { raw, kind };
        log::debug!("expression {:?} resolved as {:?}", raw, expression.grammar());
        Ok(expression)
    }

    /// The captured text, brackets included.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn grammar(&self) -> Grammar {
        match self.kind {
            ExpressionKind::Full(_) => Grammar::Full,
            ExpressionKind::MiniJson(_) => Grammar::MiniJson,
            ExpressionKind::Inert => Grammar::Inert,
        }
    }

    /// Build the segments this expression renders to, in reading order.
    pub fn into_segments(self, block_dark_colors: bool) -> Vec<RichTextSegment> {
        match self.kind {
            ExpressionKind::Full(parts) => parts
                .into_iter()
                .flat_map(|part| {
                    decorate(
                        text_segments(&part.base_text, block_dark_colors),
                        part.hover_text
                            .map(|hover| text_segments(&hover, block_dark_colors)),
                        part.click,
                    )
                })
                .collect(),
            ExpressionKind::MiniJson(mini) => mini.into_segments(block_dark_colors),
            ExpressionKind::Inert => text_segments(self.raw, block_dark_colors),
        }
    }
}

impl MiniJson {
    fn into_segments(self, block_dark_colors: bool) -> Vec<RichTextSegment> {
        let base = text_segments(&self.base_text, block_dark_colors);
        let hover = Some(text_segments(&self.function_text, block_dark_colors));
        let text = self.function_text;
        let text2 = self.function_text2;

        let (hover, click) = match self.function {
            MiniFunction::Hover => (hover, None),
            MiniFunction::RunCommand => (None, Some(ClickAction::RunCommand(text))),
            MiniFunction::SuggestCommand => (None, Some(ClickAction::SuggestCommand(text))),
            MiniFunction::OpenUrl => (None, Some(ClickAction::OpenUrl(text))),
            MiniFunction::CopyToClipboard => (None, Some(ClickAction::CopyToClipboard(text))),
            MiniFunction::HoverCommand => (hover, Some(ClickAction::RunCommand(text2))),
            MiniFunction::HoverSuggest => (hover, Some(ClickAction::SuggestCommand(text2))),
        };

        decorate(base, hover, click)
    }
}

/// Give every segment of one base text the same hover and click.
fn decorate(
    segments: Vec<RichTextSegment>,
    hover: Option<Vec<RichTextSegment>>,
    click: Option<ClickAction>,
) -> Vec<RichTextSegment> {
    segments
        .into_iter()
        .map(|segment| {
            let segment = match &hover {
                Some(hover) => segment.with_hover(hover.clone()),
                None => segment,
            };
            match &click {
                Some(click) => segment.with_click(click.clone()),
                None => segment,
            }
        })
        .collect()
}

fn parse_full(object: &Map<String, Value>) -> Result<Vec<MessagePart>> {
    let parts = object
        .get(MESSAGE_PARTS)
        .and_then(Value::as_array)
        .ok_or(MarkupError::MissingMessageParts)?;

    parts
        .iter()
        .enumerate()
        .map(|(index, part)| {
            let part = part
                .as_object()
                .ok_or(MarkupError::PartNotAnObject { index })?;
            let base_text = part
                .get(BASE_TEXT)
                .map(value_text)
                .ok_or(MarkupError::MissingBaseText { index })?;
            let hover_text = part.get(HOVER_TEXT).map(value_text);
            let click = CLICK_KEYS
                .iter()
                .find_map(|(key, action)| part.get(*key).map(|value| action(value_text(value))));

            Ok(MessagePart {
                base_text,
                hover_text,
                click,
            })
        })
        .collect()
}

/// Strings by content, every other JSON value by its JSON text.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Returns `Ok(None)` for an unknown function.
fn parse_mini(raw: &str) -> Result<Option<MiniJson>> {
    let inner = strip_brackets(raw);
    let inner = inner
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(inner);

    let mut fields: Vec<&str> = inner.split(',').collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }

    if fields.len() < 3 {
        return Err(MarkupError::TooFewFields {
            found: fields.len(),
        });
    }

    let Some(function) = MiniFunction::parse(fields[0]) else {
        log::debug!("unknown MiniJSON function {:?}, rendering verbatim", fields[0]);
        return Ok(None);
    };

    Ok(Some(MiniJson {
        function,
        base_text: unescape(fields[1]),
        function_text: unescape(fields[2]),
        function_text2: fields.get(3).map(|field| unescape(field)).unwrap_or_default(),
    }))
}

/// Drop the outer bracket pair captured by the scanner.
fn strip_brackets(raw: &str) -> &str {
    let raw = raw.strip_prefix(['(', '{']).unwrap_or(raw);
    raw.strip_suffix([')', '}']).unwrap_or(raw)
}

fn unescape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if matches!(next, '(' | ')' | '{' | '}') {
                    chars.next();
                    out.push(next);
                    continue;
                }
            }
        }
        out.push(c);
    }

    out
}
