//! Comprehensive tests for the chat markup parser.

use markup::{
    ClickAction, Color, LegacyColor, MarkupConfig, MarkupError, MarkupParser, RichText,
    RichTextSegment, StyleFlags, parse_expression,
};

fn json(text: &RichText) -> String {
    serde_json::to_string(text).unwrap()
}

// ============================================================================
// Plain and colored text
// ============================================================================

#[test]
fn parse_plain_text() {
    let parsed = parse_expression("Hello World").unwrap();
    assert_eq!(parsed.plain_text(), "Hello World");
    assert!(parsed.is_plain());
    assert_eq!(parsed.len(), 1);
}

#[test]
fn parse_empty_string() {
    let parsed = parse_expression("").unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn parse_hex_color() {
    let parsed = parse_expression("&#FF0000Hello").unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed.segments()[0].text(), "Hello");
    assert_eq!(parsed.segments()[0].color(), Some(Color::Rgb(255, 0, 0)));
    insta::assert_snapshot!(json(&parsed), @r#"[{"text":"Hello","style":{"color":{"rgb":[255,0,0]}}}]"#);
}

#[test]
fn parse_blocked_dark_color() {
    let parser = MarkupParser::new(MarkupConfig {
        block_dark_colors: true,
        ..MarkupConfig::default()
    });
    let parsed = parser.parse("&0Hello").unwrap();
    assert_eq!(parsed.segments(), [RichTextSegment::plain("Hello")]);
}

#[test]
fn parse_formatting_codes() {
    let parsed = parse_expression("&6&l&nGold").unwrap();
    let segment = &parsed.segments()[0];
    assert_eq!(segment.color(), Some(Color::Legacy(LegacyColor::Gold)));
    assert_eq!(segment.flags(), StyleFlags::BOLD | StyleFlags::UNDERLINED);
}

// ============================================================================
// MiniJSON expressions
// ============================================================================

#[test]
fn parse_mini_hover() {
    let parsed = parse_expression("Hi $({hover,Click me,Tooltip text})").unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed.segments()[0], RichTextSegment::plain("Hi "));
    assert_eq!(parsed.segments()[1].text(), "Click me");
    assert_eq!(
        parsed.segments()[1].hover(),
        Some(&[RichTextSegment::plain("Tooltip text")][..])
    );
    insta::assert_snapshot!(json(&parsed), @r#"[{"text":"Hi "},{"text":"Click me","hover":[{"text":"Tooltip text"}]}]"#);
}

#[test]
fn parse_mini_too_few_fields() {
    let result = parse_expression("$({hover,OnlyTwoFields})");
    let err = result.unwrap_err();
    assert_eq!(err, MarkupError::TooFewFields { found: 2 });
    assert!(err.is_malformed_expression());
}

#[test]
fn parse_mini_brace_trigger() {
    let parsed = parse_expression("Visit ${link,our site,https://example.com}!").unwrap();
    assert_eq!(parsed.plain_text(), "Visit our site!");
    assert_eq!(
        parsed.segments()[1].click(),
        Some(&ClickAction::OpenUrl("https://example.com".into()))
    );
}

#[test]
fn parse_mini_unknown_function_verbatim() {
    let parsed = parse_expression("a $({dance,b,c}) d").unwrap();
    assert_eq!(parsed.plain_text(), "a ({dance,b,c}) d");
    assert!(parsed.is_plain());
}

#[test]
fn parse_mini_hover_suggest() {
    let parsed = parse_expression("$({hover-suggest,&bMessage,&7Click to message,/msg Steve })").unwrap();
    let segment = &parsed.segments()[0];
    assert_eq!(segment.text(), "Message");
    assert_eq!(segment.color(), Some(Color::Legacy(LegacyColor::Aqua)));
    assert_eq!(
        segment.click(),
        Some(&ClickAction::SuggestCommand("/msg Steve ".into()))
    );
    let hover = segment.hover().unwrap();
    assert_eq!(hover[0].color(), Some(Color::Legacy(LegacyColor::Gray)));
}

// ============================================================================
// Full form expressions
// ============================================================================

#[test]
fn parse_full_run_command() {
    let parsed =
        parse_expression(r#"${"message-parts":[{"base-text":"Hi","run-command":"/spawn"}]}"#)
            .unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed.segments()[0].text(), "Hi");
    assert_eq!(
        parsed.segments()[0].click(),
        Some(&ClickAction::RunCommand("/spawn".into()))
    );
    insta::assert_snapshot!(json(&parsed), @r#"[{"text":"Hi","click":{"action":"run_command","value":"/spawn"}}]"#);
}

#[test]
fn parse_full_multiple_parts() {
    let parsed = parse_expression(
        r#"Party: ${"message-parts":[{"base-text":"&aAccept","run-command":"/party accept"},{"base-text":" "},{"base-text":"&cDeny","run-command":"/party deny","hover-text":"Decline the invite"}]}"#,
    )
    .unwrap();
    assert_eq!(parsed.plain_text(), "Party: Accept Deny");
    let segments = parsed.segments();
    assert_eq!(segments.len(), 4);
    assert_eq!(segments[1].color(), Some(Color::Legacy(LegacyColor::Green)));
    assert_eq!(
        segments[3].click(),
        Some(&ClickAction::RunCommand("/party deny".into()))
    );
    assert_eq!(segments[3].hover_text().as_deref(), Some("Decline the invite"));
    assert!(segments[2].is_plain());
}

#[test]
fn parse_full_missing_message_parts() {
    assert_eq!(
        parse_expression(r#"${"parts":[{"base-text":"Hi"}]}"#),
        Err(MarkupError::MissingMessageParts)
    );
}

#[test]
fn parse_full_missing_base_text() {
    assert_eq!(
        parse_expression(r#"${"message-parts":[{"base-text":"a"},{"open-url":"x"}]}"#),
        Err(MarkupError::MissingBaseText { index: 1 })
    );
}

// ============================================================================
// Recovery
// ============================================================================

#[test]
fn parse_unterminated_expression() {
    let parsed = parse_expression("Hello $(unterminated").unwrap();
    assert_eq!(parsed.segments(), [RichTextSegment::plain("Hello (unterminated")]);
}

#[test]
fn parse_many_unterminated() {
    let parsed = parse_expression("$($($(x").unwrap();
    assert_eq!(parsed.plain_text(), "(((x");
}

#[test]
fn parse_dollar_amounts() {
    let parsed = parse_expression("That costs $20, or $ 5").unwrap();
    assert_eq!(parsed.plain_text(), "That costs $20, or $ 5");
}

// ============================================================================
// Color carry
// ============================================================================

#[test]
fn parse_color_carries_past_expression() {
    let parsed = parse_expression("&#00ff00&lGo $({command,here,/go}) now").unwrap();
    let segments = parsed.segments();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[1].color(), None);
    assert_eq!(segments[2].text(), " now");
    assert_eq!(segments[2].color(), Some(Color::Rgb(0, 255, 0)));
    assert!(segments[2].style().is_bold());
}

#[test]
fn parse_hex_carry_with_dark_colors_blocked() {
    let parser = MarkupParser::new(MarkupConfig {
        block_dark_colors: true,
        ..MarkupConfig::default()
    });
    let parsed = parser
        .parse("&#FF0000Red $({hover,x,y}) after $({hover,z,w}) end")
        .unwrap();
    let segments = parsed.segments();
    assert_eq!(segments.len(), 5);
    assert_eq!(segments[0].color(), Some(Color::Rgb(255, 0, 0)));
    assert_eq!(segments[2].text(), " after ");
    assert_eq!(segments[2].color(), Some(Color::Rgb(255, 0, 0)));
    assert_eq!(segments[4].text(), " end");
    assert_eq!(segments[4].color(), Some(Color::Rgb(255, 0, 0)));
}

#[test]
fn parse_blocked_black_is_not_carried() {
    let parser = MarkupParser::new(MarkupConfig {
        block_dark_colors: true,
        ..MarkupConfig::default()
    });
    let parsed = parser.parse("&0&#000dark $({hover,x,y}) after").unwrap();
    assert_eq!(parsed.plain_text(), "dark x after");
    assert_eq!(parsed.segments()[2].color(), None);
}

#[test]
fn parse_reset_stops_carry() {
    let parsed = parse_expression("&cred&r $({hover,x,y}) plain").unwrap();
    assert!(parsed.segments()[3].is_plain());
}

#[test]
fn parse_unicode() {
    let parsed = parse_expression("&d日本語 $({hover,ホバー,ヒント}) ✓").unwrap();
    assert_eq!(parsed.plain_text(), "日本語 ホバー ✓");
    assert_eq!(
        parsed.segments()[2].color(),
        Some(Color::Legacy(LegacyColor::LightPurple))
    );
}
