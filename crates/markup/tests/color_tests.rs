//! Tests for colors and color code translation.

use markup::parser::text_segments;
use markup::{
    Color, LegacyColor, apply_color_codes, get_color_codes, luminescence, remove_color_codes,
};

const SAMPLES: &[&str] = &[
    "",
    "plain text",
    "&cRed &lbold &rreset",
    "&#FF0000Hello",
    "&#0f0short &#123456long",
    "&#1234567 seven digits",
    "&0black &#000000black hex",
    "Tom & Jerry &z &",
    "&&c double marker",
    "&&cc",
    "&&00 nested black",
    "§c already translated",
    "日本語 &a緑",
];

// ============================================================================
// Color values
// ============================================================================

#[test]
fn all_palette_codes_parse() {
    for code in "0123456789abcdefABCDEF".chars() {
        assert!(LegacyColor::from_code(code).is_some(), "code {}", code);
    }
    for code in "klmnorxgz#".chars() {
        assert!(LegacyColor::from_code(code).is_none(), "code {}", code);
    }
}

#[test]
fn hex_and_legacy_are_distinct() {
    let hex = Color::from_hex("#ffffff").unwrap();
    let legacy = Color::Legacy(LegacyColor::White);
    assert_eq!(hex.to_rgb(), legacy.to_rgb());
    assert_ne!(hex, legacy);
    assert!(hex.is_hex());
    assert!(!legacy.is_hex());
}

#[test]
fn luminescence_matches_components() {
    let color = Color::from_hex("#336699").unwrap();
    let (r, g, b) = color.to_rgb();
    assert_eq!(color.luminescence(), luminescence(r, g, b));
    assert_eq!(color.hex_digits().as_deref(), Some("336699"));
}

// ============================================================================
// Translation properties
// ============================================================================

#[test]
fn apply_is_idempotent() {
    for block in [false, true] {
        for sample in SAMPLES {
            let once = apply_color_codes(sample, block);
            assert_eq!(
                apply_color_codes(&once, block),
                once,
                "sample {:?} block {}",
                sample,
                block
            );
        }
    }
}

#[test]
fn remove_leaves_no_codes() {
    for sample in SAMPLES {
        let stripped = remove_color_codes(sample);
        assert_eq!(get_color_codes(&stripped), "", "sample {:?}", sample);
        assert_eq!(remove_color_codes(&stripped), stripped, "sample {:?}", sample);
    }
}

#[test]
fn remove_matches_segment_text() {
    // A doubled marker exposes a second code once the inner one is stripped.
    for sample in SAMPLES.iter().filter(|sample| !sample.contains("&&")) {
        let stripped = remove_color_codes(sample);
        let segments = text_segments(sample, false);
        let joined: String = segments.iter().map(|s| s.text()).collect();
        assert_eq!(stripped, joined, "sample {:?}", sample);
    }
}

#[test]
fn codes_restore_final_style() {
    for sample in SAMPLES {
        let original = text_segments(&format!("{} end", sample), false);
        let restored = text_segments(&format!("{} end", get_color_codes(sample)), false);
        assert_eq!(
            original.last().map(|s| *s.style()),
            restored.last().map(|s| *s.style()),
            "sample {:?}",
            sample
        );
    }
}

// ============================================================================
// Luminescence gate
// ============================================================================

#[test]
fn black_hex_is_dropped() {
    assert_eq!(apply_color_codes("&#000000Hi", true), "Hi");
    assert_eq!(apply_color_codes("&#000Hi", true), "Hi");
}

#[test]
fn white_hex_is_kept() {
    assert_eq!(apply_color_codes("&#ffffffHi", true), "§x§f§f§f§f§f§fHi");
    assert_eq!(apply_color_codes("&#fffHi", true), "§x§f§f§f§f§f§fHi");
}

#[test]
fn gate_boundary_is_sixteen() {
    // grey 0x0f is 15, 0x10 is exactly 16
    assert_eq!(apply_color_codes("&#0f0f0f", true), "");
    assert_eq!(apply_color_codes("&#101010", true), "§x§1§0§1§0§1§0");
}

#[test]
fn nested_black_is_blocked() {
    assert_eq!(apply_color_codes("&&00Hi", true), "Hi");
    assert_eq!(apply_color_codes("&&&000Hi", true), "Hi");
}

#[test]
fn gate_is_off_by_default() {
    assert_eq!(apply_color_codes("&0&#000", false), "§0§x§0§0§0§0§0§0");
}

// ============================================================================
// Segments from colored text
// ============================================================================

#[test]
fn red_hex_scenario() {
    let segments = text_segments("&#FF0000Hello", false);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text(), "Hello");
    assert_eq!(segments[0].color(), Some(Color::Rgb(255, 0, 0)));
}

#[test]
fn blocked_black_scenario() {
    let segments = text_segments("&0Hello", true);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text(), "Hello");
    assert_eq!(segments[0].color(), None);
}
