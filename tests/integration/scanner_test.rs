//! Control code scanning and stripping.

use ircflow::format::Color;
use ircflow::scanner::{fold, literal_len, Scanner};
use ircflow::{strip, ColorCode, StyleState};
use proptest::prelude::*;

#[test]
fn strip_matches_reference_cases() {
    assert_eq!(strip("Hello World"), "Hello World");
    assert_eq!(strip("\x02Hello \x0FWorld\x1F"), "Hello World");
    assert_eq!(strip("Hello\x03,1 World\x0300 Hello"), "Hello World Hello");
    assert_eq!(strip("Hello\x03, World\x030011 Hello"), "Hello, World11 Hello");
}

#[test]
fn strip_removes_toggles_and_reset() {
    assert_eq!(strip("\x02bold\x02 \x1Funder\x1F \x0Fplain"), "bold under plain");
}

#[test]
fn strip_removes_color_arguments() {
    assert_eq!(strip("\x0304red"), "red");
    assert_eq!(strip("\x034,12both"), "both");
    assert_eq!(strip("\x03plain"), "plain");
}

#[test]
fn strip_keeps_digits_beyond_two() {
    assert_eq!(strip("\x03123"), "3");
    assert_eq!(strip("\x0301,234"), "4");
}

#[test]
fn strip_keeps_comma_without_background() {
    assert_eq!(strip("\x0304,x"), ",x");
    assert_eq!(strip("\x0304,"), ",");
}

#[test]
fn strip_leaves_unicode_alone() {
    assert_eq!(strip("\x02héllo\x02 wörld 日本"), "héllo wörld 日本");
}

#[test]
fn fold_tracks_every_attribute() {
    let style = fold(StyleState::default(), "\x02\x1F\x0304,12");
    assert!(style.bold);
    assert!(style.underline);
    assert_eq!(style.fg_color(), Some(ColorCode::Red));
    assert_eq!(style.bg_color(), Some(ColorCode::LightBlue));
}

#[test]
fn color_replaces_both_channels() {
    let style = fold(StyleState::default(), "\x0304,12\x0305");
    assert_eq!(style.fg, Some(5));
    assert_eq!(style.bg, None);

    let cleared = fold(style, "\x03");
    assert_eq!(cleared.fg, None);
    assert_eq!(cleared.bg, None);
}

#[test]
fn reset_clears_everything() {
    let style = fold(StyleState::default(), "\x02\x1F\x0304,12\x0F");
    assert!(style.is_plain());
}

#[test]
fn fold_continues_from_initial_state() {
    let bold = fold(StyleState::default(), "\x02");
    assert!(!fold(bold, "\x02").bold);
    assert!(fold(bold, "text").bold);
}

#[test]
fn scanner_reports_style_per_literal() {
    let styles: Vec<(char, bool)> = Scanner::new("a\x02b\x02c", StyleState::default())
        .map(|s| (s.ch, s.style.bold))
        .collect();
    assert_eq!(styles, vec![('a', false), ('b', true), ('c', false)]);
}

#[test]
fn encoded_colors_strip_cleanly() {
    let line = format!("{}alert{} done", Color::new(Some(4), Some(1)), Color::new(None, None));
    assert_eq!(strip(&line), "alert done");
    assert_eq!(literal_len(&line), 10);
}

proptest! {
    #[test]
    fn strip_is_idempotent(text in "[a-z0-9, \x02\x03\x0F\x1F]{0,60}") {
        let once = strip(&text);
        prop_assert_eq!(strip(&once), once.clone());
        prop_assert_eq!(literal_len(&text), once.chars().count());
    }
}
