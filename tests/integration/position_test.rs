//! Hit testing wrapped sublines.

use super::helpers::{abc_measure, view_of, A, B, C, LINE_HEIGHT};
use ircflow::position::{find_char_at_pos, find_subline_at_pos};
use ircflow::{break_line, CharHit, SelectionEndpoint};

fn at(subline: usize, index: usize, ch: char) -> CharHit {
    CharHit {
        subline,
        index,
        ch: Some(ch),
    }
}

#[test]
fn hit_resolves_row_then_column() {
    // "aaaa" / "bbbb" / "cccc"
    let view = view_of(&["aaaabbbbcccc"], 32);
    assert_eq!(view.sublines().len(), 3);

    let row = f64::from(LINE_HEIGHT);
    assert_eq!(view.hit_test(0.0, 0.0), Some(at(0, 0, 'a')));
    assert_eq!(view.hit_test(f64::from(A) * 2.5, 1.0), Some(at(0, 2, 'a')));
    assert_eq!(view.hit_test(f64::from(B), row + 1.0), Some(at(1, 1, 'b')));
    assert_eq!(
        view.hit_test(f64::from(C) * 3.0, row * 2.0),
        Some(at(2, 3, 'c'))
    );
}

#[test]
fn character_boundaries_belong_to_the_right_hand_glyph() {
    let view = view_of(&["abc"], 100);
    assert_eq!(view.hit_test(f64::from(A) - 0.01, 0.0), Some(at(0, 0, 'a')));
    assert_eq!(view.hit_test(f64::from(A), 0.0), Some(at(0, 1, 'b')));
}

#[test]
fn past_end_of_row_reports_literal_length() {
    let view = view_of(&["\x02ab\x02c"], 100);
    let hit = view.hit_test(500.0, 0.0).unwrap();
    assert_eq!(hit.subline, 0);
    assert_eq!(hit.index, 3);
    assert!(hit.is_past_end());
    assert_eq!(hit.endpoint(), SelectionEndpoint::new(0, 3));
}

#[test]
fn below_last_row_is_a_miss() {
    let view = view_of(&["abc"], 100);
    assert_eq!(view.hit_test(0.0, f64::from(LINE_HEIGHT)), None);
    let (row, subline) = find_subline_at_pos(view.sublines(), 100.0, LINE_HEIGHT);
    assert_eq!(row, 7);
    assert!(subline.is_none());
}

#[test]
fn negative_coordinates_clamp_to_origin() {
    let view = view_of(&["abc", "cba"], 100);
    assert_eq!(view.hit_test(-10.0, -3.0), Some(at(0, 0, 'a')));
    assert_eq!(view.hit_test(-1.0, f64::from(LINE_HEIGHT)), Some(at(1, 0, 'c')));
}

#[test]
fn bold_glyphs_widen_hit_boxes() {
    let measure = abc_measure().with_bold_extra(2);
    let sublines = break_line("\x02ab", 100, &measure);
    // Bold 'a' spans 0..9, bold 'b' spans 9..19.
    assert_eq!(
        find_char_at_pos(&sublines, 8.0, 0.0, &measure),
        Some(at(0, 0, 'a'))
    );
    assert_eq!(
        find_char_at_pos(&sublines, 9.0, 0.0, &measure),
        Some(at(0, 1, 'b'))
    );
}

#[test]
fn midpoints_round_trip_to_indices() {
    let line = "abcabcab";
    let view = view_of(&[line], 200);
    let mut left = 0.0;
    for (i, ch) in line.chars().enumerate() {
        let width = f64::from(super::helpers::width_of(&ch.to_string()));
        assert_eq!(view.hit_test(left + width / 2.0, 5.0), Some(at(0, i, ch)));
        left += width;
    }
    let past = view.hit_test(left + 1.0, 5.0).unwrap();
    assert_eq!(past.index, line.len());
    assert!(past.is_past_end());
}
