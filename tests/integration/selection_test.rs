//! Selections that survive re-wrapping.

use super::helpers::{abc_measure, view_of, width_of};
use ircflow::selection::{extract_text, from_absolute, to_absolute};
use ircflow::{break_line, Selection, SelectionEndpoint, SelectionError, TextView};

fn ep(subline: usize, index: usize) -> SelectionEndpoint {
    SelectionEndpoint::new(subline, index)
}

#[test]
fn whole_line_selection_survives_narrowing() {
    let line = "aaaabbbbcccc";
    let mut view = view_of(&[line], width_of(line));
    assert_eq!(view.sublines().len(), 1);
    view.set_selection(Selection::new((0, 0), (0, 12)));
    assert_eq!(view.current_selection_text().unwrap(), line);

    view.reflow(width_of("aaaabbbb"));
    assert_eq!(view.sublines().len(), 2);
    assert_eq!(view.selection().range(), Some((ep(0, 0), ep(2, 0))));
    assert_eq!(view.current_selection_text().unwrap(), line);

    view.reflow(width_of("bbbb"));
    assert_eq!(view.sublines().len(), 3);
    assert_eq!(view.selection().range(), Some((ep(0, 0), ep(3, 0))));
    assert_eq!(view.current_selection_text().unwrap(), line);
}

#[test]
fn partial_selection_survives_narrowing() {
    let line = "aabcbcaaabac";
    let mut view = view_of(&[line], width_of(line));
    view.set_selection(Selection::new((0, 1), (0, 11)));
    assert_eq!(view.current_selection_text().unwrap(), "abcbcaaaba");

    view.reflow(width_of("aabcbcaa"));
    assert_eq!(view.sublines().len(), 2);
    assert_eq!(view.selection().range(), Some((ep(0, 1), ep(1, 3))));
    assert_eq!(view.current_selection_text().unwrap(), "abcbcaaaba");

    view.reflow(width_of("aabc"));
    assert_eq!(view.sublines().len(), 3);
    assert_eq!(view.selection().range(), Some((ep(0, 1), ep(2, 3))));
    assert_eq!(view.current_selection_text().unwrap(), "abcbcaaaba");
}

#[test]
fn selection_survives_widening_back() {
    let line = "aabcbcaaabac";
    let mut view = view_of(&[line], width_of("aabc"));
    view.set_selection(Selection::new((0, 1), (2, 3)));
    let before = view.current_selection_text().unwrap();

    view.reflow(width_of(line));
    assert_eq!(view.sublines().len(), 1);
    assert_eq!(view.selection().range(), Some((ep(0, 1), ep(0, 11))));
    assert_eq!(view.current_selection_text().unwrap(), before);
}

#[test]
fn break_spaces_and_line_ends_are_restored() {
    let mut view = view_of(&["aa bb", "cc"], 100);
    view.set_selection(Selection::new((0, 0), (2, 0)));
    assert_eq!(view.current_selection_text().unwrap(), "aa bb\ncc");

    view.reflow(width_of("aa "));
    assert_eq!(view.sublines().len(), 3);
    assert_eq!(view.current_selection_text().unwrap(), "aa bb\ncc");
}

#[test]
fn backwards_drag_reads_the_same_text() {
    let view = view_of(&["abcabc"], 100);
    let forward = extract_text(view.sublines(), ep(0, 1), ep(0, 4)).unwrap();
    let backward = extract_text(view.sublines(), ep(0, 4), ep(0, 1)).unwrap();
    assert_eq!(forward, "bca");
    assert_eq!(forward, backward);
}

#[test]
fn selection_past_last_subline_is_out_of_range() {
    let mut view = view_of(&["abc"], 100);
    view.set_selection(Selection::new((5, 0), (6, 0)));
    assert_eq!(
        view.current_selection_text(),
        Err(SelectionError::OutOfRange {
            start: 5,
            end: 6,
            len: 1
        })
    );
}

#[test]
fn empty_selection_reports_no_selection() {
    let view: TextView<_> = view_of(&["abc"], 100);
    assert_eq!(
        view.current_selection_text(),
        Err(SelectionError::NoSelection)
    );
}

#[test]
fn absolute_offsets_count_break_spaces() {
    let sublines = break_line("ab cd", width_of("ab "), &abc_measure());
    assert_eq!(sublines.len(), 2);
    assert_eq!(to_absolute(&sublines, ep(1, 0)), 3);
    assert_eq!(to_absolute(&sublines, ep(1, 2)), 5);

    // Boundary offsets land at the start of the later subline.
    assert_eq!(from_absolute(&sublines, 3), ep(1, 0));
    assert_eq!(from_absolute(&sublines, 2), ep(0, 2));
    assert_eq!(from_absolute(&sublines, 5), ep(2, 0));
    assert_eq!(from_absolute(&sublines, 50), ep(2, 0));
}
