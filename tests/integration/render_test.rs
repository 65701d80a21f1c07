//! Styled runs handed to renderers.

use super::helpers::{view_of, A, B, C};
use ircflow::{ColorCode, Selection};

#[test]
fn runs_split_on_style_and_selection() {
    let mut view = view_of(&["\x02ab\x02\x0304cc"], 100);
    view.set_selection(Selection::new((0, 1), (0, 3)));

    let runs = view.runs(0).unwrap();
    let summary: Vec<(&str, bool, bool, u32, u32)> = runs
        .iter()
        .map(|r| (r.text.as_str(), r.style.bold, r.selected, r.x, r.width))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("a", true, false, 0, A),
            ("b", true, true, A, B),
            ("c", false, true, A + B, C),
            ("c", false, false, A + B + C, C),
        ]
    );
    assert_eq!(runs[2].fg_color(), Some(ColorCode::Red));
    assert_eq!(runs[0].fg_color(), None);
}

#[test]
fn continuation_runs_start_with_carried_style() {
    let view = view_of(&["\x0302,08aaaa bbbb"], 40);
    assert_eq!(view.sublines().len(), 2);

    let runs = view.runs(1).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text, "bbbb");
    assert_eq!(runs[0].fg_color(), Some(ColorCode::Blue));
    assert_eq!(runs[0].bg_color(), Some(ColorCode::Yellow));
}

#[test]
fn runs_for_missing_row_is_none() {
    let view = view_of(&["abc"], 100);
    assert!(view.runs(1).is_none());
}
