use super::*;

#[test]
fn first_entry_starts_open() {
    let state = AccordionState::default();
    assert_eq!(state.open_index(), Some(0));
    assert!(state.is_open(0));
    assert!(!state.is_open(1));
}

#[test]
fn opening_another_entry_replaces_the_open_one() {
    let mut state = AccordionState::default();
    state.toggle(2);
    assert_eq!(state.open_index(), Some(2));
    assert!(!state.is_open(0));
    assert!(state.is_open(2));
}

#[test]
fn toggling_the_open_entry_closes_everything() {
    let mut state = AccordionState::default();
    state.toggle(0);
    assert_eq!(state.open_index(), None);
    assert!((0..5).all(|i| !state.is_open(i)));
}

#[test]
fn toggle_from_all_closed_opens_target() {
    let mut state = AccordionState::all_closed();
    state.toggle(4);
    assert_eq!(state.open_index(), Some(4));
}

#[test]
fn exactly_one_open_after_any_sequence() {
    let mut state = AccordionState::default();
    for i in [3, 1, 1, 2, 5, 0] {
        state.toggle(i);
        let open_count = (0..6).filter(|&j| state.is_open(j)).count();
        assert!(open_count <= 1);
    }
    assert_eq!(state.open_index(), Some(0));
}
