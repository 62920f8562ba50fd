//! Invariants of step navigation, checked over ten-step outlines.

mod common;

use common::controller;
use tensorwalk::nav::{Direction, NavInput, NavigationState};

const TOTAL: usize = 10;

/// A deterministic mix of moves, including out-of-range jumps.
fn input_sequence(len: usize) -> Vec<NavInput> {
    (0..len)
        .map(|i| match i % 7 {
            0 | 3 => NavInput::Next,
            1 => NavInput::Prev,
            2 => NavInput::GoTo((i as i64 * 3) % 14 - 2),
            4 => NavInput::GoTo(-1),
            5 => NavInput::GoTo(TOTAL as i64),
            _ => NavInput::GoTo((i % TOTAL) as i64),
        })
        .collect()
}

#[test]
fn test_current_index_stays_in_bounds() {
    for start in 0..TOTAL {
        let mut state = NavigationState::new(TOTAL, start).unwrap();
        for input in input_sequence(200) {
            state = state.apply(input);
            assert!(state.current() < TOTAL, "out of bounds after {input:?}");
        }
    }
}

#[test]
fn test_no_wraparound_at_either_end() {
    let mut nav = controller(TOTAL, TOTAL - 1);
    for _ in 0..25 {
        nav.next();
    }
    assert_eq!(nav.current_index(), TOTAL - 1);

    let mut nav = controller(TOTAL, 0);
    for _ in 0..25 {
        nav.prev();
    }
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn test_visited_never_shrinks() {
    let mut state = NavigationState::new(TOTAL, 4).unwrap();
    let mut previous = state.visited().clone();
    for input in input_sequence(150) {
        state = state.apply(input);
        assert!(state.visited().is_superset(&previous));
        assert!(state.visited().contains(&state.current()));
        previous = state.visited().clone();
    }
}

#[test]
fn test_out_of_range_jump_changes_nothing() {
    let start = NavigationState::new(TOTAL, 0)
        .unwrap()
        .fold([NavInput::Next, NavInput::Next, NavInput::GoTo(7), NavInput::Prev]);
    for target in [-1, TOTAL as i64, 100, i64::MIN, i64::MAX] {
        assert_eq!(start.apply(NavInput::GoTo(target)), start, "goTo({target})");
    }
}

#[test]
fn test_direction_follows_sign_of_jump() {
    for from in 0..TOTAL {
        for to in 0..TOTAL {
            if from == to {
                continue;
            }
            let state = NavigationState::new(TOTAL, from)
                .unwrap()
                .apply(NavInput::GoTo(to as i64));
            let expected = if to > from { 1 } else { -1 };
            assert_eq!(state.direction().sign(), expected, "{from} -> {to}");
        }
    }
}

#[test]
fn test_progress_boundaries() {
    let nav = controller(TOTAL, 0);
    assert_eq!(nav.progress(), 0.0);
    assert_eq!(nav.progress_percent(), 0);

    let nav = controller(TOTAL, TOTAL - 1);
    assert_eq!(nav.progress(), 1.0);
    assert_eq!(nav.progress_percent(), 100);
}

#[test]
fn test_five_nexts_from_start() {
    let mut nav = controller(TOTAL, 0);
    for _ in 0..5 {
        nav.next();
    }
    assert_eq!(nav.current_index(), 5);
    let visited: Vec<usize> = nav.state().visited().iter().copied().collect();
    assert_eq!(visited, vec![0, 1, 2, 3, 4, 5]);
    assert!((nav.progress() - 5.0 / 9.0).abs() < 1e-9);
}

#[test]
fn test_jump_back_keeps_visited() {
    let mut nav = controller(TOTAL, 0);
    for _ in 0..5 {
        nav.next();
    }
    nav.go_to(2);
    assert_eq!(nav.current_index(), 2);
    assert_eq!(nav.direction(), Direction::Backward);
    assert_eq!(nav.direction().sign(), -1);
    assert!(nav.is_visited(5));
    assert_eq!(nav.state().visited().len(), 6);
}

#[test]
fn test_prev_on_first_and_next_on_last_are_noops() {
    let mut nav = controller(TOTAL, 0);
    nav.prev();
    assert_eq!(nav.current_index(), 0);

    let mut nav = controller(TOTAL, 9);
    nav.next();
    assert_eq!(nav.current_index(), 9);
}

#[test]
fn test_far_jump_leaves_state_unchanged() {
    let mut nav = controller(TOTAL, 0);
    nav.next();
    nav.next();
    let before = nav.state().clone();
    nav.go_to(100);
    assert_eq!(nav.state(), &before);
}

#[test]
fn test_subscribers_see_transitions() {
    let mut nav = controller(TOTAL, 0);
    let mut rx = nav.subscribe();
    nav.next();
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().current(), 1);

    // Rejected inputs publish nothing.
    nav.go_to(-3);
    assert!(!rx.has_changed().unwrap());
}

#[test]
fn test_next_label_names_final_step_only_once() {
    let mut nav = controller(TOTAL, 0);
    assert_eq!(nav.next_label().as_deref(), Some("Next →"));
    nav.go_to(TOTAL - 2);
    assert_eq!(nav.next_label().as_deref(), Some("Step 9 →"));
    nav.next();
    assert_eq!(nav.next_label(), None);
}
