//! Navigation state as an explicit value with pure transitions.
//!
//! [`NavigationState::apply`] maps `(state, input) -> state`. A sequence of
//! inputs is the fold of `apply` in arrival order ([`NavigationState::fold`]).
//! Every transition either applies or leaves the state untouched; nothing here
//! returns an error once the state has been constructed.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{TutorError, TutorResult};

/// Sign of the most recent move. Only used to pick a transition effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Backward,
    #[default]
    Forward,
}

impl Direction {
    /// `-1` or `+1`.
    pub fn sign(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }

    /// Direction of a move from `from` to `to`. Staying put counts as forward.
    pub fn between(from: usize, to: usize) -> Self {
        if to < from {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }
}

/// A navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavInput {
    Next,
    Prev,
    /// Jump to any index; out-of-range targets (including negative ones) are
    /// ignored.
    GoTo(i64),
}

/// Current position, last direction and visit history of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    total: usize,
    current: usize,
    direction: Direction,
    visited: BTreeSet<usize>,
}

impl NavigationState {
    /// Create the initial state for a session of `total` steps starting at
    /// `start`.
    ///
    /// # Errors
    ///
    /// [`TutorError::EmptyOutline`] if `total == 0`,
    /// [`TutorError::StartOutOfRange`] if `start >= total`.
    pub fn new(total: usize, start: usize) -> TutorResult<Self> {
        if total == 0 {
            return Err(TutorError::EmptyOutline);
        }
        if start >= total {
            return Err(TutorError::StartOutOfRange {
                index: start,
                total,
            });
        }
        Ok(Self {
            total,
            current: start,
            direction: Direction::Forward,
            visited: BTreeSet::from([start]),
        })
    }

    /// Pure transition: the state that results from `input`.
    pub fn apply(&self, input: NavInput) -> NavigationState {
        let mut next = self.clone();
        next.apply_in_place(input);
        next
    }

    /// Apply a sequence of inputs in order.
    pub fn fold<I>(self, inputs: I) -> NavigationState
    where
        I: IntoIterator<Item = NavInput>,
    {
        inputs.into_iter().fold(self, |mut state, input| {
            state.apply_in_place(input);
            state
        })
    }

    /// Mutating form of [`apply`](Self::apply). Returns `true` if the input
    /// was applied, `false` if it was rejected.
    pub(crate) fn apply_in_place(&mut self, input: NavInput) -> bool {
        match input {
            NavInput::Next if !self.is_last() => self.go_to(self.current as i64 + 1),
            NavInput::Prev if !self.is_first() => self.go_to(self.current as i64 - 1),
            NavInput::Next | NavInput::Prev => false,
            NavInput::GoTo(target) => self.go_to(target),
        }
    }

    /// The only primitive that moves `current` and grows `visited`.
    fn go_to(&mut self, target: i64) -> bool {
        let Ok(target) = usize::try_from(target) else {
            return false;
        };
        if target >= self.total {
            return false;
        }
        self.direction = Direction::between(self.current, target);
        self.current = target;
        self.visited.insert(target);
        true
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn visited(&self) -> &BTreeSet<usize> {
        &self.visited
    }

    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.contains(&index)
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total
    }

    /// Fraction of the way through, in `[0, 1]`. A single-step session is
    /// complete by definition.
    pub fn progress(&self) -> f64 {
        if self.total <= 1 {
            return 1.0;
        }
        self.current as f64 / (self.total - 1) as f64
    }

    /// [`progress`](Self::progress) as a rounded percentage.
    pub fn progress_percent(&self) -> u16 {
        (self.progress() * 100.0).round() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten() -> NavigationState {
        NavigationState::new(10, 0).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = ten();
        assert_eq!(state.current(), 0);
        assert_eq!(state.direction(), Direction::Forward);
        assert_eq!(state.visited().iter().copied().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_custom_start_is_visited() {
        let state = NavigationState::new(10, 4).unwrap();
        assert!(state.is_visited(4));
        assert!(!state.is_visited(0));
    }

    #[test]
    fn test_zero_steps_rejected() {
        assert!(matches!(
            NavigationState::new(0, 0),
            Err(TutorError::EmptyOutline)
        ));
    }

    #[test]
    fn test_start_out_of_range_rejected() {
        assert!(matches!(
            NavigationState::new(3, 3),
            Err(TutorError::StartOutOfRange { index: 3, total: 3 })
        ));
    }

    #[test]
    fn test_apply_is_pure() {
        let state = ten();
        let moved = state.apply(NavInput::Next);
        assert_eq!(state.current(), 0);
        assert_eq!(moved.current(), 1);
    }

    #[test]
    fn test_goto_sets_direction() {
        let state = ten().apply(NavInput::GoTo(7));
        assert_eq!(state.direction(), Direction::Forward);
        let state = state.apply(NavInput::GoTo(3));
        assert_eq!(state.direction(), Direction::Backward);
        assert_eq!(state.direction().sign(), -1);
    }

    #[test]
    fn test_goto_same_index_is_forward() {
        let state = ten().apply(NavInput::GoTo(5)).apply(NavInput::GoTo(2));
        let same = state.apply(NavInput::GoTo(2));
        assert_eq!(same.current(), 2);
        assert_eq!(same.direction(), Direction::Forward);
    }

    #[test]
    fn test_negative_and_oversized_targets_ignored() {
        let state = ten().apply(NavInput::GoTo(4));
        assert_eq!(state.apply(NavInput::GoTo(-1)), state);
        assert_eq!(state.apply(NavInput::GoTo(10)), state);
        assert_eq!(state.apply(NavInput::GoTo(i64::MIN)), state);
    }

    #[test]
    fn test_apply_in_place_reports_outcome() {
        let mut state = ten();
        assert!(!state.apply_in_place(NavInput::Prev));
        assert!(state.apply_in_place(NavInput::Next));
        assert!(!state.apply_in_place(NavInput::GoTo(99)));
    }

    #[test]
    fn test_fold_matches_sequential_apply() {
        let inputs = [
            NavInput::Next,
            NavInput::Next,
            NavInput::GoTo(8),
            NavInput::Prev,
            NavInput::GoTo(-3),
        ];
        let folded = ten().fold(inputs);
        let mut manual = ten();
        for input in inputs {
            manual = manual.apply(input);
        }
        assert_eq!(folded, manual);
        assert_eq!(folded.current(), 7);
    }

    #[test]
    fn test_progress_single_step() {
        let state = NavigationState::new(1, 0).unwrap();
        assert_eq!(state.progress(), 1.0);
        assert_eq!(state.progress_percent(), 100);
        assert!(state.is_first() && state.is_last());
    }

    #[test]
    fn test_progress_percent_rounds() {
        let state = ten().fold([NavInput::GoTo(5)]);
        // 5 / 9 = 55.55...
        assert_eq!(state.progress_percent(), 56);
    }

    #[test]
    fn test_serializes_snapshot() {
        let state = ten().apply(NavInput::GoTo(2)).apply(NavInput::Prev);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["current"], 1);
        assert_eq!(json["direction"], "backward");
        assert_eq!(json["visited"], serde_json::json!([0, 1, 2]));
    }
}
