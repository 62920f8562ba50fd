//! The top-level navigation controller.
//!
//! [`NavigationController`] owns the [`Outline`] and the session's
//! [`NavigationState`]. It is the single writer of that state; the
//! presentation layer observes it through [`NavigationController::subscribe`],
//! which hands out a `tokio::sync::watch` receiver that sees every applied
//! transition.

use tokio::sync::watch;

use super::outline::{Outline, Step};
use super::state::{Direction, NavInput, NavigationState};
use crate::error::TutorResult;

/// Sequences a fixed list of steps and tracks which ones have been visited.
#[derive(Debug)]
pub struct NavigationController<C> {
    outline: Outline<C>,
    state: NavigationState,
    snapshots: watch::Sender<NavigationState>,
}

impl<C> NavigationController<C> {
    /// Create a controller positioned at `start`.
    ///
    /// # Errors
    ///
    /// Fails if `start` is not a valid index into `outline`. Outlines are
    /// never empty, so the zero-step case is already excluded by
    /// [`OutlineBuilder::build`](super::OutlineBuilder::build).
    pub fn new(outline: Outline<C>, start: usize) -> TutorResult<Self> {
        let state = NavigationState::new(outline.len(), start)?;
        let (snapshots, _) = watch::channel(state.clone());
        tracing::debug!(total = outline.len(), start, "navigation controller created");
        Ok(Self {
            outline,
            state,
            snapshots,
        })
    }

    /// Move to the following step. No-op on the last step.
    pub fn next(&mut self) {
        self.dispatch(NavInput::Next);
    }

    /// Move to the preceding step. No-op on the first step.
    pub fn prev(&mut self) {
        self.dispatch(NavInput::Prev);
    }

    /// Jump to `target`. Anything outside `[0, len)`, including values that
    /// don't fit an `i64`, is ignored.
    pub fn go_to<T: TryInto<i64>>(&mut self, target: T) {
        match target.try_into() {
            Ok(target) => self.dispatch(NavInput::GoTo(target)),
            Err(_) => tracing::trace!("ignored jump to unrepresentable index"),
        }
    }

    /// Apply one input. Rejected inputs leave the state and the watch channel
    /// untouched.
    pub fn dispatch(&mut self, input: NavInput) {
        let from = self.state.current();
        if self.state.apply_in_place(input) {
            tracing::debug!(
                ?input,
                from,
                to = self.state.current(),
                direction = self.state.direction().sign(),
                "navigation applied"
            );
            self.snapshots.send_replace(self.state.clone());
        } else {
            tracing::trace!(?input, current = from, "navigation rejected");
        }
    }

    /// Subscribe to state changes. The receiver starts out marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.snapshots.subscribe()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn outline(&self) -> &Outline<C> {
        &self.outline
    }

    pub fn current_index(&self) -> usize {
        self.state.current()
    }

    pub fn current_step(&self) -> &Step<C> {
        &self.outline.steps()[self.state.current()]
    }

    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    pub fn len(&self) -> usize {
        self.outline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    pub fn is_visited(&self, index: usize) -> bool {
        self.state.is_visited(index)
    }

    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    pub fn progress_percent(&self) -> u16 {
        self.state.progress_percent()
    }

    pub fn can_go_back(&self) -> bool {
        !self.state.is_first()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.state.is_last()
    }

    /// Label for the forward button.
    ///
    /// Names the final step only on the step right before it; everywhere
    /// else it is a plain "Next". `None` on the final step, where the button
    /// is disabled.
    pub fn next_label(&self) -> Option<String> {
        if self.state.is_last() {
            return None;
        }
        let total = self.outline.len();
        if total >= 2 && self.state.current() == total - 2 {
            Some(format!("{} →", self.outline.last().label))
        } else {
            Some("Next →".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(total: usize) -> NavigationController<()> {
        let mut builder = Outline::builder();
        for i in 0..total {
            builder = builder.step(format!("s{i}"), format!("Step {i}"), "", ());
        }
        NavigationController::new(builder.build().unwrap(), 0).unwrap()
    }

    #[test]
    fn test_next_and_prev() {
        let mut nav = controller(3);
        nav.next();
        nav.next();
        assert_eq!(nav.current_index(), 2);
        nav.prev();
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.direction(), Direction::Backward);
    }

    #[test]
    fn test_go_to_accepts_any_integer_type() {
        let mut nav = controller(5);
        nav.go_to(3usize);
        assert_eq!(nav.current_index(), 3);
        nav.go_to(-2i32);
        assert_eq!(nav.current_index(), 3);
        nav.go_to(u64::MAX);
        assert_eq!(nav.current_index(), 3);
        nav.go_to(1u8);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_invalid_start() {
        let outline = Outline::builder().step("only", "Only", "", ()).build().unwrap();
        assert!(NavigationController::new(outline, 1).is_err());
    }

    #[test]
    fn test_current_step() {
        let mut nav = controller(4);
        nav.go_to(2);
        assert_eq!(nav.current_step().id, "s2");
        assert_eq!(nav.current_step().global_index, 2);
    }

    #[test]
    fn test_subscribers_see_applied_moves_only() {
        let mut nav = controller(4);
        let mut rx = nav.subscribe();
        assert!(!rx.has_changed().unwrap());

        nav.prev();
        assert!(!rx.has_changed().unwrap());

        nav.next();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().current(), 1);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_next_label_rule() {
        let mut nav = controller(4);
        assert_eq!(nav.next_label().as_deref(), Some("Next →"));
        nav.go_to(1);
        assert_eq!(nav.next_label().as_deref(), Some("Next →"));
        nav.go_to(2);
        assert_eq!(nav.next_label().as_deref(), Some("Step 3 →"));
        nav.go_to(3);
        assert_eq!(nav.next_label(), None);
    }

    #[test]
    fn test_single_step_controller() {
        let nav = controller(1);
        assert!(!nav.can_go_back());
        assert!(!nav.can_go_forward());
        assert_eq!(nav.progress(), 1.0);
        assert_eq!(nav.next_label(), None);
    }
}
