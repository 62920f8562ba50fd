//! Maps key events to commands for the current context.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::app::Focus;

/// Dispatches key events using a priority order:
/// 1. Ctrl+C always quits
/// 2. While help is open, any other key closes it
/// 3. Step bindings (lesson focus only)
/// 4. Focus bindings, then digit track selection in the lesson
/// 5. Global bindings
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` means the key is not bound here.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }
        if context.help_visible {
            return Some(Command::ToggleHelp);
        }

        let combo = KeyCombo::normalized(key.code, key.modifiers);

        if context.focus == Focus::Lesson {
            if let Some(cmd) = self.config.get_step(context.step, &combo) {
                return Some(cmd);
            }
        }
        if let Some(cmd) = self.config.get_focus(context.focus, &combo) {
            return Some(cmd);
        }
        if context.focus == Focus::Lesson && combo.modifiers.is_empty() {
            if let KeyCode::Char(c @ '1'..='9') = combo.code {
                let n = c.to_digit(10).unwrap_or(1) as usize;
                return Some(Command::SelectTrack(n - 1));
            }
        }
        self.config.get_global(&combo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::StepKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn lesson(step: StepKind) -> InputContext {
        InputContext::new(Focus::Lesson, step)
    }

    #[test]
    fn test_arrows_navigate_steps() {
        let registry = CommandRegistry::new();
        let ctx = lesson(StepKind::Scalars);
        assert_eq!(registry.dispatch(key(KeyCode::Right), &ctx), Some(Command::Next));
        assert_eq!(registry.dispatch(key(KeyCode::Left), &ctx), Some(Command::Prev));
    }

    #[test]
    fn test_ctrl_c_beats_help() {
        let registry = CommandRegistry::new();
        let ctx = lesson(StepKind::Welcome).with_help(true);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(registry.dispatch(ctrl_c, &ctx), Some(Command::Quit));
        assert_eq!(
            registry.dispatch(key(KeyCode::Right), &ctx),
            Some(Command::ToggleHelp)
        );
    }

    #[test]
    fn test_digits_select_tracks_in_lesson() {
        let registry = CommandRegistry::new();
        let ctx = lesson(StepKind::Conversion);
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('3')), &ctx),
            Some(Command::SelectTrack(2))
        );
        let outline = InputContext::new(Focus::Outline, StepKind::Conversion);
        assert_eq!(registry.dispatch(key(KeyCode::Char('3')), &outline), None);
    }

    #[test]
    fn test_step_bindings_only_in_lesson_focus() {
        let registry = CommandRegistry::new();
        let h = key(KeyCode::Char('h'));
        assert_eq!(
            registry.dispatch(h, &lesson(StepKind::CvBoundingBox)),
            Some(Command::MoveBox { dx: -1, dy: 0 })
        );
        let outline = InputContext::new(Focus::Outline, StepKind::CvBoundingBox);
        assert_eq!(registry.dispatch(h, &outline), None);
    }

    #[test]
    fn test_shifted_char_binding() {
        let registry = CommandRegistry::new();
        let shift_w = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            registry.dispatch(shift_w, &lesson(StepKind::CvBoundingBox)),
            Some(Command::ResizeWidth(1))
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let registry = CommandRegistry::new();
        let mut release = key(KeyCode::Right);
        release.kind = KeyEventKind::Release;
        assert_eq!(registry.dispatch(release, &lesson(StepKind::Welcome)), None);
    }
}
