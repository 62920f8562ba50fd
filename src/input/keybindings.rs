//! Default keybindings.
//!
//! Bindings live in three layers: global, per focus, and per step. The
//! registry consults them from most to least specific.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};

use super::command::Command;
use crate::app::Focus;
use crate::content::StepKind;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// A printable character. Shift is already reflected in the char.
    pub const fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    /// Normalize an incoming key: terminals report `W` as Shift+`W`, so
    /// Shift is dropped from character keys.
    pub fn normalized(code: KeyCode, modifiers: KeyModifiers) -> Self {
        match code {
            KeyCode::Char(_) => Self::new(code, modifiers.difference(KeyModifiers::SHIFT)),
            _ => Self::new(code, modifiers),
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Always active
    pub global: HashMap<KeyCombo, Command>,
    /// Active for the focused pane
    pub focus: HashMap<Focus, HashMap<KeyCombo, Command>>,
    /// Active while the lesson pane shows a given step
    pub step: HashMap<StepKind, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            focus: HashMap::new(),
            step: HashMap::new(),
        };
        config.setup_global_bindings();
        config.setup_focus_bindings();
        config.setup_step_bindings();
        config
    }

    fn setup_global_bindings(&mut self) {
        let bindings = [
            (KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit),
            (KeyCombo::char('q'), Command::Quit),
            (KeyCombo::plain(KeyCode::Esc), Command::Quit),
            (KeyCombo::plain(KeyCode::Left), Command::Prev),
            (KeyCombo::plain(KeyCode::Right), Command::Next),
            (KeyCombo::plain(KeyCode::Home), Command::First),
            (KeyCombo::plain(KeyCode::End), Command::Last),
            (KeyCombo::plain(KeyCode::Tab), Command::ToggleFocus),
            (KeyCombo::char('s'), Command::ToggleSidebar),
            (KeyCombo::char('?'), Command::ToggleHelp),
        ];
        self.global.extend(bindings);
    }

    fn setup_focus_bindings(&mut self) {
        let outline = HashMap::from([
            (KeyCombo::plain(KeyCode::Up), Command::OutlineUp),
            (KeyCombo::plain(KeyCode::Down), Command::OutlineDown),
            (KeyCombo::plain(KeyCode::Enter), Command::OutlineConfirm),
        ]);
        self.focus.insert(Focus::Outline, outline);

        let lesson = HashMap::from([
            (KeyCombo::char('['), Command::PrevTrack),
            (KeyCombo::char(']'), Command::NextTrack),
            (KeyCombo::plain(KeyCode::Up), Command::PrevSubStep),
            (KeyCombo::plain(KeyCode::Down), Command::NextSubStep),
        ]);
        self.focus.insert(Focus::Lesson, lesson);
    }

    fn setup_step_bindings(&mut self) {
        let bbox = HashMap::from([
            (KeyCombo::char('h'), Command::MoveBox { dx: -1, dy: 0 }),
            (KeyCombo::char('l'), Command::MoveBox { dx: 1, dy: 0 }),
            (KeyCombo::char('k'), Command::MoveBox { dx: 0, dy: -1 }),
            (KeyCombo::char('j'), Command::MoveBox { dx: 0, dy: 1 }),
            (KeyCombo::char('w'), Command::ResizeWidth(-1)),
            (KeyCombo::char('W'), Command::ResizeWidth(1)),
            (KeyCombo::char('t'), Command::ResizeHeight(-1)),
            (KeyCombo::char('T'), Command::ResizeHeight(1)),
        ]);
        self.step.insert(StepKind::CvBoundingBox, bbox);

        let playback = HashMap::from([(KeyCombo::char(' '), Command::TogglePlayback)]);
        self.step.insert(StepKind::CvConvolution, playback.clone());
        self.step.insert(StepKind::CvTracking, playback);

        let playground = HashMap::from([
            (KeyCombo::char('+'), Command::AdjustRows(1)),
            (KeyCombo::char('='), Command::AdjustRows(1)),
            (KeyCombo::char('-'), Command::AdjustRows(-1)),
            (KeyCombo::char('>'), Command::AdjustCols(1)),
            (KeyCombo::char('<'), Command::AdjustCols(-1)),
            (KeyCombo::char('f'), Command::CycleFill),
            (KeyCombo::char('o'), Command::CycleOperation),
            (KeyCombo::char('r'), Command::Reseed),
        ]);
        self.step.insert(StepKind::Playground, playground);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<Command> {
        self.global.get(combo).copied()
    }

    pub fn get_focus(&self, focus: Focus, combo: &KeyCombo) -> Option<Command> {
        self.focus.get(&focus).and_then(|m| m.get(combo)).copied()
    }

    pub fn get_step(&self, step: StepKind, combo: &KeyCombo) -> Option<Command> {
        self.step.get(&step).and_then(|m| m.get(combo)).copied()
    }

    /// `(keys, description)` pairs for the help overlay.
    pub fn help_entries() -> &'static [(&'static str, &'static str)] {
        &[
            ("← →", "previous / next step"),
            ("Home End", "first / last step"),
            ("Tab", "switch lesson / outline focus"),
            ("↑ ↓", "sub-step, or outline cursor"),
            ("Enter", "open step under outline cursor"),
            ("[ ] 1-9", "switch track"),
            ("h j k l  w W  t T", "move / resize bounding box"),
            ("space", "play / pause convolution or tracking"),
            ("+ -  > <  f o r", "playground rows, cols, fill, op, seed"),
            ("s", "toggle sidebar"),
            ("?", "toggle this help"),
            ("q Esc", "quit"),
        ]
    }
}
