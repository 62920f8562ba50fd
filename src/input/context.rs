//! The slice of app state that decides how a key is interpreted.

use crate::app::Focus;
use crate::content::StepKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub focus: Focus,
    /// Kind of the step on screen
    pub step: StepKind,
    /// Help overlay open
    pub help_visible: bool,
}

impl InputContext {
    pub fn new(focus: Focus, step: StepKind) -> Self {
        Self {
            focus,
            step,
            help_visible: false,
        }
    }

    pub fn with_help(mut self, visible: bool) -> Self {
        self.help_visible = visible;
        self
    }
}
