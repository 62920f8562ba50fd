//! Small app-level types.

/// Which pane receives keys that have no global meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    /// The step content
    #[default]
    Lesson,
    /// The chapter sidebar
    Outline,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Lesson => Focus::Outline,
            Focus::Outline => Focus::Lesson,
        }
    }
}
