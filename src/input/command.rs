//! Command definitions for keyboard and mouse input.
//!
//! Key bindings and click targets both resolve to a [`Command`]; the app
//! executes commands without knowing where they came from.

/// Every action the user can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Leave the tutorial (q, Esc, Ctrl+C)
    Quit,
    /// Swap focus between the lesson and the outline (Tab)
    ToggleFocus,
    /// Show or hide the chapter sidebar (s)
    ToggleSidebar,
    /// Show or hide the key help overlay (?)
    ToggleHelp,
    /// Swallowed key
    Noop,

    // =========================================================================
    // Step navigation
    // =========================================================================
    /// Following step (→)
    Next,
    /// Preceding step (←)
    Prev,
    /// First step (Home)
    First,
    /// Last step (End)
    Last,
    /// Jump to a step by global index (sidebar, dial)
    GoTo(usize),

    // =========================================================================
    // Outline focus
    // =========================================================================
    OutlineUp,
    OutlineDown,
    /// Jump to the step under the outline cursor (Enter)
    OutlineConfirm,

    // =========================================================================
    // Panel sub-navigation
    // =========================================================================
    /// ([)
    PrevTrack,
    /// (])
    NextTrack,
    /// Select a track by position (1-9, tab click)
    SelectTrack(usize),
    /// Select a sub-step by position (click)
    SelectSubStep(usize),
    /// (↑)
    PrevSubStep,
    /// (↓)
    NextSubStep,

    // =========================================================================
    // Step-specific
    // =========================================================================
    /// Move the bounding box (h j k l)
    MoveBox { dx: i8, dy: i8 },
    /// Shrink or grow box width (w / W)
    ResizeWidth(i8),
    /// Shrink or grow box height (t / T)
    ResizeHeight(i8),
    /// Start or pause the convolution or tracking animation (space)
    TogglePlayback,
    /// Playground rows (+ / -)
    AdjustRows(isize),
    /// Playground cols (> / <)
    AdjustCols(isize),
    /// Playground fill type (f)
    CycleFill,
    /// Playground operation (o)
    CycleOperation,
    /// Playground random seed (r)
    Reseed,
    /// Show one playground cell's value (click)
    InspectCell { row: usize, col: usize },
}

impl Command {
    /// Whether this command moves between steps.
    pub fn is_step_navigation(&self) -> bool {
        matches!(
            self,
            Command::Next | Command::Prev | Command::First | Command::Last | Command::GoTo(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation_commands() {
        assert!(Command::GoTo(3).is_step_navigation());
        assert!(Command::Last.is_step_navigation());
        assert!(!Command::NextTrack.is_step_navigation());
        assert!(!Command::Quit.is_step_navigation());
    }
}
