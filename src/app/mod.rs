//! Application state.
//!
//! [`App`] ties the navigation controller to the panel state, the pane focus
//! and the click targets of the last frame. All mutation goes through
//! [`App::execute`] (see `handlers`).

mod handlers;
mod panels;
mod types;

pub use panels::Panels;
pub use types::Focus;

use tracing::{debug, info};

use crate::config::TutorConfig;
use crate::content::{tutorial_outline, StepKind};
use crate::error::TutorResult;
use crate::input::{CommandRegistry, InputContext};
use crate::nav::{NavigationController, Outline};
use crate::ui::hit_area::HitAreaRegistry;

#[derive(Debug)]
pub struct App {
    /// Step navigation; the single owner of the visited set
    pub nav: NavigationController<StepKind>,
    pub panels: Panels,
    pub focus: Focus,
    /// Highlighted sidebar entry while the outline has focus
    pub outline_cursor: usize,
    pub show_sidebar: bool,
    /// Whether the last frame had room for the sidebar
    pub sidebar_fits: bool,
    pub show_help: bool,
    /// Click targets registered by the last render
    pub hit_areas: HitAreaRegistry,
    pub should_quit: bool,
    /// Set by anything that changes what's on screen
    pub needs_redraw: bool,
    registry: CommandRegistry,
}

impl App {
    /// Build the app for the tutorial outline, honouring the configured start
    /// step and layout.
    pub fn new(config: &TutorConfig) -> TutorResult<Self> {
        let outline = tutorial_outline()?;
        let start = config.resolve_start(&outline)?;
        Self::with_outline(outline, start, config.show_sidebar)
    }

    pub fn with_outline(
        outline: Outline<StepKind>,
        start: usize,
        show_sidebar: bool,
    ) -> TutorResult<Self> {
        let nav = NavigationController::new(outline, start)?;
        info!(
            start,
            total = nav.len(),
            show_sidebar,
            "tutorial session started"
        );
        Ok(Self {
            nav,
            panels: Panels::new()?,
            focus: Focus::Lesson,
            outline_cursor: start,
            show_sidebar,
            sidebar_fits: true,
            show_help: false,
            hit_areas: HitAreaRegistry::new(),
            should_quit: false,
            needs_redraw: true,
            registry: CommandRegistry::new(),
        })
    }

    /// Kind of the step on screen.
    pub fn current_kind(&self) -> StepKind {
        self.nav.current_step().content
    }

    pub fn input_context(&self) -> InputContext {
        InputContext::new(self.focus, self.current_kind()).with_help(self.show_help)
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Record whether the terminal has room for the sidebar. The outline
    /// can't keep focus while it is off screen.
    pub fn fit_layout(&mut self, sidebar_fits: bool) {
        self.sidebar_fits = sidebar_fits;
        if !sidebar_fits && self.focus == Focus::Outline {
            debug!("outline no longer fits, focus back to lesson");
            self.focus = Focus::Lesson;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_configured_start() {
        let app = App::new(&TutorConfig::default().with_start("cv_bbox")).unwrap();
        assert_eq!(app.nav.current_index(), 11);
        assert_eq!(app.current_kind(), StepKind::CvBoundingBox);
        assert_eq!(app.outline_cursor, 11);
        assert!(app.nav.is_visited(11));
    }

    #[test]
    fn test_new_rejects_unknown_start() {
        let err = App::new(&TutorConfig::default().with_start("nope")).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_narrow_layout_drops_outline_focus() {
        let mut app = App::new(&TutorConfig::default()).unwrap();
        app.focus = Focus::Outline;
        app.fit_layout(true);
        assert_eq!(app.focus, Focus::Outline);
        app.fit_layout(false);
        assert_eq!(app.focus, Focus::Lesson);
        assert!(!app.sidebar_fits);
    }

    #[test]
    fn test_flat_layout() {
        let app = App::new(&TutorConfig::default().with_sidebar(false)).unwrap();
        assert!(!app.show_sidebar);
        assert!(app.needs_redraw);
    }
}
