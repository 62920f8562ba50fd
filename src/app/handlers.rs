//! Command execution and raw event handling for [`App`].

use std::time::Duration;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, trace};

use super::{App, Focus};
use crate::content::StepKind;
use crate::input::Command;

impl App {
    /// Translate a key through the registry and execute the result.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let context = self.input_context();
        match self.registry.dispatch(key, &context) {
            Some(cmd) => self.execute(cmd),
            None => trace!(code = ?key.code, "unbound key"),
        }
    }

    /// Clicks go through the hit areas of the last frame; wheel scrolls
    /// step through sub-steps; motion updates hover.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_areas.hit_test(mouse.column, mouse.row) {
                    debug!(?action, "click");
                    self.execute(action.command());
                }
            }
            MouseEventKind::ScrollUp => self.execute(Command::PrevSubStep),
            MouseEventKind::ScrollDown => self.execute(Command::NextSubStep),
            MouseEventKind::Moved => {
                if self.hit_areas.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    /// Advance time-driven panels. Only the step on screen animates.
    pub fn tick(&mut self, dt: Duration) {
        match self.current_kind() {
            StepKind::CvTracking => {
                if self.panels.tracking.tick(dt) {
                    self.mark_dirty();
                }
            }
            StepKind::CvConvolution => {
                let steps = self.panels.conv_clock.tick(dt);
                for _ in 0..steps {
                    if !self.panels.conv_clock.is_playing() {
                        break;
                    }
                    self.panels.slide_conv_window();
                }
                if steps > 0 {
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    pub fn execute(&mut self, cmd: Command) {
        if cmd == Command::Noop {
            return;
        }
        trace!(?cmd, "execute");
        match cmd {
            Command::Quit => self.should_quit = true,
            Command::ToggleFocus => self.toggle_focus(),
            Command::ToggleSidebar => {
                self.show_sidebar = !self.show_sidebar;
                if !self.show_sidebar {
                    self.focus = Focus::Lesson;
                }
            }
            Command::ToggleHelp => self.show_help = !self.show_help,
            Command::Noop => {}

            Command::Next => self.nav.next(),
            Command::Prev => self.nav.prev(),
            Command::First => self.nav.go_to(0usize),
            Command::Last => self.nav.go_to(self.nav.len().saturating_sub(1)),
            Command::GoTo(index) => self.nav.go_to(index),

            Command::OutlineUp => self.outline_cursor = self.outline_cursor.saturating_sub(1),
            Command::OutlineDown => {
                self.outline_cursor = (self.outline_cursor + 1).min(self.nav.len() - 1);
            }
            Command::OutlineConfirm => self.nav.go_to(self.outline_cursor),

            Command::PrevTrack
            | Command::NextTrack
            | Command::SelectTrack(_)
            | Command::SelectSubStep(_)
            | Command::PrevSubStep
            | Command::NextSubStep => self.sub_navigate(cmd),

            Command::MoveBox { dx, dy } => {
                if self.current_kind() == StepKind::CvBoundingBox {
                    self.panels.bbox.nudge(dx, dy);
                }
            }
            Command::ResizeWidth(delta) => {
                if self.current_kind() == StepKind::CvBoundingBox {
                    self.panels.bbox.resize_width(delta);
                }
            }
            Command::ResizeHeight(delta) => {
                if self.current_kind() == StepKind::CvBoundingBox {
                    self.panels.bbox.resize_height(delta);
                }
            }
            Command::TogglePlayback => match self.current_kind() {
                StepKind::CvTracking => self.panels.tracking.toggle_playback(),
                StepKind::CvConvolution => self.panels.conv_clock.toggle(),
                _ => {}
            },
            Command::AdjustRows(_)
            | Command::AdjustCols(_)
            | Command::CycleFill
            | Command::CycleOperation
            | Command::Reseed
            | Command::InspectCell { .. } => self.playground(cmd),
        }

        if cmd.is_step_navigation() || cmd == Command::OutlineConfirm {
            self.outline_cursor = self.nav.current_index();
        }
        self.mark_dirty();
    }

    fn toggle_focus(&mut self) {
        if self.focus == Focus::Lesson && !self.sidebar_fits {
            debug!("no room for the outline, focus stays on the lesson");
            return;
        }
        self.focus = self.focus.toggled();
        if self.focus == Focus::Outline {
            self.show_sidebar = true;
            self.outline_cursor = self.nav.current_index();
        }
    }

    /// Track and sub-step commands for the step on screen. The tracking
    /// panel treats its frames as sub-steps.
    fn sub_navigate(&mut self, cmd: Command) {
        let kind = self.current_kind();
        if kind == StepKind::CvTracking {
            let tracking = &mut self.panels.tracking;
            match cmd {
                Command::SelectTrack(frame) | Command::SelectSubStep(frame) => {
                    tracking.scrub(frame)
                }
                Command::PrevTrack | Command::PrevSubStep => tracking.step_back(),
                Command::NextTrack | Command::NextSubStep => tracking.step_forward(),
                _ => {}
            }
            return;
        }

        if kind == StepKind::CvConvolution {
            // Moving the window by hand takes over from the auto-slide.
            self.panels.conv_clock.stop();
        }
        let Some(nav) = self.panels.sub_nav_mut(kind) else {
            return;
        };
        match cmd {
            Command::PrevTrack => nav.prev_track(),
            Command::NextTrack => nav.next_track(),
            Command::SelectTrack(track) => nav.select_track(track),
            Command::SelectSubStep(sub_step) => nav.select_sub_step(sub_step),
            Command::PrevSubStep => nav.retreat_sub_step(),
            Command::NextSubStep => nav.advance_sub_step(),
            _ => {}
        }
        trace!(?kind, position = ?nav.position(), "sub-navigation");
    }

    fn playground(&mut self, cmd: Command) {
        if self.current_kind() != StepKind::Playground {
            return;
        }
        let playground = &mut self.panels.playground;
        match cmd {
            Command::AdjustRows(delta) => playground.adjust_rows(delta),
            Command::AdjustCols(delta) => playground.adjust_cols(delta),
            Command::CycleFill => playground.cycle_fill(),
            Command::CycleOperation => playground.cycle_operation(),
            Command::Reseed => playground.reseed(),
            Command::InspectCell { row, col } => playground.inspect(row, col),
            _ => {}
        }
    }
}
